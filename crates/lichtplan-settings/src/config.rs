//! Configuration and settings management for Lichtplan
//!
//! Provides configuration file handling and validation. Supports JSON and TOML
//! file formats; the default file lives in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Editor settings (history depth, names for new projects and floors)
//! - View settings (zoom factors, fit padding)
//! - Recent files

use lichtplan_core::constants::{
    DEFAULT_FLOOR_NAME, DEFAULT_PROJECT_NAME, MAX_HISTORY, VIEW_PADDING, WHEEL_ZOOM_STEP,
    ZOOM_STEP,
};
use lichtplan_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of entries in the recent files list
pub const DEFAULT_RECENT_FILES_COUNT: usize = 10;

/// Editor behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Number of undo steps kept
    pub history_limit: usize,
    /// Name given to a new project
    pub default_project_name: String,
    /// Name of the first floor of a new project
    pub default_floor_name: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_limit: MAX_HISTORY,
            default_project_name: DEFAULT_PROJECT_NAME.to_string(),
            default_floor_name: DEFAULT_FLOOR_NAME.to_string(),
        }
    }
}

/// Canvas view tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Factor applied by the zoom buttons
    pub zoom_step: f64,
    /// Factor applied per mouse wheel notch
    pub wheel_zoom_step: f64,
    /// Padding kept around the content by zoom to fit, in pixels
    pub fit_padding: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            zoom_step: ZOOM_STEP,
            wheel_zoom_step: WHEEL_ZOOM_STEP,
            fit_padding: VIEW_PADDING,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recent files list, most recent first
    pub recent_files: Vec<PathBuf>,
    /// Maximum length of the recent files list
    pub recent_files_count: usize,
    /// Editor settings
    pub editor: EditorSettings,
    /// View settings
    pub view: ViewSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_files: Vec::new(),
            recent_files_count: DEFAULT_RECENT_FILES_COUNT,
            editor: EditorSettings::default(),
            view: ViewSettings::default(),
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        _ => Err(Error::config("Config file must be .json or .toml")),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid JSON config: {}", e)))?,
            Format::Toml => toml::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid TOML config: {}", e)))?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load_from_file(path).unwrap_or_else(|e| {
            tracing::warn!("Using default config: {}", e);
            Self::default()
        })
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| Error::config(format!("Failed to write config file: {}", e)))?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.editor.history_limit == 0 {
            return Err(Error::config("History limit must be > 0"));
        }

        if self.editor.default_project_name.trim().is_empty()
            || self.editor.default_floor_name.trim().is_empty()
        {
            return Err(Error::config("Default names must not be empty"));
        }

        // NaN fails both comparisons
        if !(self.view.zoom_step > 1.0) || !(self.view.wheel_zoom_step > 1.0) {
            return Err(Error::config("Zoom steps must be > 1"));
        }

        if !(self.view.fit_padding >= 0.0) {
            return Err(Error::config("Fit padding must be >= 0"));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        // Add to front
        self.recent_files.insert(0, path);

        // Trim to max size
        self.recent_files.truncate(self.recent_files_count);
    }
}

/// `<platform config dir>/lichtplan/config.toml`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lichtplan").join("config.toml"))
}
