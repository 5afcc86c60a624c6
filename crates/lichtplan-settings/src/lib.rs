//! Lichtplan Settings Crate
//!
//! Handles user configuration: editor defaults, view tuning and the recent files list.

pub mod config;

pub use config::{default_config_path, Config, EditorSettings, ViewSettings};
