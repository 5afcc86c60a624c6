//! # Lichtplan
//!
//! Floor-plan annotation editor for lighting and electrical layouts. A project holds
//! one or more floors; each floor has an optional background image and a list of
//! placed installation symbols (ceiling lights, sockets, switches, ...).
//!
//! ## Architecture
//!
//! Lichtplan is organized as a workspace with multiple crates:
//!
//! 1. **lichtplan-core** - Shared constants and error types
//! 2. **lichtplan-designer** - Document model, edits, undo/redo, viewport, catalog
//! 3. **lichtplan-settings** - User configuration
//! 4. **lichtplan** - Command line binary that integrates all crates

pub mod cli;

pub use lichtplan_core::{Error, ProjectFileError, Result};
pub use lichtplan_designer as designer;
pub use lichtplan_designer::{
    BuiltinCatalog, CanvasState, DesignerOptions, DesignerState, Project, Viewport,
};
pub use lichtplan_settings::{default_config_path, Config};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Builds an editing session tuned by the user configuration.
pub fn designer_from_config(config: &Config) -> (DesignerState, CanvasState) {
    let options = DesignerOptions {
        history_limit: config.editor.history_limit,
        default_project_name: config.editor.default_project_name.clone(),
        default_floor_name: config.editor.default_floor_name.clone(),
    };
    let viewport = Viewport::with_steps(
        config.view.zoom_step,
        config.view.wheel_zoom_step,
        config.view.fit_padding,
    );
    (DesignerState::with_options(options), CanvasState::new(viewport))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so command output on stdout stays clean
/// - RUST_LOG environment variable support
/// - Pretty or JSON formatting
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
