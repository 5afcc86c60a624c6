//! Command line interface.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use lichtplan_designer::serialization::{load_from_file, save_to_file};
use lichtplan_designer::{missing_symbols, BuiltinCatalog, Project, SymbolCatalog};
use lichtplan_settings::{default_config_path, Config};

use crate::designer_from_config;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

#[derive(Debug, Parser)]
#[command(
    name = "lichtplan",
    about = "Floor-plan annotation editor for lighting and electrical layouts",
    version,
    long_version = LONG_VERSION
)]
pub struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long = "log-json", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a new project with a single empty floor.
    New {
        file: PathBuf,

        /// Project name (defaults to the configured name)
        #[arg(long)]
        name: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print floors, symbol counts and unknown symbol types of a project.
    Info { file: PathBuf },

    /// Validate a project file.
    Check { file: PathBuf },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::New { file, name, force } => {
            run_new(&config, &file, name, force)?;
            println!("Created {}", file.display());
            Ok(())
        }
        Commands::Info { file } => {
            let project = load(&file)?;
            print!("{}", summarize(&project, &BuiltinCatalog::new()));
            Ok(())
        }
        Commands::Check { file } => {
            let project = load(&file)?;
            let missing = missing_symbols(&project, &BuiltinCatalog::new()).len();
            println!(
                "{}: ok ({} floors, {} symbols, {} unknown symbol types)",
                file.display(),
                project.floor_count(),
                project.symbol_count(),
                missing
            );
            Ok(())
        }
    }
}

/// Loads the explicit config file, or the default one when present.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(default_config_path()
            .map(|p| Config::load_or_default(&p))
            .unwrap_or_default()),
    }
}

pub fn run_new(
    config: &Config,
    file: &Path,
    name: Option<String>,
    force: bool,
) -> anyhow::Result<()> {
    if file.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", file.display());
    }

    if name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        bail!("Project name must not be empty");
    }

    let (mut state, _) = designer_from_config(config);
    if let Some(name) = name {
        state.set_project_name(name);
    }
    save_to_file(state.project(), file)
        .with_context(|| format!("Failed to write {}", file.display()))?;
    tracing::info!("Wrote new project '{}'", state.project().name);
    Ok(())
}

fn load(file: &Path) -> anyhow::Result<Project> {
    load_from_file(file).with_context(|| format!("Failed to open {}", file.display()))
}

/// Human readable overview of a project.
pub fn summarize(project: &Project, catalog: &dyn SymbolCatalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Project: {}", project.name);
    let _ = writeln!(out, "Updated: {}", project.updated_at.to_rfc3339());

    let mut floors: Vec<_> = project.floors.iter().collect();
    floors.sort_by_key(|f| f.order);
    for floor in floors {
        let image = floor
            .floor_plan_image
            .as_ref()
            .map(|img| format!("{} ({}x{})", img.file_name, img.width, img.height))
            .unwrap_or_else(|| "no image".to_string());
        let _ = writeln!(
            out,
            "  [{}] {}: {} symbols, {}",
            floor.order,
            floor.name,
            floor.symbol_count(),
            image
        );
    }

    for missing in missing_symbols(project, catalog) {
        let _ = writeln!(
            out,
            "  unknown symbol type '{}' ({})",
            missing.symbol_id, missing.placed_id
        );
    }
    out
}
