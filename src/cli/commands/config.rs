//! Config Command
//!
//! Manage chirp-insight configuration.
//!
//! Usage:
//!   chirp-insight config show [-g] [-f json]
//!   chirp-insight config path
//!   chirp-insight config init [-g] [--force]

use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::types::Result;

/// Show configuration
pub fn show(global: bool, format: &str) -> Result<()> {
    if !global {
        return ConfigLoader::show_config(format == "json");
    }

    match ConfigLoader::global_config_path() {
        Some(path) if path.exists() => {
            let content = std::fs::read_to_string(&path)?;
            println!("# Global Config: {}\n", path.display());
            println!("{}", content);
        }
        Some(_) => {
            println!("No global config found.");
            println!("Run 'chirp-insight config init --global' to create one.");
        }
        None => println!("Cannot determine global config directory."),
    }
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Initialize global or project configuration
pub fn init(global: bool, force: bool) -> Result<()> {
    let (scope, path) = if global {
        ("global", ConfigLoader::global_config_path())
    } else {
        ("project", Some(ConfigLoader::project_config_path()))
    };

    let existed = path.as_ref().is_some_and(|p| p.exists());
    let path = if global {
        ConfigLoader::init_global(force)?
    } else {
        ConfigLoader::init_project(force)?
    };

    let output = Output::new();
    if existed && !force {
        output.warning(&format!(
            "{} configuration already exists (use --force to overwrite)",
            scope
        ));
    } else {
        output.success(&format!("Initialized {} configuration", scope));
    }
    println!("  Config:    {}", path.display());
    Ok(())
}
