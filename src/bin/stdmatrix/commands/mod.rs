//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};

use stdmatrix::util::config::{global_config_path, load_config, project_config_path, Config};

pub mod completions;
pub mod expand;
pub mod standards;

/// Load the config named by `--config`, or merge the global and project files.
pub fn load_settings(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let global = global_config_path().unwrap_or_default();

    Ok(load_config(&global, &project_config_path(&cwd)))
}
