use std::{env, path::Path};

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::config::{ConfigLoadResult, load_config, load_config_file};

/// Load the config named by `--config`, or search upward from the working directory.
pub fn load_command_config(common: &CommonArgs) -> Result<ConfigLoadResult> {
    match &common.config {
        Some(path) => load_config_file(path),
        None => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            load_config(&cwd)
        }
    }
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
