//! Scaffolding for `roundtrip init`: config file plus target directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::info;

use super::config::{RoundTripConfig, load_config, write_config};

/// Options for `init_workspace`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite an existing config file with defaults.
    pub force: bool,
}

/// Paths touched by `init_workspace`, resolved against its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitPaths {
    pub config_path: PathBuf,
    pub target_dir: PathBuf,
}

/// Write a default config to `root/config` and create the directory the
/// configured target file lives in.
///
/// Fails if the config already exists unless `options.force` is set.
pub fn init_workspace(root: &Path, config: &Path, options: &InitOptions) -> Result<InitPaths> {
    let config_path = root.join(config);
    if config_path.exists() && !options.force {
        return Err(anyhow!(
            "roundtrip init: {} already exists (use --force to overwrite)",
            config_path.display()
        ));
    }
    if config_path.is_dir() {
        return Err(anyhow!(
            "roundtrip init: {} exists but is a directory",
            config_path.display()
        ));
    }

    write_config(&config_path, &RoundTripConfig::default())?;
    let cfg = load_config(&config_path)?;

    let target = root.join(&cfg.path);
    let target_dir = target
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    fs::create_dir_all(&target_dir)
        .with_context(|| format!("create directory {}", target_dir.display()))?;
    info!(config = %config_path.display(), target_dir = %target_dir.display(), "initialized");

    Ok(InitPaths {
        config_path,
        target_dir,
    })
}
