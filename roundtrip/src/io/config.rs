//! Round-trip configuration stored in `roundtrip.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::policy::FailurePolicy;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "roundtrip.toml";
pub const DEFAULT_PATH: &str = "files/go2.txt";
pub const DEFAULT_CONTENT: &str = "Hello, this is a sample text file!";

/// Round-trip configuration (TOML).
///
/// Missing fields fall back to the defaults above; command-line flags take
/// precedence over anything loaded from disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoundTripConfig {
    /// Target file, relative to the working directory.
    pub path: PathBuf,

    /// Text written to the target file.
    pub content: String,

    pub failure_policy: FailurePolicy,
}

impl Default for RoundTripConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            content: DEFAULT_CONTENT.to_string(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl RoundTripConfig {
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(anyhow!("path must not be empty"));
        }
        if self.path.file_name().is_none() {
            return Err(anyhow!(
                "path must name a file (got '{}')",
                self.path.display()
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        path: Option<PathBuf>,
        content: Option<String>,
        policy: Option<FailurePolicy>,
    ) -> Result<Self> {
        if let Some(path) = path {
            self.path = path;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(policy) = policy {
            self.failure_policy = policy;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RoundTripConfig::default()`.
pub fn load_config(path: &Path) -> Result<RoundTripConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = RoundTripConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RoundTripConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), target = %cfg.path.display(), "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &RoundTripConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
