use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::boring2d::Boring2D;

/// Settings of the dump tool, read from a JSON file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// registry name of the rule set to play
    pub rule_set: String,
    /// random plies to play before dumping
    pub plies: usize,
    pub seed: Option<u64>,
    /// elapsed time added per ply, in milliseconds
    pub delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rule_set: Boring2D::NAME.to_string(),
            plies: 20,
            seed: None,
            delay_ms: 2500,
        }
    }
}

/// Expands a leading `~/` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), std::env::var_os("HOME")) {
        (Ok(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => path.to_path_buf(),
    }
}

impl Config {
    /// Reads the config at `path`, falling back to defaults when there is no file.
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = expand_home(path.as_ref());
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        serde_json::from_str(&text).with_context(|| format!("malformed config {}", path.display()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = expand_home(path.as_ref());
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))
    }
}
