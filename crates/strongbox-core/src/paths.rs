//! Path resolution utilities.

use crate::env::{self, vars};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Get the Strongbox base directory (`$STRONGBOX_HOME` or `~/.strongbox`).
pub fn base_dir() -> Result<PathBuf, ConfigError> {
    if let Some(home) = env::get_var(vars::STRONGBOX_HOME) {
        return Ok(expand_tilde(&home));
    }
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".strongbox"))
}

/// Get the main config file path (`$STRONGBOX_CONFIG` or `<base>/strongbox.json5`).
pub fn config_file() -> Result<PathBuf, ConfigError> {
    if let Some(path) = env::get_var(vars::STRONGBOX_CONFIG) {
        return Ok(expand_tilde(&path));
    }
    Ok(base_dir()?.join("strongbox.json5"))
}

/// Get the default vault root (`<base>/vault`).
pub fn default_vault_root() -> Result<PathBuf, ConfigError> {
    Ok(base_dir()?.join("vault"))
}

/// Expand tilde (~) in a path.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Expand tilde in an already-built path.
pub fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => expand_tilde(s),
        None => path.to_path_buf(),
    }
}
