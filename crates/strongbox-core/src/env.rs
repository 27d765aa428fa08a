//! Environment variable handling.

use std::env;

/// Get an environment variable, returning None if not set or empty.
pub fn get_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Environment variable names recognised by Strongbox.
pub mod vars {
    /// Base directory override (defaults to `~/.strongbox`).
    pub const STRONGBOX_HOME: &str = "STRONGBOX_HOME";

    /// Config file override.
    pub const STRONGBOX_CONFIG: &str = "STRONGBOX_CONFIG";

    /// Log filter directive, same syntax as `RUST_LOG`.
    pub const STRONGBOX_LOG: &str = "STRONGBOX_LOG";

    /// Master password for non-interactive use.
    pub const STRONGBOX_PASSWORD: &str = "STRONGBOX_PASSWORD";
}
