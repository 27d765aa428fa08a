//! Shared fixtures for the cross-crate integration tests.

use std::path::Path;

use strongbox_core::config::Config;
use strongbox_core::TokenFormat;
use strongbox_vault::{Session, Vault};

/// PBKDF2 rounds used by tests. Far below the production count.
pub const TEST_ROUNDS: u32 = 1_000;

/// A config rooted at `root` with the given token format.
pub fn config_at(root: &Path, format: TokenFormat) -> Config {
    let mut config = Config::default();
    config.vault.root = Some(root.to_path_buf());
    config.vault.format = format;
    config
}

/// Open a vault the way the CLI does, from config plus password.
pub fn open_vault(config: &Config, password: &str) -> Vault {
    let session = Session::from_config(config, password)
        .expect("config should resolve a vault root")
        .with_iterations(TEST_ROUNDS);
    Vault::open(session)
}
