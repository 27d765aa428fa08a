//! # strongbox-core
//!
//! Shared foundation for the Strongbox secret vault:
//!
//! - **Configuration**: JSON5 config file loading, validation, and persistence
//! - **Paths**: base directory, config file, and vault root resolution
//! - **Secrets**: [`SecretString`], the zeroize-on-drop holder for the master password

pub mod config;
pub mod env;
pub mod error;
pub mod paths;
pub mod secret;

pub use config::{Config, TokenFormat};
pub use error::ConfigError;
pub use secret::SecretString;
