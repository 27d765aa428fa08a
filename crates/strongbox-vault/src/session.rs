//! Per-session master password and vault settings.

use std::fmt;
use std::path::{Path, PathBuf};

use strongbox_core::{Config, SecretString, TokenFormat};

use crate::envelope::EnvelopeCodec;
use crate::error::{Result, VaultError};

/// Holds the master password for one interactive session.
///
/// Passed by reference into every store and catalog call. The password is
/// never written anywhere and is wiped when replaced or dropped.
pub struct Session {
    password: SecretString,
    root: PathBuf,
    codec: EnvelopeCodec,
}

impl Session {
    /// New session over `root` using the default (sealed) token format.
    pub fn new(root: impl Into<PathBuf>, password: impl Into<SecretString>) -> Self {
        Self {
            password: password.into(),
            root: root.into(),
            codec: EnvelopeCodec::default(),
        }
    }

    /// New session using the vault root and token format from `config`.
    pub fn from_config(config: &Config, password: impl Into<SecretString>) -> Result<Self> {
        let root = config
            .vault_root()
            .map_err(|e| VaultError::InvalidInput(e.to_string()))?;
        Ok(Self::new(root, password).with_format(config.vault.format))
    }

    pub fn with_format(mut self, format: TokenFormat) -> Self {
        self.codec = EnvelopeCodec::new(format);
        self
    }

    /// Use a non-default PBKDF2 round count. Only for tests and benchmarks;
    /// entries written this way are unreadable at the production count.
    pub fn with_iterations(mut self, rounds: u32) -> Self {
        self.codec = self.codec.with_rounds(rounds);
        self
    }

    /// Replace the master password.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password.replace(password);
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn codec(&self) -> &EnvelopeCodec {
        &self.codec
    }

    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }

    /// Password bytes for one encrypt/decrypt call.
    pub(crate) fn password(&self) -> Result<&[u8]> {
        if self.password.is_empty() {
            return Err(VaultError::InvalidInput("password not set".to_string()));
        }
        Ok(self.password.as_bytes())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("password", &"[REDACTED]")
            .field("root", &self.root)
            .field("format", &self.codec.format())
            .finish()
    }
}
