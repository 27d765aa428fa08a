//! Entry payloads: validation, formatting, and the decrypted in-memory form.

use std::fmt;

use strongbox_core::SecretString;

use crate::category::Category;
use crate::error::{Result, VaultError};
use crate::filename::MAX_LABEL_LEN;

/// Length of a hex private key including the `0x` prefix.
const PRIVATE_KEY_LEN: usize = 66;

/// A decrypted payload held in memory.
///
/// Wraps [`SecretString`] so the plaintext is zeroed on drop. Debug and
/// Display both emit `[REDACTED]`.
pub struct DecryptedPayload {
    inner: SecretString,
}

impl DecryptedPayload {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: SecretString::new(value),
        }
    }

    /// Build from decrypted bytes. Invalid UTF-8 (for instance a legacy
    /// token opened with the wrong password) is kept lossily, not rejected.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(s) => Self::new(s),
            Err(e) => Self::new(String::from_utf8_lossy(e.as_bytes()).into_owned()),
        }
    }

    /// Expose the plaintext value. Use sparingly.
    pub fn expose(&self) -> &str {
        self.inner.expose_secret()
    }
}

impl fmt::Debug for DecryptedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for DecryptedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Trim and check a label. Labels become file names, so they are bounded.
pub fn validate_label(label: &str) -> Result<&str> {
    let label = label.trim();
    if label.is_empty() {
        return Err(VaultError::InvalidInput("name must not be empty".to_string()));
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(VaultError::InvalidInput(format!(
            "name exceeds maximum length of {MAX_LABEL_LEN} bytes"
        )));
    }
    Ok(label)
}

/// Check a payload against the rules for its category.
///
/// Seeds must be 12 or 24 words; private keys must be `0x` plus 64 hex
/// characters. Every payload must be non-empty after trimming.
pub fn validate_payload(category: Category, payload: &str) -> Result<()> {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return Err(VaultError::InvalidInput("data must not be empty".to_string()));
    }

    match category {
        Category::Seeds => {
            let words = trimmed.split_whitespace().count();
            if words != 12 && words != 24 {
                return Err(VaultError::InvalidInput(format!(
                    "seed must have 12 or 24 words, got {words}"
                )));
            }
        }
        Category::PrivateKeys => {
            let valid = trimmed.len() == PRIVATE_KEY_LEN
                && trimmed.starts_with("0x")
                && trimmed[2..].chars().all(|c| c.is_ascii_hexdigit());
            if !valid {
                return Err(VaultError::InvalidInput(
                    "private key must be 0x followed by 64 hex characters".to_string(),
                ));
            }
        }
        Category::Accounts | Category::Others => {}
    }
    Ok(())
}

/// Ordered `key: value` lines making up a structured payload.
#[derive(Default)]
pub struct Fields {
    lines: Vec<(String, String)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Blank keys are ignored; newlines are flattened so
    /// each field stays on one line.
    pub fn push(&mut self, key: &str, value: &str) -> &mut Self {
        let key = key.trim();
        if !key.is_empty() {
            self.lines.push((flatten(key), flatten(value.trim())));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Render as `key: value\n` lines.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|(k, v)| format!("{k}: {v}\n"))
            .collect()
    }
}

/// Account payload: username and password first, then any extra fields.
pub fn account_payload(username: &str, password: &str, extra: &Fields) -> String {
    let mut fields = Fields::new();
    fields.push("Username", username).push("Password", password);
    let mut out = fields.render();
    out.push_str(&extra.render());
    out
}

fn flatten(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}
