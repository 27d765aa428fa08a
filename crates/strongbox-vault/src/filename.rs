//! Filesystem-safe envelope tokens for entry labels.
//!
//! The envelope token alphabet is already URL-safe base64; the only
//! character outside the POSIX portable filename set (`A-Z a-z 0-9 . _ -`)
//! is the `=` padding. Padding is a pure function of the token length, so it
//! is dropped on the way out and restored on the way back in. Names that
//! still carry their padding decode unchanged.

use crate::envelope::EnvelopeCodec;
use crate::error::{Result, VaultError};

/// Longest label, in bytes, whose sealed token stays under 255 bytes.
pub const MAX_LABEL_LEN: usize = 120;

/// Encrypt `label` into a name that is safe as a single path component.
pub fn encrypt_name(codec: &EnvelopeCodec, label: &str, password: &[u8]) -> Result<String> {
    let token = codec.encrypt(label.as_bytes(), password)?;
    Ok(token.trim_end_matches('=').to_string())
}

/// Decrypt a name produced by [`encrypt_name`] back to its label.
///
/// Fails if the padding cannot be restored, the token does not decrypt, or
/// the result is not UTF-8.
pub fn decrypt_name(codec: &EnvelopeCodec, name: &str, password: &[u8]) -> Result<String> {
    let token = restore_padding(name)?;
    let bytes = codec.decrypt(&token, password)?;
    String::from_utf8(bytes)
        .map_err(|_| VaultError::MalformedToken("label is not valid UTF-8".to_string()))
}

/// True if every character of `name` is in the POSIX portable filename set.
pub fn is_portable_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

fn restore_padding(name: &str) -> Result<String> {
    if name.contains('=') {
        return Ok(name.to_string());
    }
    match name.len() % 4 {
        0 => Ok(name.to_string()),
        2 => Ok(format!("{name}==")),
        3 => Ok(format!("{name}=")),
        _ => Err(VaultError::MalformedToken(format!(
            "name length {} is not a valid unpadded base64 length",
            name.len()
        ))),
    }
}
