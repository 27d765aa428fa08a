//! Error types for vault operations.

use thiserror::Error;

/// Errors that can occur while reading or writing vault entries.
#[derive(Debug, Error)]
pub enum VaultError {
    /// The OS random source could not supply bytes. Abort the operation.
    #[error("Secure random source unavailable: {0}")]
    RandomnessUnavailable(String),

    /// Token failed base64 decoding, was too short, or is not a label.
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// Sealed token tag did not verify: wrong password or tampered data.
    #[error("Integrity check failed: wrong password or corrupted entry")]
    IntegrityCheckFailed,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] std::io::Error),

    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("No data available")]
    NoData,

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("An entry with this name already exists")]
    LabelExists,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience result alias for vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;
