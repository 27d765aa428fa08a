//! Encrypted entry store for Strongbox.
//!
//! Every secret is one file under a category directory. The file name is the
//! entry's label encrypted with the [`filename`] codec and the content is the
//! payload encrypted with the [`envelope`] codec. Both derive a fresh key
//! from the master password and a per-token random salt via PBKDF2.
//!
//! There is no index: the [`catalog`] is rebuilt on every call by decrypting
//! each file name under the session password and keeping the ones that
//! decrypt cleanly.

pub mod catalog;
pub mod category;
pub mod envelope;
pub mod error;
pub mod filename;
pub mod kdf;
pub mod payload;
pub mod session;
pub mod store;
pub mod vault;

pub use catalog::{Catalog, CatalogEntry, DeleteOutcome};
pub use category::Category;
pub use envelope::EnvelopeCodec;
pub use error::{Result, VaultError};
pub use payload::DecryptedPayload;
pub use session::Session;
pub use store::{EntryStore, FileEntryStore};
pub use strongbox_core::TokenFormat;
pub use vault::{ReservedLabel, Vault};
