//! High-level vault operations used by the command-line shell.

use tracing::info;

use crate::catalog::Catalog;
use crate::category::Category;
use crate::error::{Result, VaultError};
use crate::filename;
use crate::payload::{self, DecryptedPayload};
use crate::session::Session;
use crate::store::{EntryStore, FileEntryStore};

/// A session bound to an entry store.
pub struct Vault<S = FileEntryStore> {
    session: Session,
    store: S,
}

impl Vault<FileEntryStore> {
    /// Open the on-disk vault at the session's root.
    pub fn open(session: Session) -> Self {
        let store = FileEntryStore::for_session(&session);
        Self { session, store }
    }
}

impl<S: EntryStore> Vault<S> {
    pub fn with_store(session: Session, store: S) -> Self {
        Self { session, store }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the master password for subsequent calls.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.session.set_password(password);
    }

    /// Encrypt and store a new entry.
    ///
    /// Fails with [`VaultError::LabelExists`] if an entry with the same
    /// label is already visible under the current password.
    pub fn add_entry(&self, category: Category, label: &str, payload: &str) -> Result<()> {
        let reserved = self.reserve_label(category, label)?;
        self.add_reserved(category, &reserved, payload)
    }

    /// Validate `label` and check it is not taken in `category`.
    ///
    /// Lets an interactive caller reject a duplicate before collecting the
    /// payload, then store it with [`add_reserved`](Self::add_reserved)
    /// without scanning the category a second time.
    pub fn reserve_label(&self, category: Category, label: &str) -> Result<ReservedLabel> {
        let label = payload::validate_label(label)?;
        if self.store.label_exists(&self.session, category, label)? {
            return Err(VaultError::LabelExists);
        }
        Ok(ReservedLabel {
            category,
            label: label.to_string(),
        })
    }

    /// Encrypt and store a new entry under a label from
    /// [`reserve_label`](Self::reserve_label).
    pub fn add_reserved(
        &self,
        category: Category,
        reserved: &ReservedLabel,
        payload: &str,
    ) -> Result<()> {
        if reserved.category != category {
            return Err(VaultError::InvalidInput(format!(
                "label was reserved in {}, not {category}",
                reserved.category
            )));
        }
        let password = self.session.password()?;
        payload::validate_payload(category, payload)?;

        let codec = self.session.codec();
        let name = filename::encrypt_name(codec, &reserved.label, password)?;
        let content = codec.encrypt(payload.trim().as_bytes(), password)?;
        self.store.write(category, &name, &content)?;

        info!(category = %category, "entry added");
        Ok(())
    }

    /// Build the catalog for `category` under the current password.
    pub fn catalog(&self, category: Category) -> Result<Catalog> {
        Catalog::load(&self.store, &self.session, category)
    }

    /// Every visible entry as `(label, payload)`, in catalog order.
    pub fn list_entries(&self, category: Category) -> Result<Vec<(String, DecryptedPayload)>> {
        let catalog = self.catalog(category)?;
        let revealed = catalog.reveal_all(&self.store, &self.session)?;
        Ok(revealed
            .into_iter()
            .map(|(entry, payload)| (entry.label.clone(), payload))
            .collect())
    }

    /// Decrypt the payload at the 1-based `index`.
    pub fn select_entry(&self, category: Category, index: usize) -> Result<DecryptedPayload> {
        self.catalog(category)?
            .reveal(&self.store, &self.session, index)
    }

    /// Delete the entry at the 1-based `index` and return its label. The
    /// caller has already confirmed; use [`Catalog::delete`] to confirm
    /// against the entry.
    pub fn delete_entry(&self, category: Category, index: usize) -> Result<String> {
        self.catalog(category)?.remove(&self.store, index)
    }
}

/// A validated label not yet used in its category under the session password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedLabel {
    category: Category,
    label: String,
}

impl ReservedLabel {
    pub fn label(&self) -> &str {
        &self.label
    }
}
