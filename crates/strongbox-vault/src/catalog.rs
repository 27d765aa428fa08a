//! The per-category catalog of entries visible under a password.
//!
//! There is no index file. Building a catalog lists the category directory,
//! tries to decrypt every file name with the session password, and keeps
//! the ones that decrypt cleanly, in directory enumeration order. Names that
//! fail (wrong password, foreign files, corrupt tokens) are dropped without
//! an error, so a wrong master password looks exactly like an empty vault.
//!
//! Enumeration order is whatever the filesystem returns. It is stable within
//! one [`Catalog`], which is why selection always goes through the catalog
//! that displayed the indices.

use tracing::{debug, info, warn};

use crate::category::Category;
use crate::error::{Result, VaultError};
use crate::filename;
use crate::payload::DecryptedPayload;
use crate::session::Session;
use crate::store::EntryStore;

/// One visible entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// 1-based position shown to the user.
    pub index: usize,
    /// On-disk name (the encrypted label).
    pub file_name: String,
    /// Decrypted label.
    pub label: String,
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { label: String },
    Cancelled,
}

/// Snapshot of the entries in one category that decrypt under a password.
#[derive(Debug, Clone)]
pub struct Catalog {
    category: Category,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Enumerate `category` and keep the entries whose names decrypt.
    ///
    /// Fails with [`VaultError::NoData`] if the directory is missing or
    /// nothing in it decrypts under the session password.
    pub fn load<S: EntryStore>(store: &S, session: &Session, category: Category) -> Result<Self> {
        let password = session.password()?;
        let names = store.list_names(category)?.ok_or(VaultError::NoData)?;

        let total = names.len();
        let mut entries = Vec::with_capacity(total);
        for file_name in names {
            match filename::decrypt_name(session.codec(), &file_name, password) {
                Ok(label) => entries.push(CatalogEntry {
                    index: entries.len() + 1,
                    file_name,
                    label,
                }),
                Err(e) => debug!(category = %category, file = %file_name, "excluded from catalog: {e}"),
            }
        }

        debug!(
            category = %category,
            visible = entries.len(),
            total,
            "catalog built"
        );

        if entries.is_empty() {
            return Err(VaultError::NoData);
        }
        Ok(Self { category, entries })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in catalog order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Resolve a 1-based index.
    pub fn resolve(&self, index: usize) -> Result<&CatalogEntry> {
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .ok_or_else(|| {
                VaultError::InvalidSelection(format!(
                    "{index} is out of range (1-{})",
                    self.entries.len()
                ))
            })
    }

    /// Resolve a 1-based index typed by the user.
    pub fn resolve_input(&self, input: &str) -> Result<&CatalogEntry> {
        let input = input.trim();
        let index: usize = input
            .parse()
            .map_err(|_| VaultError::InvalidSelection(format!("'{input}' is not a number")))?;
        self.resolve(index)
    }

    /// Decrypt the payload of the entry at `index`.
    pub fn reveal<S: EntryStore>(
        &self,
        store: &S,
        session: &Session,
        index: usize,
    ) -> Result<DecryptedPayload> {
        let entry = self.resolve(index)?;
        read_payload(store, session, self.category, entry)
    }

    /// Decrypt every visible payload, paired with its entry.
    ///
    /// Entries whose content is malformed or fails its integrity check are
    /// skipped with a warning. Storage errors still abort.
    pub fn reveal_all<S: EntryStore>(
        &self,
        store: &S,
        session: &Session,
    ) -> Result<Vec<(&CatalogEntry, DecryptedPayload)>> {
        let mut revealed = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match read_payload(store, session, self.category, entry) {
                Ok(payload) => revealed.push((entry, payload)),
                Err(e @ (VaultError::MalformedToken(_) | VaultError::IntegrityCheckFailed)) => {
                    warn!(
                        category = %self.category,
                        file = %entry.file_name,
                        "skipping unreadable entry: {e}"
                    );
                }
                Err(e) => return Err(e),
            }
        }
        Ok(revealed)
    }

    /// Delete the entry at `index` if `confirm` approves it.
    ///
    /// The index is validated before `confirm` is asked.
    pub fn delete<S, F>(&self, store: &S, index: usize, confirm: F) -> Result<DeleteOutcome>
    where
        S: EntryStore,
        F: FnOnce(&CatalogEntry) -> bool,
    {
        let entry = self.resolve(index)?;
        if !confirm(entry) {
            debug!(category = %self.category, "delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }
        self.remove_entry(store, entry)?;
        Ok(DeleteOutcome::Deleted {
            label: entry.label.clone(),
        })
    }

    /// Delete the entry at `index` without asking. Returns its label.
    pub fn remove<S: EntryStore>(&self, store: &S, index: usize) -> Result<String> {
        let entry = self.resolve(index)?;
        self.remove_entry(store, entry)?;
        Ok(entry.label.clone())
    }

    fn remove_entry<S: EntryStore>(&self, store: &S, entry: &CatalogEntry) -> Result<()> {
        store.remove(self.category, &entry.file_name)?;
        info!(category = %self.category, "entry deleted");
        Ok(())
    }
}

fn read_payload<S: EntryStore>(
    store: &S,
    session: &Session,
    category: Category,
    entry: &CatalogEntry,
) -> Result<DecryptedPayload> {
    let token = store.read(category, &entry.file_name)?;
    let bytes = session.codec().decrypt(&token, session.password()?)?;
    Ok(DecryptedPayload::from_bytes(bytes))
}
