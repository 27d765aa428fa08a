//! Category directories on disk.
//!
//! Defines the [`EntryStore`] trait and [`FileEntryStore`], which keeps one
//! flat directory per [`Category`] under the vault root. A file's name is
//! the encrypted label and its content is the encrypted payload; the store
//! itself never sees plaintext.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::category::Category;
use crate::error::{Result, VaultError};
use crate::filename;
use crate::session::Session;

/// Storage backend for encrypted entries.
pub trait EntryStore {
    /// Create the category directory if needed. Idempotent.
    fn ensure_category(&self, category: Category) -> Result<()>;

    /// Create or overwrite the entry `name` with `content`.
    fn write(&self, category: Category, name: &str, content: &str) -> Result<()>;

    /// Read the raw content of entry `name`.
    fn read(&self, category: Category, name: &str) -> Result<String>;

    /// Entry names in directory enumeration order, or `None` if the
    /// category directory does not exist yet.
    fn list_names(&self, category: Category) -> Result<Option<Vec<String>>>;

    /// Delete entry `name`.
    fn remove(&self, category: Category, name: &str) -> Result<()>;

    /// True if some entry's name decrypts to `label` under the session
    /// password. Linear in the number of entries.
    fn label_exists(&self, session: &Session, category: Category, label: &str) -> Result<bool> {
        let password = session.password()?;
        let Some(names) = self.list_names(category)? else {
            return Ok(false);
        };
        Ok(names.iter().any(|name| {
            filename::decrypt_name(session.codec(), name, password)
                .map(|decrypted| decrypted == label)
                .unwrap_or(false)
        }))
    }
}

/// A file-system-backed entry store.
///
/// Entries live at `{root}/{category}/{name}`. Directories are created
/// with mode `0700` and files with mode `0600` on Unix.
#[derive(Debug, Clone)]
pub struct FileEntryStore {
    root: PathBuf,
}

impl FileEntryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the session's vault root.
    pub fn for_session(session: &Session) -> Self {
        Self::new(session.root())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory backing `category`.
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.dir_name())
    }

    /// Resolve an entry path, refusing anything that is not a single
    /// path component.
    fn entry_path(&self, category: Category, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(VaultError::InvalidInput(format!(
                "invalid entry file name: {name}"
            )));
        }
        Ok(self.category_dir(category).join(name))
    }
}

impl EntryStore for FileEntryStore {
    fn ensure_category(&self, category: Category) -> Result<()> {
        let dir = self.category_dir(category);
        fs::create_dir_all(&dir)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&dir, fs::Permissions::from_mode(0o700))?;
        }

        Ok(())
    }

    fn write(&self, category: Category, name: &str, content: &str) -> Result<()> {
        let path = self.entry_path(category, name)?;
        self.ensure_category(category)?;

        debug!(category = %category, file = name, "writing entry");
        write_entry_file(&path, content.as_bytes())
    }

    fn read(&self, category: Category, name: &str) -> Result<String> {
        let path = self.entry_path(category, name)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(VaultError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn list_names(&self, category: Category) -> Result<Option<Vec<String>>> {
        let dir = self.category_dir(category);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            match entry.file_type() {
                Ok(ft) if ft.is_file() => {}
                Ok(_) => {
                    warn!(path = %entry.path().display(), "skipping non-file entry");
                    continue;
                }
                Err(e) => {
                    warn!(path = %entry.path().display(), "could not stat entry: {e}");
                    continue;
                }
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => warn!(name = ?raw, "skipping non-UTF-8 file name"),
            }
        }

        Ok(Some(names))
    }

    fn remove(&self, category: Category, name: &str) -> Result<()> {
        let path = self.entry_path(category, name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(category = %category, file = name, "removed entry");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(VaultError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Write `data` to `path` with mode 0600 on Unix.
fn write_entry_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (FileEntryStore, TempDir) {
        let tmp = TempDir::new().unwrap();
        let store = FileEntryStore::new(tmp.path());
        (store, tmp)
    }

    fn test_session(tmp: &TempDir, password: &str) -> Session {
        Session::new(tmp.path(), password).with_iterations(1_000)
    }

    #[test]
    fn test_ensure_category_is_idempotent() {
        let (store, _tmp) = test_store();
        store.ensure_category(Category::Seeds).unwrap();
        store.ensure_category(Category::Seeds).unwrap();
        assert!(store.category_dir(Category::Seeds).is_dir());
    }

    #[test]
    fn test_write_and_read() {
        let (store, _tmp) = test_store();
        store.write(Category::Others, "abc", "content").unwrap();
        assert_eq!(store.read(Category::Others, "abc").unwrap(), "content");
    }

    #[test]
    fn test_write_overwrites() {
        let (store, _tmp) = test_store();
        store.write(Category::Others, "abc", "old").unwrap();
        store.write(Category::Others, "abc", "new").unwrap();
        assert_eq!(store.read(Category::Others, "abc").unwrap(), "new");
    }

    #[test]
    fn test_list_missing_category() {
        let (store, _tmp) = test_store();
        assert!(store.list_names(Category::Accounts).unwrap().is_none());
    }

    #[test]
    fn test_list_skips_directories() {
        let (store, _tmp) = test_store();
        store.write(Category::Accounts, "one", "1").unwrap();
        fs::create_dir(store.category_dir(Category::Accounts).join("nested")).unwrap();

        let names = store.list_names(Category::Accounts).unwrap().unwrap();
        assert_eq!(names, vec!["one".to_string()]);
    }

    #[test]
    fn test_remove() {
        let (store, _tmp) = test_store();
        store.write(Category::Seeds, "gone", "x").unwrap();
        store.remove(Category::Seeds, "gone").unwrap();
        assert!(store.list_names(Category::Seeds).unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_remove_not_found() {
        let (store, _tmp) = test_store();
        let result = store.remove(Category::Seeds, "missing");
        assert!(matches!(result, Err(VaultError::NotFound(_))));
    }

    #[test]
    fn test_read_not_found() {
        let (store, _tmp) = test_store();
        let result = store.read(Category::Seeds, "missing");
        assert!(matches!(result, Err(VaultError::NotFound(_))));
    }

    #[test]
    fn test_rejects_path_components() {
        let (store, _tmp) = test_store();
        for name in ["", "..", "a/b", "a\\b"] {
            assert!(matches!(
                store.write(Category::Others, name, "x"),
                Err(VaultError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_label_exists() {
        let (store, tmp) = test_store();
        let session = test_session(&tmp, "P1");
        assert!(!store.label_exists(&session, Category::Others, "alpha").unwrap());

        let name = filename::encrypt_name(session.codec(), "alpha", b"P1").unwrap();
        store.write(Category::Others, &name, "payload").unwrap();
        store.write(Category::Others, "stray-file", "junk").unwrap();

        assert!(store.label_exists(&session, Category::Others, "alpha").unwrap());
        assert!(!store.label_exists(&session, Category::Others, "beta").unwrap());

        let other = test_session(&tmp, "P2");
        assert!(!store.label_exists(&other, Category::Others, "alpha").unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let (store, _tmp) = test_store();
        store.write(Category::PrivateKeys, "perm", "value").unwrap();

        let dir_mode = fs::metadata(store.category_dir(Category::PrivateKeys))
            .unwrap()
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(dir_mode, 0o700);

        let path = store.category_dir(Category::PrivateKeys).join("perm");
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600, "entry file should have 0600 permissions");
    }
}
