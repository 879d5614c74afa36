//! Durable client-local storage for cart and session.
//!
//! State lives as JSON files under a single data directory, one file per
//! namespace. Writes happen synchronously after every mutation, driven
//! by the caller; reads happen once at startup. Unreadable or corrupt
//! files are treated as "no prior state" and never surfaced to the user,
//! matching last-write-wins single-user semantics.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::cart::Cart;
use crate::session::Session;

const SESSION_FILE: &str = "session.json";
const CART_FILE: &str = "cart.json";

/// Errors that can occur when persisting state.
///
/// Only writes surface errors; reads silently fall back to empty state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization failed.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed storage rooted at a data directory.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Open storage at the given directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory backing this storage.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the persisted cart, or an empty cart when absent or corrupt.
    #[must_use]
    pub fn load_cart(&self) -> Cart {
        self.read(CART_FILE).unwrap_or_default()
    }

    /// Persist the full current cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written.
    pub fn save_cart(&self, cart: &Cart) -> Result<(), StorageError> {
        self.write(CART_FILE, cart)
    }

    /// Restore the persisted session, if the complete triple is present.
    #[must_use]
    pub fn load_session(&self) -> Option<Session> {
        self.read(SESSION_FILE)
    }

    /// Persist the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub fn save_session(&self, session: &Session) -> Result<(), StorageError> {
        self.write(SESSION_FILE, session)
    }

    /// Remove the persisted session; all fields go together.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear_session(&self) -> Result<(), StorageError> {
        match fs::remove_file(self.dir.join(SESSION_FILE)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.dir.join(name);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(file = name, error = %e, "no persisted state, starting empty");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(file = name, error = %e, "persisted state unparsable, starting empty");
                None
            }
        }
    }

    fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StorageError> {
        let path = self.dir.join(name);
        let json = serde_json::to_vec_pretty(value)?;
        fs::write(&path, json)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::tests::sample_pet;
    use crate::session::Session;

    fn open_temp() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        (dir, storage)
    }

    #[test]
    fn test_cart_roundtrip_preserves_ids_and_order() {
        let (_dir, storage) = open_temp();

        let mut cart = Cart::new();
        let rex = sample_pet("Rex");
        let whiskers = sample_pet("Whiskers");
        cart.add(rex.clone());
        cart.add(whiskers.clone());

        storage.save_cart(&cart).unwrap();
        let restored = storage.load_cart();

        assert_eq!(restored, cart);
        assert_eq!(restored.pet_ids(), vec![rex.id, whiskers.id]);
    }

    #[test]
    fn test_missing_cart_loads_empty() {
        let (_dir, storage) = open_temp();
        assert!(storage.load_cart().is_empty());
    }

    #[test]
    fn test_corrupt_cart_loads_empty() {
        let (_dir, storage) = open_temp();
        std::fs::write(storage.dir().join("cart.json"), b"{not json").unwrap();
        assert!(storage.load_cart().is_empty());
    }

    #[test]
    fn test_session_restores_complete_triple() {
        let (_dir, storage) = open_temp();

        let store_id = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
        let session = Session::login("alice", "hunter2", store_id).unwrap();
        storage.save_session(&session).unwrap();

        let restored = storage.load_session().unwrap();
        assert_eq!(restored.store_id, store_id);
        assert_eq!(restored.customer_name, "alice");
        assert_eq!(restored, session);
    }

    #[test]
    fn test_clear_session_is_atomic_and_idempotent() {
        let (_dir, storage) = open_temp();

        let store_id = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
        let session = Session::login("alice", "hunter2", store_id).unwrap();
        storage.save_session(&session).unwrap();

        storage.clear_session().unwrap();
        assert!(storage.load_session().is_none());

        // Clearing again is fine.
        storage.clear_session().unwrap();
    }

    #[test]
    fn test_corrupt_session_starts_unauthenticated() {
        let (_dir, storage) = open_temp();
        std::fs::write(storage.dir().join("session.json"), b"\"half").unwrap();
        assert!(storage.load_session().is_none());
    }
}
