//! Application state composition.
//!
//! Wires configuration, storage, the restored session, and the API
//! client together for the binary. The API client is rebuilt whenever
//! the session changes so requests always carry the current token.

use tracing::{info, instrument};

use pethaven_core::StoreId;

use crate::api::PetStoreClient;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::session::Session;
use crate::storage::Storage;

/// Everything a storefront command needs.
#[derive(Debug)]
pub struct AppState {
    config: StorefrontConfig,
    storage: Storage,
    session: Option<Session>,
    api: PetStoreClient,
}

impl AppState {
    /// Load state from the environment and the data directory.
    ///
    /// Restores the persisted session when the complete triple is
    /// present; starts unauthenticated otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the data
    /// directory cannot be created.
    pub fn load() -> Result<Self> {
        let config = StorefrontConfig::from_env()?;
        let storage = Storage::open(&config.data_dir)?;
        Ok(Self::with_storage(config, storage))
    }

    /// Build state over already-opened storage.
    #[must_use]
    pub fn with_storage(config: StorefrontConfig, storage: Storage) -> Self {
        let session = storage.load_session();
        let api = PetStoreClient::new(
            config.api_url.clone(),
            session.as_ref().map(|s| s.token.clone()),
        );
        Self {
            config,
            storage,
            session,
            api,
        }
    }

    /// Application configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Persistent local storage.
    #[must_use]
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }

    /// API client carrying the current session's token, if any.
    #[must_use]
    pub const fn api(&self) -> &PetStoreClient {
        &self.api
    }

    /// The current session, if logged in.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The current session, or [`AppError::NotAuthenticated`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotAuthenticated`] when not logged in.
    pub fn require_session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(AppError::NotAuthenticated)
    }

    /// Log in, persist the session, and rebuild the API client with the
    /// new token.
    ///
    /// # Errors
    ///
    /// Returns an error for empty credentials or if the session cannot
    /// be persisted.
    #[instrument(skip(self, password), fields(username, store_id = %store_id))]
    pub fn login(&mut self, username: &str, password: &str, store_id: StoreId) -> Result<&Session> {
        let session = Session::login(username, password, store_id)?;
        self.storage.save_session(&session)?;
        self.api = PetStoreClient::new(self.config.api_url.clone(), Some(session.token.clone()));
        info!("logged in");
        Ok(self.session.insert(session))
    }

    /// Clear the session from memory and disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted session cannot be removed.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> Result<()> {
        self.storage.clear_session()?;
        self.session = None;
        self.api = PetStoreClient::new(self.config.api_url.clone(), None);
        info!("logged out");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            api_url: "http://localhost:8080/query".to_string(),
            data_dir: dir.path().to_path_buf(),
            page_size: 12,
        };
        let storage = Storage::open(&config.data_dir).unwrap();
        let state = AppState::with_storage(config, storage);
        (dir, state)
    }

    fn store_id() -> StoreId {
        "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap()
    }

    #[test]
    fn test_starts_unauthenticated() {
        let (_dir, state) = temp_state();
        assert!(state.session().is_none());
        assert!(matches!(
            state.require_session(),
            Err(AppError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_login_persists_session_across_reload() {
        let (_dir, mut state) = temp_state();
        state.login("alice", "hunter2", store_id()).unwrap();

        let reloaded =
            AppState::with_storage(state.config.clone(), state.storage.clone());
        let session = reloaded.require_session().unwrap();
        assert_eq!(session.customer_name, "alice");
        assert_eq!(session.store_id, store_id());
    }

    #[test]
    fn test_logout_clears_session_everywhere() {
        let (_dir, mut state) = temp_state();
        state.login("alice", "hunter2", store_id()).unwrap();
        state.logout().unwrap();

        assert!(state.session().is_none());
        assert!(state.storage.load_session().is_none());
    }
}
