//! Client session: who is browsing, and from which store.
//!
//! This is a cosmetic session, not an authentication boundary: any
//! non-empty username/password pair is accepted and the "token" is just
//! the base64 of `username:password`, mirroring what the server's basic
//! auth expects. A real deployment would replace [`Session::login`] with
//! a genuine identity provider; nothing here verifies anything.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use pethaven_core::StoreId;

/// Errors that can occur during login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password was empty.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Client-held record of an authenticated browsing session.
///
/// The three fields live and die together: a session is only restored
/// from storage when the complete triple is present, and logout clears
/// all of them at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Cosmetic proof-of-login token, sent as a basic-auth header.
    pub token: String,
    /// The store the customer selected at login.
    pub store_id: StoreId,
    /// Display name for the customer (the login username).
    pub customer_name: String,
}

impl Session {
    /// Log in with any non-empty credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when username or
    /// password is empty; succeeds unconditionally otherwise.
    pub fn login(username: &str, password: &str, store_id: StoreId) -> Result<Self, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let token = BASE64.encode(format!("{username}:{password}"));

        Ok(Self {
            token,
            store_id,
            customer_name: username.to_owned(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store_id() -> StoreId {
        "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap()
    }

    #[test]
    fn test_login_accepts_any_nonempty_credentials() {
        let session = Session::login("alice", "hunter2", store_id()).unwrap();
        assert_eq!(session.customer_name, "alice");
        assert_eq!(session.store_id, store_id());
    }

    #[test]
    fn test_login_token_is_base64_of_credentials() {
        let session = Session::login("alice", "hunter2", store_id()).unwrap();
        // base64("alice:hunter2")
        assert_eq!(session.token, "YWxpY2U6aHVudGVyMg==");
    }

    #[test]
    fn test_login_rejects_empty_username() {
        assert!(matches!(
            Session::login("", "hunter2", store_id()),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_rejects_empty_password() {
        assert!(matches!(
            Session::login("alice", "", store_id()),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_session_serde_roundtrip() {
        let session = Session::login("alice", "hunter2", store_id()).unwrap();
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_incomplete_triple_does_not_deserialize() {
        // A partially written session must not restore.
        let json = r#"{"token":"YWxpY2U6aHVudGVyMg==","store_id":"67e55044-10b1-426f-9247-bb680e5fe0c8"}"#;
        assert!(serde_json::from_str::<Session>(json).is_err());
    }
}
