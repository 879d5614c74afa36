//! Top-level application error.

use thiserror::Error;

use crate::api::ApiError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::session::AuthError;
use crate::storage::StorageError;

/// Anything that can go wrong during a storefront operation.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// An operation that needs a session was attempted without one.
    #[error("not logged in; run `pethaven login` first")]
    NotAuthenticated,

    /// Login without a store selection; the caller lists the stores.
    #[error("no store selected")]
    NoStoreSelected,

    /// A named thing (pet, store) could not be found.
    #[error("{0}")]
    NotFound(String),
}

/// Convenience result alias used throughout the storefront.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_authenticated_points_at_login() {
        assert!(AppError::NotAuthenticated.to_string().contains("login"));
    }

    #[test]
    fn test_checkout_errors_pass_through_verbatim() {
        let err = AppError::from(CheckoutError::NoLongerAvailable);
        assert_eq!(
            err.to_string(),
            "This pet is no longer available for purchase."
        );
    }
}
