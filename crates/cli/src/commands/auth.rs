//! Session commands: login, logout, whoami.

use pethaven_core::StoreId;
use pethaven_storefront::error::{AppError, Result};
use pethaven_storefront::state::AppState;

/// Log in to a store.
///
/// Without `--store` the store list is printed and the command fails,
/// so the user can pick one and retry.
pub async fn login(
    state: &mut AppState,
    username: &str,
    password: &str,
    store: Option<&str>,
) -> Result<()> {
    let Some(raw) = store else {
        println!("Pick a store with --store <id>:");
        for store in state.api().list_stores().await? {
            println!("  {}  {}", store.id, store.name);
        }
        return Err(AppError::NoStoreSelected);
    };

    let store_id: StoreId = raw
        .parse()
        .map_err(|_| AppError::NotFound(format!("'{raw}' is not a valid store ID")))?;

    let session = state.login(username, password, store_id)?;
    println!(
        "Logged in as {} at store {}",
        session.customer_name, session.store_id
    );
    Ok(())
}

/// Log out, clearing the persisted session.
pub fn logout(state: &mut AppState) -> Result<()> {
    state.logout()?;
    println!("Logged out");
    Ok(())
}

/// Show the current session.
pub fn whoami(state: &AppState) -> Result<()> {
    let session = state.require_session()?;
    println!(
        "{} (shopping at store {})",
        session.customer_name, session.store_id
    );
    Ok(())
}
