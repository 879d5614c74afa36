//! Store listing command.

use pethaven_storefront::error::Result;
use pethaven_storefront::state::AppState;

/// Print all stores.
pub async fn list(state: &AppState) -> Result<()> {
    let stores = state.api().list_stores().await?;

    if stores.is_empty() {
        println!("No stores found");
        return Ok(());
    }

    for store in stores {
        println!("{}  {}", store.id, store.name);
    }
    Ok(())
}
