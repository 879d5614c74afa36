//! Pet listing command.

use pethaven_storefront::error::Result;
use pethaven_storefront::listing::Listing;
use pethaven_storefront::state::AppState;

use super::pet_line;

/// Print the available pets at the session's store.
///
/// Fetches one page by default; `--all` keeps following the cursor
/// until the listing reports no next page.
pub async fn list(state: &AppState, all: bool) -> Result<()> {
    let session = state.require_session()?;
    let mut listing = Listing::new(session.store_id, state.config().page_size);

    listing.refresh(state.api()).await?;
    if all {
        while listing.load_more(state.api()).await? {}
    }

    let Some(connection) = listing.connection() else {
        return Ok(());
    };

    if connection.is_empty() {
        println!("No pets available right now");
        return Ok(());
    }

    for pet in &connection.edges {
        println!("{}", pet_line(pet));
    }
    println!(
        "\nShowing {} of {} available",
        connection.len(),
        connection.total_count
    );
    if listing.has_next_page() {
        println!("More available; run with --all to fetch everything");
    }
    Ok(())
}
