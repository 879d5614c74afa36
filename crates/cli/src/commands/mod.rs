//! Command implementations.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod pets;
pub mod stores;

use pethaven_core::{Pet, PetId};
use pethaven_storefront::error::{AppError, Result};
use pethaven_storefront::listing::Listing;
use pethaven_storefront::state::AppState;

/// Parse a pet ID argument.
pub(crate) fn parse_pet_id(raw: &str) -> Result<PetId> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("'{raw}' is not a valid pet ID")))
}

/// Locate an available pet by ID, paging through the store's listing.
pub(crate) async fn find_available_pet(state: &AppState, pet_id: PetId) -> Result<Pet> {
    let session = state.require_session()?;
    let mut listing = Listing::new(session.store_id, state.config().page_size);

    listing.refresh(state.api()).await?;
    loop {
        if let Some(connection) = listing.connection()
            && let Some(pet) = connection.edges.iter().find(|p| p.id == pet_id)
        {
            return Ok(pet.clone());
        }
        tracing::debug!(%pet_id, "pet not on current pages, fetching more");
        if !listing.load_more(state.api()).await? {
            break;
        }
    }

    Err(AppError::NotFound(format!(
        "pet {pet_id} is not among this store's available pets"
    )))
}

/// One-line listing row for a pet.
pub(crate) fn pet_line(pet: &Pet) -> String {
    format!(
        "{} {}  {:<12} {:<6} age {:<3} breeder: {}",
        pet.species.emoji(),
        pet.id,
        pet.name,
        pet.species,
        pet.age,
        pet.breeder_name
    )
}
