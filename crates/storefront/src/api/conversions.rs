//! Conversion functions from generated GraphQL types to domain types.
//!
//! Each query module generates its own nested response structs, so every
//! operation gets its own conversion; the shapes are identical but the
//! types are not.

use pethaven_core::{
    Email, Order, OrderId, PageInfo, Pet, PetConnection, PetId, PetSpecies, PetStatus, Store,
    StoreId,
};

use super::ApiError;
use super::queries::{get_available_pets, list_stores, purchase_pet, purchase_pets};

/// Clamp a GraphQL `Int` to a non-negative count.
fn as_count(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

fn parse_breeder_email(raw: &str, pet_name: &str) -> Result<Email, ApiError> {
    Email::parse(raw)
        .map_err(|e| ApiError::InvalidData(format!("breeder email for pet '{pet_name}': {e}")))
}

// =============================================================================
// Store Conversions
// =============================================================================

pub(super) fn convert_store(store: list_stores::ListStoresListStores) -> Store {
    Store {
        id: StoreId::new(store.id),
        name: store.name,
        created_at: store.created_at,
    }
}

// =============================================================================
// Listing Conversions
// =============================================================================

fn convert_listed_pet(
    pet: get_available_pets::GetAvailablePetsAvailablePetsEdges,
) -> Result<Pet, ApiError> {
    let breeder_email = parse_breeder_email(&pet.breeder_email, &pet.name)?;
    Ok(Pet {
        id: PetId::new(pet.id),
        name: pet.name,
        species: match pet.species {
            get_available_pets::PetSpecies::Cat => PetSpecies::Cat,
            get_available_pets::PetSpecies::Dog => PetSpecies::Dog,
            get_available_pets::PetSpecies::Frog => PetSpecies::Frog,
            get_available_pets::PetSpecies::Other(_) => PetSpecies::Other,
        },
        age: as_count(pet.age),
        picture_url: pet.picture_url,
        description: pet.description,
        breeder_name: pet.breeder_name,
        breeder_email,
        status: match pet.status {
            get_available_pets::PetStatus::sold => PetStatus::Sold,
            get_available_pets::PetStatus::available | get_available_pets::PetStatus::Other(_) => {
                PetStatus::Available
            }
        },
        created_at: pet.created_at,
    })
}

pub(super) fn convert_pet_connection(
    connection: get_available_pets::GetAvailablePetsAvailablePets,
) -> Result<PetConnection, ApiError> {
    Ok(PetConnection {
        edges: connection
            .edges
            .into_iter()
            .map(convert_listed_pet)
            .collect::<Result<Vec<_>, _>>()?,
        page_info: PageInfo {
            has_next_page: connection.page_info.has_next_page,
            has_previous_page: connection.page_info.has_previous_page,
            start_cursor: connection.page_info.start_cursor,
            end_cursor: connection.page_info.end_cursor,
        },
        total_count: connection.total_count,
    })
}

// =============================================================================
// Order Conversions
// =============================================================================

fn convert_single_order_pet(pet: purchase_pet::PurchasePetPurchasePetPets) -> Result<Pet, ApiError> {
    let breeder_email = parse_breeder_email(&pet.breeder_email, &pet.name)?;
    Ok(Pet {
        id: PetId::new(pet.id),
        name: pet.name,
        species: match pet.species {
            purchase_pet::PetSpecies::Cat => PetSpecies::Cat,
            purchase_pet::PetSpecies::Dog => PetSpecies::Dog,
            purchase_pet::PetSpecies::Frog => PetSpecies::Frog,
            purchase_pet::PetSpecies::Other(_) => PetSpecies::Other,
        },
        age: as_count(pet.age),
        picture_url: pet.picture_url,
        description: pet.description,
        breeder_name: pet.breeder_name,
        breeder_email,
        status: match pet.status {
            purchase_pet::PetStatus::sold => PetStatus::Sold,
            purchase_pet::PetStatus::available | purchase_pet::PetStatus::Other(_) => {
                PetStatus::Available
            }
        },
        created_at: pet.created_at,
    })
}

pub(super) fn convert_single_order(
    order: purchase_pet::PurchasePetPurchasePet,
) -> Result<Order, ApiError> {
    Ok(Order {
        id: OrderId::new(order.id),
        customer_id: order.customer_id,
        pets: order
            .pets
            .into_iter()
            .map(convert_single_order_pet)
            .collect::<Result<Vec<_>, _>>()?,
        total_pets: as_count(order.total_pets),
        created_at: order.created_at,
    })
}

fn convert_batch_order_pet(
    pet: purchase_pets::PurchasePetsPurchasePetsPets,
) -> Result<Pet, ApiError> {
    let breeder_email = parse_breeder_email(&pet.breeder_email, &pet.name)?;
    Ok(Pet {
        id: PetId::new(pet.id),
        name: pet.name,
        species: match pet.species {
            purchase_pets::PetSpecies::Cat => PetSpecies::Cat,
            purchase_pets::PetSpecies::Dog => PetSpecies::Dog,
            purchase_pets::PetSpecies::Frog => PetSpecies::Frog,
            purchase_pets::PetSpecies::Other(_) => PetSpecies::Other,
        },
        age: as_count(pet.age),
        picture_url: pet.picture_url,
        description: pet.description,
        breeder_name: pet.breeder_name,
        breeder_email,
        status: match pet.status {
            purchase_pets::PetStatus::sold => PetStatus::Sold,
            purchase_pets::PetStatus::available | purchase_pets::PetStatus::Other(_) => {
                PetStatus::Available
            }
        },
        created_at: pet.created_at,
    })
}

pub(super) fn convert_batch_order(
    order: purchase_pets::PurchasePetsPurchasePets,
) -> Result<Order, ApiError> {
    Ok(Order {
        id: OrderId::new(order.id),
        customer_id: order.customer_id,
        pets: order
            .pets
            .into_iter()
            .map(convert_batch_order_pet)
            .collect::<Result<Vec<_>, _>>()?,
        total_pets: as_count(order.total_pets),
        created_at: order.created_at,
    })
}
