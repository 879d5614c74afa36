//! Shopping cart state.
//!
//! The cart is pure state: every operation is a plain transition with no
//! I/O, and persistence is an explicit separate step
//! ([`crate::storage::Storage::save_cart`]) invoked by the caller after
//! each mutation. This keeps the transitions testable without a storage
//! dependency.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use pethaven_core::{Pet, PetId};

/// A pet selected for purchase, with the time it entered the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The selected pet, as it looked when added.
    pub pet: Pet,
    /// Insertion timestamp, epoch milliseconds.
    pub added_at: i64,
}

/// Ordered collection of pets pending purchase.
///
/// Holds at most one item per pet ID; order reflects insertion order.
/// Contents are a snapshot of what was believed available when added -
/// availability is only re-checked at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a pet to the cart.
    ///
    /// A no-op when an item with the same pet ID is already present.
    /// Returns whether the pet was inserted.
    pub fn add(&mut self, pet: Pet) -> bool {
        if self.contains(&pet.id) {
            return false;
        }
        self.items.push(CartItem {
            pet,
            added_at: Utc::now().timestamp_millis(),
        });
        true
    }

    /// Remove any item matching the pet ID.
    ///
    /// A no-op when absent. Returns whether an item was removed.
    pub fn remove(&mut self, pet_id: &PetId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.pet.id != *pet_id);
        self.items.len() != before
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether the cart holds an item for the given pet ID.
    #[must_use]
    pub fn contains(&self, pet_id: &PetId) -> bool {
        self.items.iter().any(|item| item.pet.id == *pet_id)
    }

    /// The held pet IDs in insertion order; this is the purchase payload.
    #[must_use]
    pub fn pet_ids(&self) -> Vec<PetId> {
        self.items.iter().map(|item| item.pet.id).collect()
    }

    /// The held items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use pethaven_core::{Email, PetSpecies, PetStatus};

    pub(crate) fn sample_pet(name: &str) -> Pet {
        Pet {
            id: PetId::new(uuid::Uuid::new_v4()),
            name: name.to_string(),
            species: PetSpecies::Dog,
            age: 3,
            picture_url: None,
            description: None,
            breeder_name: "Sunny Kennel".to_string(),
            breeder_email: Email::parse("breeder@example.com").unwrap(),
            status: PetStatus::Available,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_add_is_idempotent_per_id() {
        let mut cart = Cart::new();
        let pet = sample_pet("Rex");

        assert!(cart.add(pet.clone()));
        assert!(!cart.add(pet.clone()));
        assert!(!cart.add(pet.clone()));

        assert_eq!(cart.len(), 1);
        assert!(cart.contains(&pet.id));
    }

    #[test]
    fn test_remove_then_add_restores_membership() {
        let mut cart = Cart::new();
        let pet = sample_pet("Rex");

        cart.add(pet.clone());
        assert!(cart.remove(&pet.id));
        assert!(!cart.contains(&pet.id));

        assert!(cart.add(pet.clone()));
        assert!(cart.contains(&pet.id));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        let pet = sample_pet("Rex");
        cart.add(pet);

        let absent = PetId::new(uuid::Uuid::new_v4());
        assert!(!cart.remove(&absent));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_clear_always_empties() {
        let mut cart = Cart::new();
        cart.clear();
        assert!(cart.is_empty());

        cart.add(sample_pet("Rex"));
        cart.add(sample_pet("Whiskers"));
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.pet_ids().is_empty());
    }

    #[test]
    fn test_pet_ids_follow_insertion_order() {
        let mut cart = Cart::new();
        let rex = sample_pet("Rex");
        let whiskers = sample_pet("Whiskers");
        let milo = sample_pet("Milo");

        cart.add(rex.clone());
        cart.add(whiskers.clone());
        cart.add(milo.clone());

        assert_eq!(cart.pet_ids(), vec![rex.id, whiskers.id, milo.id]);
    }

    #[test]
    fn test_readded_item_moves_to_end() {
        let mut cart = Cart::new();
        let rex = sample_pet("Rex");
        let whiskers = sample_pet("Whiskers");

        cart.add(rex.clone());
        cart.add(whiskers.clone());
        cart.remove(&rex.id);
        cart.add(rex.clone());

        assert_eq!(cart.pet_ids(), vec![whiskers.id, rex.id]);
    }
}
