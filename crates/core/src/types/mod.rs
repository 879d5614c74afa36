//! Core types for Pet Haven.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod order;
pub mod page;
pub mod pet;
pub mod store;

pub use email::{Email, EmailError};
pub use id::*;
pub use order::Order;
pub use page::{PageInfo, PetConnection};
pub use pet::{Pet, PetSpecies, PetStatus};
pub use store::Store;
