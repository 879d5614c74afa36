//! Pet record and its enumerations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::PetId;

/// Species of a pet.
///
/// The API currently knows three species; anything else the server may
/// add later falls back to [`PetSpecies::Other`] in display logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PetSpecies {
    Cat,
    Dog,
    Frog,
    #[serde(other)]
    Other,
}

impl PetSpecies {
    /// Emoji stand-in shown when a pet has no picture of its own.
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Cat => "🐱",
            Self::Dog => "🐶",
            Self::Frog => "🐸",
            Self::Other => "🐾",
        }
    }
}

impl std::fmt::Display for PetSpecies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cat => write!(f, "Cat"),
            Self::Dog => write!(f, "Dog"),
            Self::Frog => write!(f, "Frog"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Availability status of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    #[default]
    Available,
    Sold,
}

impl std::fmt::Display for PetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Sold => write!(f, "sold"),
        }
    }
}

/// A pet offered for sale by a store.
///
/// Immutable from the client's perspective: the client never mutates a
/// pet record, only submits its ID for purchase. Status reflects what
/// the server reported at fetch time and can go stale until the next
/// refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Server-assigned unique ID.
    pub id: PetId,
    /// Display name, e.g. "Rex".
    pub name: String,
    /// Species, with an `Other` fallback for unknown values.
    pub species: PetSpecies,
    /// Age in whole years, non-negative.
    pub age: u32,
    /// Optional photo URL.
    pub picture_url: Option<String>,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Name of the breeder offering the pet.
    pub breeder_name: String,
    /// Breeder contact email.
    pub breeder_email: Email,
    /// Availability at fetch time.
    pub status: PetStatus,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}
