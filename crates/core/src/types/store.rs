//! Store record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::StoreId;

/// A pet-store location.
///
/// Not to be confused with a state store: this is the domain object a
/// customer browses pets from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Server-assigned unique ID.
    pub id: StoreId,
    /// Store display name.
    pub name: String,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}
