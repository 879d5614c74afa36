//! Order confirmation record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::OrderId;
use super::pet::Pet;

/// Server-returned confirmation of a completed purchase.
///
/// The client treats this as read-only: it is displayed to the user and
/// never sent back to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Server-assigned order ID.
    pub id: OrderId,
    /// The purchasing customer, as the server recorded it.
    pub customer_id: String,
    /// The pets actually purchased.
    pub pets: Vec<Pet>,
    /// Total number of pets in the order.
    pub total_pets: u32,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}
