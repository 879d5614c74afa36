//! Cursor-based pagination types.

use serde::{Deserialize, Serialize};

use super::pet::Pet;

/// Pagination metadata for a connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Whether another page exists after `end_cursor`.
    pub has_next_page: bool,
    /// Whether a page exists before `start_cursor`.
    pub has_previous_page: bool,
    /// Opaque cursor of the first edge, if any.
    pub start_cursor: Option<String>,
    /// Opaque cursor of the last edge; pass as `after` to continue.
    pub end_cursor: Option<String>,
}

/// One page of pets plus pagination metadata.
///
/// Replaced wholesale on refresh; extended (edges appended, page info
/// and total count swapped for the newly returned values) on load-more.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetConnection {
    /// The pets on this page, in server order.
    pub edges: Vec<Pet>,
    /// Cursor metadata for the page.
    pub page_info: PageInfo,
    /// Total number of matching pets across all pages.
    pub total_count: i64,
}

impl PetConnection {
    /// Number of edges currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the connection holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
