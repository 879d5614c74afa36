//! Paginated listing of available pets for a store.
//!
//! A refresh replaces the whole connection; load-more appends the next
//! page's edges and adopts the newly returned page info and total count.
//! The merge itself is a pure function so pagination semantics are
//! testable without a network.

use tracing::instrument;

use pethaven_core::{PetConnection, StoreId};

use crate::api::ApiError;

/// Source of pet listing pages.
///
/// Implemented by [`crate::api::PetStoreClient`]; test code substitutes
/// canned pages.
pub trait FetchPets {
    /// Fetch one page of available pets, optionally after a cursor.
    fn available_pets(
        &self,
        store_id: StoreId,
        first: i64,
        after: Option<String>,
    ) -> impl Future<Output = Result<PetConnection, ApiError>>;
}

/// Append the next page onto the current connection.
///
/// Edges accumulate; page info and total count are replaced with the
/// newly returned values.
fn merge_page(current: &mut PetConnection, next: PetConnection) {
    current.edges.extend(next.edges);
    current.page_info = next.page_info;
    current.total_count = next.total_count;
}

/// The pet listing for one store, with cursor pagination state.
#[derive(Debug)]
pub struct Listing {
    store_id: StoreId,
    page_size: i64,
    connection: Option<PetConnection>,
    loading: bool,
}

impl Listing {
    /// Create an unfetched listing for a store.
    #[must_use]
    pub const fn new(store_id: StoreId, page_size: i64) -> Self {
        Self {
            store_id,
            page_size,
            connection: None,
            loading: false,
        }
    }

    /// The store this listing belongs to.
    #[must_use]
    pub const fn store_id(&self) -> StoreId {
        self.store_id
    }

    /// The currently held connection, if any fetch has completed.
    #[must_use]
    pub const fn connection(&self) -> Option<&PetConnection> {
        self.connection.as_ref()
    }

    /// Whether a fetch is outstanding; callers disable triggers on true.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether another page can be requested.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.connection
            .as_ref()
            .is_some_and(|c| c.page_info.has_next_page)
    }

    /// Fetch the first page, replacing any existing connection wholesale.
    ///
    /// A no-op while another fetch is outstanding.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails; the previous connection is
    /// kept in that case.
    #[instrument(skip(self, api), fields(store_id = %self.store_id))]
    pub async fn refresh<A: FetchPets>(&mut self, api: &A) -> Result<(), ApiError> {
        if self.loading {
            return Ok(());
        }

        self.loading = true;
        let result = api
            .available_pets(self.store_id, self.page_size, None)
            .await;
        self.loading = false;

        self.connection = Some(result?);
        Ok(())
    }

    /// Fetch the page after the current end cursor and append it.
    ///
    /// A no-op returning `false` when nothing has been fetched yet, when
    /// the current page info reports no next page, or while another
    /// fetch is outstanding; no remote call is made in those cases.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails; the existing connection is
    /// left unchanged in that case.
    #[instrument(skip(self, api), fields(store_id = %self.store_id))]
    pub async fn load_more<A: FetchPets>(&mut self, api: &A) -> Result<bool, ApiError> {
        if self.loading {
            return Ok(false);
        }

        let Some(connection) = &self.connection else {
            return Ok(false);
        };
        if !connection.page_info.has_next_page {
            return Ok(false);
        }
        let after = connection.page_info.end_cursor.clone();

        self.loading = true;
        let result = api
            .available_pets(self.store_id, self.page_size, after)
            .await;
        self.loading = false;

        let next = result?;
        if let Some(current) = &mut self.connection {
            merge_page(current, next);
        }
        Ok(true)
    }
}
