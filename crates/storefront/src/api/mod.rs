//! Pet-store GraphQL API client.
//!
//! # Architecture
//!
//! - Uses `graphql-client` for type-safe queries with `reqwest` for HTTP
//! - The server is the source of truth - no local sync, direct API calls
//! - The store list is cached in-memory via `moka` (5 minute TTL); pet
//!   listings are never cached, refresh must observe sold pets
//!
//! # Example
//!
//! ```rust,ignore
//! use pethaven_storefront::api::PetStoreClient;
//!
//! let client = PetStoreClient::new(&config.api_url, session.map(|s| s.token.clone()));
//!
//! let stores = client.list_stores().await?;
//! let page = client.available_pets(store_id, 12, None).await?;
//! let order = client.purchase_pet(page.edges[0].id).await?;
//! ```

mod conversions;
pub mod queries;

use std::sync::Arc;
use std::time::Duration;

use graphql_client::{GraphQLQuery, Response};
use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};

use pethaven_core::{Order, PetConnection, PetId, Store, StoreId};

use conversions::{
    convert_batch_order, convert_pet_connection, convert_single_order, convert_store,
};
use queries::{
    GetAvailablePets, ListStores, PurchasePet, PurchasePets, get_available_pets, list_stores,
    purchase_pet, purchase_pets,
};

use crate::checkout::PurchaseApi;
use crate::listing::FetchPets;

/// Errors that can occur when talking to the pet-store API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server returned a value the domain types reject.
    #[error("invalid data from server: {0}")]
    InvalidData(String),

    /// Rate limited by the server.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

/// A GraphQL error returned by the API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut parts = Vec::new();

            if !e.message.is_empty() {
                parts.push(e.message.clone());
            }

            if !e.path.is_empty() {
                let path_str = e
                    .path
                    .iter()
                    .map(|p| match p {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                parts.push(format!("path: {path_str}"));
            }

            if let Some(loc) = e.locations.first() {
                parts.push(format!("at line {}:{}", loc.line, loc.column));
            }

            if parts.is_empty() {
                format!("[error {}]: (no details)", i + 1)
            } else {
                parts.join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// PetStoreClient
// =============================================================================

/// Client for the remote pet-store GraphQL API.
///
/// Cheap to clone; all purchase mutations carry the session token as a
/// basic-auth header when one is present.
#[derive(Clone)]
pub struct PetStoreClient {
    inner: Arc<PetStoreClientInner>,
}

struct PetStoreClientInner {
    client: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
    store_cache: Cache<String, Vec<Store>>,
}

impl std::fmt::Debug for PetStoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PetStoreClient")
            .field("endpoint", &self.inner.endpoint)
            .finish_non_exhaustive()
    }
}

const STORE_CACHE_KEY: &str = "stores";

impl PetStoreClient {
    /// Create a new API client.
    ///
    /// `auth_token` is the session token, if a session exists; requests
    /// are sent anonymously without one (purchases will be rejected by
    /// the server).
    #[must_use]
    pub fn new(endpoint: impl Into<String>, auth_token: Option<String>) -> Self {
        let store_cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(PetStoreClientInner {
                client: reqwest::Client::new(),
                endpoint: endpoint.into(),
                auth_token,
                store_cache,
            }),
        }
    }

    /// Execute a GraphQL operation.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, ApiError>
    where
        Q::Variables: serde::Serialize,
    {
        let request_body = Q::build_query(variables);

        let mut request = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header("Content-Type", "application/json")
            .json(&request_body);

        if let Some(token) = &self.inner.auth_token {
            request = request.header("Authorization", format!("Basic {token}"));
        }

        let response = request.send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ApiError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "pet-store API returned non-success status"
            );
            return Err(ApiError::GraphQL(vec![GraphQLError {
                message: format!(
                    "HTTP {status}: {}",
                    response_text.chars().take(200).collect::<String>()
                ),
                locations: vec![],
                path: vec![],
            }]));
        }

        let response: Response<Q::ResponseData> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "failed to parse GraphQL response"
                );
                return Err(ApiError::Parse(e));
            }
        };

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            tracing::debug!(errors = ?errors, "GraphQL errors in response");

            return Err(ApiError::GraphQL(
                errors
                    .into_iter()
                    .map(|e| GraphQLError {
                        message: e.message,
                        locations: e.locations.map_or_else(Vec::new, |locs| {
                            locs.into_iter()
                                .map(|l| GraphQLErrorLocation {
                                    line: i64::from(l.line),
                                    column: i64::from(l.column),
                                })
                                .collect()
                        }),
                        path: e.path.map_or_else(Vec::new, |p| {
                            p.into_iter()
                                .map(|fragment| match fragment {
                                    graphql_client::PathFragment::Key(s) => {
                                        serde_json::Value::String(s)
                                    }
                                    graphql_client::PathFragment::Index(i) => {
                                        serde_json::Value::Number(i.into())
                                    }
                                })
                                .collect()
                        }),
                    })
                    .collect(),
            ));
        }

        response.data.ok_or_else(|| {
            tracing::error!(
                body = %response_text.chars().take(500).collect::<String>(),
                "GraphQL response has no data and no errors"
            );
            ApiError::GraphQL(vec![GraphQLError {
                message: "No data in response".to_string(),
                locations: vec![],
                path: vec![],
            }])
        })
    }

    // =========================================================================
    // Store Methods
    // =========================================================================

    /// List all stores.
    ///
    /// The store list changes rarely, so results are cached for 5 minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_stores(&self) -> Result<Vec<Store>, ApiError> {
        if let Some(stores) = self.inner.store_cache.get(STORE_CACHE_KEY).await {
            debug!("Cache hit for store list");
            return Ok(stores);
        }

        let data = self.execute::<ListStores>(list_stores::Variables {}).await?;

        let stores: Vec<Store> = data.list_stores.into_iter().map(convert_store).collect();

        self.inner
            .store_cache
            .insert(STORE_CACHE_KEY.to_string(), stores.clone())
            .await;

        Ok(stores)
    }

    // =========================================================================
    // Listing Methods (not cached - freshness matters)
    // =========================================================================

    /// Get one page of available pets for a store.
    ///
    /// Pass the previous page's `end_cursor` as `after` to continue.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response cannot
    /// be converted.
    #[instrument(skip(self), fields(store_id = %store_id, first, after = after.as_deref().unwrap_or("")))]
    pub async fn available_pets(
        &self,
        store_id: StoreId,
        first: i64,
        after: Option<String>,
    ) -> Result<PetConnection, ApiError> {
        let variables = get_available_pets::Variables {
            store_id: store_id.as_uuid(),
            pagination: Some(get_available_pets::PaginationInput {
                first: Some(first),
                after,
                last: None,
                before: None,
            }),
        };

        let data = self.execute::<GetAvailablePets>(variables).await?;

        convert_pet_connection(data.available_pets)
    }

    // =========================================================================
    // Purchase Methods
    // =========================================================================

    /// Purchase a single pet.
    ///
    /// # Errors
    ///
    /// Returns an error if the pet is already sold or the request fails.
    #[instrument(skip(self), fields(pet_id = %pet_id))]
    pub async fn purchase_pet(&self, pet_id: PetId) -> Result<Order, ApiError> {
        let variables = purchase_pet::Variables {
            pet_id: pet_id.as_uuid(),
        };

        let data = self.execute::<PurchasePet>(variables).await?;

        convert_single_order(data.purchase_pet)
    }

    /// Purchase a batch of pets in one all-or-nothing order.
    ///
    /// # Errors
    ///
    /// Returns an error naming affected pets if any pet in the set is
    /// already sold, or if the request fails.
    #[instrument(skip(self, pet_ids), fields(count = pet_ids.len()))]
    pub async fn purchase_pets(&self, pet_ids: &[PetId]) -> Result<Order, ApiError> {
        let variables = purchase_pets::Variables {
            pet_ids: pet_ids.iter().map(|id| id.as_uuid()).collect(),
        };

        let data = self.execute::<PurchasePets>(variables).await?;

        convert_batch_order(data.purchase_pets)
    }
}

impl FetchPets for PetStoreClient {
    async fn available_pets(
        &self,
        store_id: StoreId,
        first: i64,
        after: Option<String>,
    ) -> Result<PetConnection, ApiError> {
        Self::available_pets(self, store_id, first, after).await
    }
}

impl PurchaseApi for PetStoreClient {
    async fn purchase_pet(&self, pet_id: PetId) -> Result<Order, ApiError> {
        Self::purchase_pet(self, pet_id).await
    }

    async fn purchase_pets(&self, pet_ids: &[PetId]) -> Result<Order, ApiError> {
        Self::purchase_pets(self, pet_ids).await
    }
}
