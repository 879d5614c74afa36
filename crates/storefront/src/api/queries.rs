//! GraphQL query definitions for the pet-store API.
//!
//! Uses `graphql_client` to generate type-safe Rust code from the SDL
//! schema and the query documents under `graphql/`.

use graphql_client::GraphQLQuery;

// Custom scalar type aliases (used by graphql_client)
// Note: These MUST match the GraphQL schema scalar names exactly

/// Server-assigned UUID identifier.
#[allow(clippy::upper_case_acronyms)]
type UUID = uuid::Uuid;

/// RFC 3339 timestamp.
type Time = chrono::DateTime<chrono::Utc>;

// Store queries

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/stores.graphql",
    response_derives = "Debug, Clone"
)]
pub struct ListStores;

// Pet listing queries

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/pets.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetAvailablePets;

// Purchase mutations

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/orders.graphql",
    response_derives = "Debug, Clone"
)]
pub struct PurchasePet;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/orders.graphql",
    response_derives = "Debug, Clone"
)]
pub struct PurchasePets;
