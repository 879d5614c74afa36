//! Pet Haven Core - Shared types library.
//!
//! This crate provides the domain types used across all Pet Haven
//! components:
//! - `storefront` - Client library for the remote pet-store GraphQL API
//! - `cli` - Command-line storefront frontend
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. The
//! remote API is the source of truth for every record here; the client
//! never mutates a `Pet`, it only submits pet IDs for purchase.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, emails, species/status enums, and the
//!   domain records returned by the API

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
