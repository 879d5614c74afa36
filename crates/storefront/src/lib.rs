//! Pet Haven Storefront library.
//!
//! Client-side building blocks for the storefront: a typed GraphQL API
//! client, the locally persisted cart and session, the paginated pet
//! listing, and the checkout orchestrator. The `cli` crate composes
//! these at its entry point; nothing here holds global state.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod listing;
pub mod session;
pub mod state;
pub mod storage;
