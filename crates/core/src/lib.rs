//! Core domain types for the Brewhouse drink catalog.
//!
//! This crate is free of web and database concerns: it holds the drink
//! and recipe types, the permission vocabulary enforced by the API
//! guards, shared error types, and validation helpers. Everything here
//! is shared by the `brewhouse-db` and `brewhouse-api` crates.

pub mod drink;
pub mod error;
pub mod permission;
pub mod types;
