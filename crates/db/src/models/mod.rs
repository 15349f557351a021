//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Projection helpers producing the serializable API views
//! - `Deserialize` DTOs for inserts and patches

pub mod drink;
