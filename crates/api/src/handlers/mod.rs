//! Request handlers for the drink catalog.
//!
//! Handlers delegate to [`brewhouse_db::repositories::DrinkRepo`] and
//! map errors via [`crate::error::AppError`].

pub mod drinks;
