//! Route definitions.
//!
//! The catalog is served at the root level: drink routes come from
//! [`drinks::router`] and the health probe from [`health::router`].
//! Both are merged by [`crate::router::build_app_router`].

pub mod drinks;
pub mod health;
