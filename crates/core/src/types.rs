//! Shared primitive aliases used across the workspace.

/// Primary key type for all tables (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// UTC timestamp, as stored in the timestamptz audit columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
