//! PostgreSQL access for tutor: connection pool, embedded migrations,
//! row models, and query functions.
//!
//! This crate stays at the row level. Domain types (learning goals, the
//! composed plan with its items) live in `tutor-core`; the Postgres store
//! there assembles them from the rows returned here.

pub mod config;
pub mod models;
pub mod pool;
pub mod queries;
