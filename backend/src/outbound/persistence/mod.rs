//! PostgreSQL document store built on Diesel.
//!
//! Each repository implements one storage port over a shared `bb8` pool
//! from `diesel-async`. Row structs (`models.rs`) and table definitions
//! (`schema.rs`) stay private; only domain documents cross the boundary.
//!
//! # Example
//!
//! ```ignore
//! use bookgraph::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/bookgraph")).await?;
//! let users = DieselUserRepository::new(pool);
//! ```

mod diesel_book_repository;
mod diesel_content_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_book_repository::DieselBookRepository;
pub use diesel_content_repository::DieselContentRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
