//! HTTP inbound adapter.

pub mod error;
pub mod graphql;
pub mod health;

pub use error::json_config;
