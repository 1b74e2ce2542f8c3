//! Typed document query graph over users, books, and content.
//!
//! Layout follows ports and adapters: [`domain`] holds documents and storage
//! ports, [`inbound`] the GraphQL schema and its Actix transport, and
//! [`outbound`] the in-memory and PostgreSQL stores.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;
