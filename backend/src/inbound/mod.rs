//! Inbound adapters translating client requests into store calls.
//!
//! [`graphql`] owns the schema and resolvers; [`http`] carries it over
//! Actix Web.

pub mod graphql;
pub mod http;
