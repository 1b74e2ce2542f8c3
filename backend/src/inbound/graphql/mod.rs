//! GraphQL adapter.
//!
//! Binds the query and mutation roots into one schema. The schema carries a
//! [`GraphState`] as context data and is built once per process; handlers
//! receive it explicitly.

mod error;
mod mutation;
mod query;
mod state;
mod types;

use async_graphql::{EmptySubscription, Schema, SchemaBuilder};

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use state::GraphState;
pub use types::{BookObject, ContentObject, UserObject};

/// Executable schema with no subscription root.
pub type GraphSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

fn schema_builder() -> SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription> {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
}

/// Compose the schema over `state`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use bookgraph::inbound::graphql::{GraphState, build_schema};
/// use bookgraph::outbound::memory::InMemoryDocumentStore;
///
/// let schema = build_schema(GraphState::from_store(Arc::new(InMemoryDocumentStore::new())));
/// assert!(schema.sdl().contains("type RootQueryType"));
/// ```
pub fn build_schema(state: GraphState) -> GraphSchema {
    schema_builder().data(state).finish()
}

/// SDL of the schema. Needs no storage.
pub fn schema_sdl() -> String {
    schema_builder().finish().sdl()
}
