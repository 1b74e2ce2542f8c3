//! Storage handles shared by every resolver.

use std::sync::Arc;

use crate::domain::ports::{BookRepository, ContentRepository, UserRepository};

/// Port bundle attached to the schema as context data.
#[derive(Clone)]
pub struct GraphState {
    pub users: Arc<dyn UserRepository>,
    pub books: Arc<dyn BookRepository>,
    pub contents: Arc<dyn ContentRepository>,
}

impl GraphState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        books: Arc<dyn BookRepository>,
        contents: Arc<dyn ContentRepository>,
    ) -> Self {
        Self {
            users,
            books,
            contents,
        }
    }

    /// Use one store for all three collections.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use bookgraph::inbound::graphql::GraphState;
    /// use bookgraph::outbound::memory::InMemoryDocumentStore;
    ///
    /// let state = GraphState::from_store(Arc::new(InMemoryDocumentStore::new()));
    /// # let _ = state;
    /// ```
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: UserRepository + BookRepository + ContentRepository + 'static,
    {
        Self {
            users: store.clone(),
            books: store.clone(),
            contents: store,
        }
    }
}
