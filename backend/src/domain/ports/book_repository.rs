//! Storage port for book documents.

use async_trait::async_trait;

use crate::domain::{Book, BookFilter, BookId, NewBook};

use super::StoreError;

/// Collection name reported in [`StoreError`]s raised for books.
pub const BOOKS_COLLECTION: &str = "books";

/// Persistence contract for books.
///
/// `create` stores the owner reference verbatim; it does not check that the
/// referenced user exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Persist a new book and return it with its assigned identifier.
    async fn create(&self, book: NewBook) -> Result<Book, StoreError>;

    /// Fetch a book by identifier.
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, StoreError>;

    /// List books matching `filter` in creation order.
    async fn find(&self, filter: &BookFilter) -> Result<Vec<Book>, StoreError>;
}
