//! In-memory document store.
//!
//! Implements all three storage ports over process-local collections. Used
//! when no database is configured and as the store behind the integration
//! tests. Documents are kept in creation order and never removed.

use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    BOOKS_COLLECTION, BookRepository, CONTENTS_COLLECTION, ContentRepository, StoreError,
    USERS_COLLECTION, UserRepository,
};
use crate::domain::{
    Book, BookFilter, BookId, Content, ContentFilter, ContentId, NewBook, NewContent, NewUser,
    User, UserFilter, UserId,
};

struct Collection<T> {
    name: &'static str,
    documents: RwLock<Vec<T>>,
}

impl<T: Clone> Collection<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            documents: RwLock::new(Vec::new()),
        }
    }

    fn insert(&self, document: T) -> Result<T, StoreError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::write(self.name, "collection lock poisoned"))?;
        documents.push(document.clone());
        Ok(document)
    }

    fn find_one(&self, predicate: impl Fn(&T) -> bool) -> Result<Option<T>, StoreError> {
        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::read(self.name, "collection lock poisoned"))?;
        Ok(documents.iter().find(|doc| predicate(doc)).cloned())
    }

    fn find_all(&self, predicate: impl Fn(&T) -> bool) -> Result<Vec<T>, StoreError> {
        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::read(self.name, "collection lock poisoned"))?;
        Ok(documents.iter().filter(|doc| predicate(doc)).cloned().collect())
    }
}

/// Process-local store for users, books, and content.
///
/// # Examples
/// ```
/// use bookgraph::domain::NewUser;
/// use bookgraph::domain::ports::UserRepository;
/// use bookgraph::outbound::memory::InMemoryDocumentStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryDocumentStore::new();
/// let user = store
///     .create(NewUser { email: "a@x.com".to_owned() })
///     .await
///     .expect("create user");
/// let found = store.find_by_id(user.id()).await.expect("lookup");
/// assert_eq!(found, Some(user));
/// # });
/// ```
pub struct InMemoryDocumentStore {
    users: Collection<User>,
    books: Collection<Book>,
    contents: Collection<Content>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            users: Collection::new(USERS_COLLECTION),
            books: Collection::new(BOOKS_COLLECTION),
            contents: Collection::new(CONTENTS_COLLECTION),
        }
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryDocumentStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let user = self.users.insert(User::new(UserId::random(), user.email))?;
        debug!(collection = USERS_COLLECTION, id = %user.id(), "document created");
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        self.users.find_one(|user| user.id() == id)
    }

    async fn find(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError> {
        self.users.find_all(|user| filter.matches(user))
    }
}

#[async_trait]
impl BookRepository for InMemoryDocumentStore {
    async fn create(&self, book: NewBook) -> Result<Book, StoreError> {
        let book = self.books.insert(Book::new(BookId::random(), book))?;
        debug!(collection = BOOKS_COLLECTION, id = %book.id(), "document created");
        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, StoreError> {
        self.books.find_one(|book| book.id() == id)
    }

    async fn find(&self, filter: &BookFilter) -> Result<Vec<Book>, StoreError> {
        self.books.find_all(|book| filter.matches(book))
    }
}

#[async_trait]
impl ContentRepository for InMemoryDocumentStore {
    async fn create(&self, content: NewContent) -> Result<Content, StoreError> {
        let content = self
            .contents
            .insert(Content::new(ContentId::random(), content))?;
        debug!(collection = CONTENTS_COLLECTION, id = %content.id(), "document created");
        Ok(content)
    }

    async fn find_by_id(&self, id: &ContentId) -> Result<Option<Content>, StoreError> {
        self.contents.find_one(|content| content.id() == id)
    }

    async fn find(&self, filter: &ContentFilter) -> Result<Vec<Content>, StoreError> {
        self.contents.find_all(|content| filter.matches(content))
    }
}

#[cfg(test)]
mod tests;
