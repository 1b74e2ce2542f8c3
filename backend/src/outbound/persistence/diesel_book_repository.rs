//! PostgreSQL-backed `BookRepository`.
//!
//! Owner references are stored as text exactly as supplied, so listing by
//! owner compares the reference string rather than a parsed identifier.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{BOOKS_COLLECTION, BookRepository, StoreError};
use crate::domain::{Book, BookFilter, BookId, NewBook};

use super::error_mapping::{Access, map_diesel_error, map_pool_error};
use super::models::{BookRow, NewBookRow};
use super::pool::DbPool;
use super::schema::books;

/// Diesel implementation of the `BookRepository` port.
#[derive(Clone)]
pub struct DieselBookRepository {
    pool: DbPool,
}

impl DieselBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    async fn create(&self, book: NewBook) -> Result<Book, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(map_pool_error(BOOKS_COLLECTION, Access::Write))?;

        let book = Book::new(BookId::random(), book);
        diesel::insert_into(books::table)
            .values(NewBookRow::from(&book))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error(BOOKS_COLLECTION, Access::Write))?;

        debug!(collection = BOOKS_COLLECTION, id = %book.id(), "document created");
        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(map_pool_error(BOOKS_COLLECTION, Access::Read))?;

        let row: Option<BookRow> = books::table
            .filter(books::id.eq(*id.as_uuid()))
            .select(BookRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error(BOOKS_COLLECTION, Access::Read))?;

        Ok(row.map(Book::from))
    }

    async fn find(&self, filter: &BookFilter) -> Result<Vec<Book>, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(map_pool_error(BOOKS_COLLECTION, Access::Read))?;

        let mut query = books::table.into_boxed();
        if let Some(owner) = filter.user_id.as_ref() {
            query = query.filter(books::user_id.eq(owner.as_str()));
        }

        let rows: Vec<BookRow> = query
            .order((books::created_at.asc(), books::id.asc()))
            .select(BookRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error(BOOKS_COLLECTION, Access::Read))?;

        Ok(rows.into_iter().map(Book::from).collect())
    }
}
