//! PostgreSQL-backed `ContentRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{CONTENTS_COLLECTION, ContentRepository, StoreError};
use crate::domain::{Content, ContentFilter, ContentId, NewContent};

use super::error_mapping::{Access, map_diesel_error, map_pool_error};
use super::models::{ContentRow, NewContentRow};
use super::pool::DbPool;
use super::schema::contents;

/// Diesel implementation of the `ContentRepository` port.
///
/// `created_on` and `updated_on` are left to the database; the application
/// never writes them.
#[derive(Clone)]
pub struct DieselContentRepository {
    pool: DbPool,
}

impl DieselContentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for DieselContentRepository {
    async fn create(&self, content: NewContent) -> Result<Content, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(map_pool_error(CONTENTS_COLLECTION, Access::Write))?;

        let content = Content::new(ContentId::random(), content);
        diesel::insert_into(contents::table)
            .values(NewContentRow::from(&content))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error(CONTENTS_COLLECTION, Access::Write))?;

        debug!(collection = CONTENTS_COLLECTION, id = %content.id(), "document created");
        Ok(content)
    }

    async fn find_by_id(&self, id: &ContentId) -> Result<Option<Content>, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(map_pool_error(CONTENTS_COLLECTION, Access::Read))?;

        let row: Option<ContentRow> = contents::table
            .filter(contents::id.eq(*id.as_uuid()))
            .select(ContentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error(CONTENTS_COLLECTION, Access::Read))?;

        Ok(row.map(Content::from))
    }

    async fn find(&self, filter: &ContentFilter) -> Result<Vec<Content>, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(map_pool_error(CONTENTS_COLLECTION, Access::Read))?;

        let mut query = contents::table.into_boxed();
        if let Some(content_type_id) = filter.content_type_id.as_deref() {
            query = query.filter(contents::content_type_id.eq(content_type_id));
        }
        if let Some(creator) = filter.created_by_user_id.as_ref() {
            query = query.filter(contents::created_by_user_id.eq(creator.as_str()));
        }

        let rows: Vec<ContentRow> = query
            .order((contents::created_at.asc(), contents::id.asc()))
            .select(ContentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error(CONTENTS_COLLECTION, Access::Read))?;

        Ok(rows.into_iter().map(Content::from).collect())
    }
}
