//! Root query fields.

use async_graphql::{Context, ID, Object, Result};
use tracing::debug;

use crate::domain::{BookFilter, BookId, ContentId, UserFilter, UserId};

use super::GraphState;
use super::error::{into_field_error, invalid_id};
use super::types::{BookObject, ContentObject, UserObject};

/// Entry points for reads.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryRoot;

#[Object(name = "RootQueryType")]
impl QueryRoot {
    /// Fetch one book. Null when `id` is omitted or unknown.
    async fn book(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<BookObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let id = BookId::parse(id.as_str()).map_err(|err| into_field_error(invalid_id("id", err)))?;
        let state = ctx.data::<GraphState>()?;

        let book = state
            .books
            .find_by_id(&id)
            .await
            .map_err(|err| into_field_error(err.into()))?;
        debug!(book_id = %id, found = book.is_some(), "book lookup");
        Ok(book.map(BookObject::from))
    }

    /// Every book in creation order.
    async fn books(&self, ctx: &Context<'_>) -> Result<Option<Vec<BookObject>>> {
        let state = ctx.data::<GraphState>()?;
        let books = state
            .books
            .find(&BookFilter::all())
            .await
            .map_err(|err| into_field_error(err.into()))?;
        Ok(Some(books.into_iter().map(BookObject::from).collect()))
    }

    /// Fetch one user. Null when `id` is omitted or unknown.
    async fn user(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<UserObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let id = UserId::parse(id.as_str()).map_err(|err| into_field_error(invalid_id("id", err)))?;
        let state = ctx.data::<GraphState>()?;

        let user = state
            .users
            .find_by_id(&id)
            .await
            .map_err(|err| into_field_error(err.into()))?;
        debug!(user_id = %id, found = user.is_some(), "user lookup");
        Ok(user.map(UserObject::from))
    }

    /// Every user in creation order.
    async fn users(&self, ctx: &Context<'_>) -> Result<Option<Vec<UserObject>>> {
        let state = ctx.data::<GraphState>()?;
        let users = state
            .users
            .find(&UserFilter::all())
            .await
            .map_err(|err| into_field_error(err.into()))?;
        Ok(Some(users.into_iter().map(UserObject::from).collect()))
    }

    /// Fetch one content item. Null when `id` is omitted or unknown.
    async fn content(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<ContentObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let id =
            ContentId::parse(id.as_str()).map_err(|err| into_field_error(invalid_id("id", err)))?;
        let state = ctx.data::<GraphState>()?;

        let content = state
            .contents
            .find_by_id(&id)
            .await
            .map_err(|err| into_field_error(err.into()))?;
        debug!(content_id = %id, found = content.is_some(), "content lookup");
        Ok(content.map(ContentObject::from))
    }
}
