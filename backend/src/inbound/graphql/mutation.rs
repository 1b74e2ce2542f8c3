//! Root mutation fields.
//!
//! None of these check that referenced users exist; references are stored
//! exactly as supplied.

use async_graphql::{Context, ID, Object, Result};
use tracing::info;

use crate::domain::{NewBook, NewContent, NewUser, UserReference};

use super::GraphState;
use super::error::into_field_error;
use super::types::{BookObject, ContentObject, UserObject};

/// Entry points for writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a user.
    async fn add_user(&self, ctx: &Context<'_>, email: String) -> Result<Option<UserObject>> {
        let state = ctx.data::<GraphState>()?;
        let user = state
            .users
            .create(NewUser { email })
            .await
            .map_err(|err| into_field_error(err.into()))?;

        info!(user_id = %user.id(), "user added");
        Ok(Some(UserObject::from(user)))
    }

    /// Create a book owned by `userId`.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        pages: i32,
        user_id: ID,
    ) -> Result<Option<BookObject>> {
        let state = ctx.data::<GraphState>()?;
        let book = state
            .books
            .create(NewBook {
                name,
                pages,
                user_id: UserReference::new(user_id.0),
            })
            .await
            .map_err(|err| into_field_error(err.into()))?;

        info!(book_id = %book.id(), "book added");
        Ok(Some(BookObject::from(book)))
    }

    /// Create a content item. `createdOn` and `updatedOn` are left unset.
    async fn add_content(
        &self,
        ctx: &Context<'_>,
        content_type_id: String,
        data: String,
        created_by_user_id: ID,
        last_updated_by_user_id: ID,
    ) -> Result<Option<ContentObject>> {
        let state = ctx.data::<GraphState>()?;
        let content = state
            .contents
            .create(NewContent {
                content_type_id,
                data,
                created_by_user_id: UserReference::new(created_by_user_id.0),
                last_updated_by_user_id: UserReference::new(last_updated_by_user_id.0),
            })
            .await
            .map_err(|err| into_field_error(err.into()))?;

        info!(content_id = %content.id(), "content added");
        Ok(Some(ContentObject::from(content)))
    }
}
