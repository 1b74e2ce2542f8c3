//! Output types of the graph.
//!
//! Scalar fields read straight off the wrapped document. Relational fields
//! perform exactly one store call each, only when the client selects them.
//! Relational fields are nullable so a failed lookup nulls that field alone.

use async_graphql::{Context, ID, Object, Result};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{Book, BookFilter, Content, User, UserReference};

use super::GraphState;
use super::error::{into_field_error, invalid_id};

/// Follow a stored user reference.
///
/// A reference that is not a well-formed id is a field error; one that
/// names no stored user resolves to `None`.
pub(crate) async fn resolve_user_reference(
    ctx: &Context<'_>,
    field: &'static str,
    reference: &UserReference,
) -> Result<Option<UserObject>> {
    let state = ctx.data::<GraphState>()?;
    let id = reference
        .resolve()
        .map_err(|err| into_field_error(invalid_id(field, err)))?;

    let user = state
        .users
        .find_by_id(&id)
        .await
        .map_err(|err| into_field_error(err.into()))?;
    if user.is_none() {
        debug!(field, user_id = %id, "referenced user not found");
    }
    Ok(user.map(UserObject::from))
}

/// A stored user.
pub struct UserObject(User);

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self(user)
    }
}

#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> ID {
        ID(self.0.id().to_string())
    }

    async fn email(&self) -> &str {
        self.0.email()
    }

    /// Books that reference this user as their owner.
    async fn book(&self, ctx: &Context<'_>) -> Result<Option<Vec<BookObject>>> {
        let state = ctx.data::<GraphState>()?;
        debug!(user_id = %self.0.id(), "listing books for user");

        let books = state
            .books
            .find(&BookFilter::owned_by(self.0.id()))
            .await
            .map_err(|err| into_field_error(err.into()))?;
        Ok(Some(books.into_iter().map(BookObject::from).collect()))
    }
}

/// A stored book.
pub struct BookObject(Book);

impl From<Book> for BookObject {
    fn from(book: Book) -> Self {
        Self(book)
    }
}

#[Object(name = "Book")]
impl BookObject {
    async fn id(&self) -> ID {
        ID(self.0.id().to_string())
    }

    async fn name(&self) -> &str {
        self.0.name()
    }

    async fn pages(&self) -> i32 {
        self.0.pages()
    }

    /// Owner of the book, or null when the owner does not exist.
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        resolve_user_reference(ctx, "userId", self.0.user_id()).await
    }
}

/// A stored content item.
pub struct ContentObject(Content);

impl From<Content> for ContentObject {
    fn from(content: Content) -> Self {
        Self(content)
    }
}

#[Object(name = "Content")]
impl ContentObject {
    async fn id(&self) -> ID {
        ID(self.0.id().to_string())
    }

    async fn content_type_id(&self) -> &str {
        self.0.content_type_id()
    }

    async fn data(&self) -> &str {
        self.0.data()
    }

    /// User that created the content.
    async fn created_by_user_id(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        resolve_user_reference(ctx, "createdByUserId", self.0.created_by_user_id()).await
    }

    /// User that last updated the content.
    async fn last_updated_by_user_id(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        resolve_user_reference(ctx, "lastUpdatedByUserId", self.0.last_updated_by_user_id())
            .await
    }

    async fn created_on(&self) -> Option<DateTime<Utc>> {
        self.0.created_on()
    }

    async fn updated_on(&self) -> Option<DateTime<Utc>> {
        self.0.updated_on()
    }
}
