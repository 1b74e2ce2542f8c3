//! Internal Diesel row structs.
//!
//! Rows never leave the persistence layer; repositories convert them into
//! domain documents before returning.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Book, BookId, Content, ContentId, NewBook, NewContent, User, UserId, UserReference,
};

use super::schema::{books, contents, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::from_uuid(row.id), row.email)
    }
}

impl<'a> From<&'a User> for NewUserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            email: user.email(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookRow {
    pub id: Uuid,
    pub name: String,
    pub pages: i32,
    pub user_id: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub(crate) struct NewBookRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub pages: i32,
    pub user_id: &'a str,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book::new(
            BookId::from_uuid(row.id),
            NewBook {
                name: row.name,
                pages: row.pages,
                user_id: UserReference::new(row.user_id),
            },
        )
    }
}

impl<'a> From<&'a Book> for NewBookRow<'a> {
    fn from(book: &'a Book) -> Self {
        Self {
            id: *book.id().as_uuid(),
            name: book.name(),
            pages: book.pages(),
            user_id: book.user_id().as_str(),
        }
    }
}

/// Content row. The timestamp columns are read back but never inserted.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContentRow {
    pub id: Uuid,
    pub content_type_id: String,
    pub data: String,
    pub created_by_user_id: String,
    pub last_updated_by_user_id: String,
    pub created_on: Option<DateTime<Utc>>,
    pub updated_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contents)]
pub(crate) struct NewContentRow<'a> {
    pub id: Uuid,
    pub content_type_id: &'a str,
    pub data: &'a str,
    pub created_by_user_id: &'a str,
    pub last_updated_by_user_id: &'a str,
}

impl From<ContentRow> for Content {
    fn from(row: ContentRow) -> Self {
        Content::new(
            ContentId::from_uuid(row.id),
            NewContent {
                content_type_id: row.content_type_id,
                data: row.data,
                created_by_user_id: UserReference::new(row.created_by_user_id),
                last_updated_by_user_id: UserReference::new(row.last_updated_by_user_id),
            },
        )
        .with_timestamps(row.created_on, row.updated_on)
    }
}

impl<'a> From<&'a Content> for NewContentRow<'a> {
    fn from(content: &'a Content) -> Self {
        Self {
            id: *content.id().as_uuid(),
            content_type_id: content.content_type_id(),
            data: content.data(),
            created_by_user_id: content.created_by_user_id().as_str(),
            last_updated_by_user_id: content.last_updated_by_user_id().as_str(),
        }
    }
}
