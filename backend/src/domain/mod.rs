//! Domain primitives and document types.
//!
//! Purpose: define the three stored document kinds (users, books, content),
//! their identifiers, and the storage ports the graph layer resolves fields
//! through. Nothing here knows about GraphQL, HTTP, or a particular store.
//!
//! Public surface:
//! - `User`, `Book`, `Content`: stored documents, immutable once created.
//! - `NewUser`, `NewBook`, `NewContent`: creation payloads.
//! - `UserFilter`, `BookFilter`, `ContentFilter`: listing criteria.
//! - `UserId`, `BookId`, `ContentId`, `UserReference`: identifiers.
//! - `Error`, `ErrorCode`: transport agnostic error payload.
//! - `TraceId`: request correlation identifier.

pub mod book;
pub mod content;
pub mod document_id;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::book::{Book, BookFilter, NewBook};
pub use self::content::{Content, ContentFilter, NewContent};
pub use self::document_id::{BookId, ContentId, DocumentIdError, UserId};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserFilter, UserReference};
