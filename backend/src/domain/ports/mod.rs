//! Domain ports for the hexagonal boundary.
//!
//! The graph layer only talks to storage through these traits. Adapters
//! live under `crate::outbound`.

mod macros;
pub(crate) use macros::define_port_error;

mod book_repository;
mod content_repository;
mod store_error;
mod user_repository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::{BOOKS_COLLECTION, BookRepository};
#[cfg(test)]
pub use content_repository::MockContentRepository;
pub use content_repository::{CONTENTS_COLLECTION, ContentRepository};
pub use store_error::StoreError;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{USERS_COLLECTION, UserRepository};
