//! Storage port for user documents.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserFilter, UserId};

use super::StoreError;

/// Collection name reported in [`StoreError`]s raised for users.
pub const USERS_COLLECTION: &str = "users";

/// Persistence contract for users.
///
/// Adapters assign identifiers on `create`. A missing document is `Ok(None)`
/// from `find_by_id` and an empty list from `find`; `Err` is reserved for
/// connection or query failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with its assigned identifier.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StoreError>;

    /// List users matching `filter` in creation order.
    async fn find(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError>;
}
