//! Storage port for content documents.

use async_trait::async_trait;

use crate::domain::{Content, ContentFilter, ContentId, NewContent};

use super::StoreError;

/// Collection name reported in [`StoreError`]s raised for content.
pub const CONTENTS_COLLECTION: &str = "contents";

/// Persistence contract for content documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Persist a new document and return it with its assigned identifier.
    ///
    /// Adapters leave `created_on` and `updated_on` unset.
    async fn create(&self, content: NewContent) -> Result<Content, StoreError>;

    /// Fetch a document by identifier.
    async fn find_by_id(&self, id: &ContentId) -> Result<Option<Content>, StoreError>;

    /// List documents matching `filter` in creation order.
    async fn find(&self, filter: &ContentFilter) -> Result<Vec<Content>, StoreError>;
}
