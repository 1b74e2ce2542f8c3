//! Content documents.
//!
//! `created_on` and `updated_on` are part of the stored shape but nothing in
//! this crate writes them; they stay `None` unless a store populated them.

use chrono::{DateTime, Utc};

use super::{ContentId, UserReference};

/// Fields supplied when creating a content document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContent {
    pub content_type_id: String,
    pub data: String,
    pub created_by_user_id: UserReference,
    pub last_updated_by_user_id: UserReference,
}

/// Stored content document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    id: ContentId,
    content_type_id: String,
    data: String,
    created_by_user_id: UserReference,
    last_updated_by_user_id: UserReference,
    created_on: Option<DateTime<Utc>>,
    updated_on: Option<DateTime<Utc>>,
}

impl Content {
    /// Assemble a stored document without timestamps.
    pub fn new(id: ContentId, fields: NewContent) -> Self {
        let NewContent {
            content_type_id,
            data,
            created_by_user_id,
            last_updated_by_user_id,
        } = fields;
        Self {
            id,
            content_type_id,
            data,
            created_by_user_id,
            last_updated_by_user_id,
            created_on: None,
            updated_on: None,
        }
    }

    /// Attach timestamps read back from a store.
    pub fn with_timestamps(
        mut self,
        created_on: Option<DateTime<Utc>>,
        updated_on: Option<DateTime<Utc>>,
    ) -> Self {
        self.created_on = created_on;
        self.updated_on = updated_on;
        self
    }

    pub fn id(&self) -> &ContentId {
        &self.id
    }

    pub fn content_type_id(&self) -> &str {
        self.content_type_id.as_str()
    }

    pub fn data(&self) -> &str {
        self.data.as_str()
    }

    pub fn created_by_user_id(&self) -> &UserReference {
        &self.created_by_user_id
    }

    pub fn last_updated_by_user_id(&self) -> &UserReference {
        &self.last_updated_by_user_id
    }

    pub fn created_on(&self) -> Option<DateTime<Utc>> {
        self.created_on
    }

    pub fn updated_on(&self) -> Option<DateTime<Utc>> {
        self.updated_on
    }
}

/// Criteria for listing content. The default matches every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentFilter {
    pub content_type_id: Option<String>,
    pub created_by_user_id: Option<UserReference>,
}

impl ContentFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, content: &Content) -> bool {
        let type_matches = self
            .content_type_id
            .as_deref()
            .is_none_or(|wanted| content.content_type_id() == wanted);
        let creator_matches = self
            .created_by_user_id
            .as_ref()
            .is_none_or(|wanted| content.created_by_user_id() == wanted);
        type_matches && creator_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn content() -> Content {
        Content::new(
            ContentId::random(),
            NewContent {
                content_type_id: "article".to_owned(),
                data: "{}".to_owned(),
                created_by_user_id: UserReference::new("creator"),
                last_updated_by_user_id: UserReference::new("editor"),
            },
        )
    }

    #[rstest]
    fn new_content_has_no_timestamps(content: Content) {
        assert!(content.created_on().is_none());
        assert!(content.updated_on().is_none());
    }

    #[rstest]
    fn timestamps_can_be_attached(content: Content) {
        let now = Utc::now();
        let stamped = content.with_timestamps(Some(now), None);
        assert_eq!(stamped.created_on(), Some(now));
        assert!(stamped.updated_on().is_none());
    }

    #[rstest]
    #[case(ContentFilter::all(), true)]
    #[case(ContentFilter { content_type_id: Some("article".to_owned()), created_by_user_id: None }, true)]
    #[case(ContentFilter { content_type_id: Some("video".to_owned()), created_by_user_id: None }, false)]
    #[case(ContentFilter { content_type_id: None, created_by_user_id: Some(UserReference::new("creator")) }, true)]
    #[case(ContentFilter { content_type_id: None, created_by_user_id: Some(UserReference::new("editor")) }, false)]
    fn filter_combines_criteria(
        content: Content,
        #[case] filter: ContentFilter,
        #[case] expected: bool,
    ) {
        assert_eq!(filter.matches(&content), expected);
    }
}
