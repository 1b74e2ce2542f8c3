//! Book documents.

use super::{BookId, UserId, UserReference};

/// Fields supplied when creating a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub name: String,
    pub pages: i32,
    /// Owner reference; stored without checking that the user exists.
    pub user_id: UserReference,
}

/// Stored book document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    name: String,
    pages: i32,
    user_id: UserReference,
}

impl Book {
    /// Assemble a stored book from its identifier and creation fields.
    pub fn new(id: BookId, fields: NewBook) -> Self {
        let NewBook {
            name,
            pages,
            user_id,
        } = fields;
        Self {
            id,
            name,
            pages,
            user_id,
        }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn pages(&self) -> i32 {
        self.pages
    }

    pub fn user_id(&self) -> &UserReference {
        &self.user_id
    }
}

/// Criteria for listing books. The default matches every book.
///
/// # Examples
/// ```
/// use bookgraph::domain::{BookFilter, UserId};
///
/// let owner = UserId::random();
/// let filter = BookFilter::owned_by(&owner);
/// assert_eq!(filter.user_id.as_ref().map(|r| r.as_str()), Some(owner.to_string().as_str()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub user_id: Option<UserReference>,
}

impl BookFilter {
    /// Filter matching every book.
    pub fn all() -> Self {
        Self::default()
    }

    /// Books whose owner reference equals `user_id`.
    pub fn owned_by(user_id: &UserId) -> Self {
        Self {
            user_id: Some(UserReference::from(*user_id)),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.user_id
            .as_ref()
            .is_none_or(|owner| book.user_id() == owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn book_owned_by(owner: UserReference) -> Book {
        Book::new(
            BookId::random(),
            NewBook {
                name: "Go".to_owned(),
                pages: 300,
                user_id: owner,
            },
        )
    }

    #[rstest]
    fn new_keeps_creation_fields() {
        let owner = UserId::random();
        let book = book_owned_by(owner.into());
        assert_eq!(book.name(), "Go");
        assert_eq!(book.pages(), 300);
        assert_eq!(book.user_id().resolve(), Ok(owner));
    }

    #[rstest]
    fn owner_filter_selects_matching_books() {
        let owner = UserId::random();
        let mine = book_owned_by(owner.into());
        let theirs = book_owned_by(UserId::random().into());
        let filter = BookFilter::owned_by(&owner);

        assert!(filter.matches(&mine));
        assert!(!filter.matches(&theirs));
        assert!(BookFilter::all().matches(&theirs));
    }

    #[rstest]
    fn owner_filter_ignores_malformed_references() {
        let book = book_owned_by(UserReference::new("garbage"));
        assert!(!BookFilter::owned_by(&UserId::random()).matches(&book));
    }
}
