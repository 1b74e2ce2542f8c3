//! User documents and references to them.

use super::{DocumentIdError, UserId};

/// Fields supplied when creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
}

/// Stored user document.
///
/// # Examples
/// ```
/// use bookgraph::domain::{User, UserId};
///
/// let user = User::new(UserId::random(), "a@x.com");
/// assert_eq!(user.email(), "a@x.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: String,
}

impl User {
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Criteria for listing users. The default matches every user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub email: Option<String>,
}

impl UserFilter {
    /// Filter matching every user.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, user: &User) -> bool {
        self.email
            .as_deref()
            .is_none_or(|email| user.email() == email)
    }
}

/// Reference to a user held by another document.
///
/// Values that parse as a user id are kept in canonical hyphenated
/// lower-case form, so owner filters and [`UserReference::resolve`] agree on
/// the same spelling. Anything else is kept verbatim. Nothing checks that the
/// user exists until a resolver follows the reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserReference(String);

impl UserReference {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match UserId::parse(&raw) {
            Ok(id) => Self::from(id),
            Err(_) => Self(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Parse the reference into a lookup key.
    ///
    /// # Examples
    /// ```
    /// use bookgraph::domain::UserReference;
    ///
    /// assert!(UserReference::new("nope").resolve().is_err());
    /// ```
    pub fn resolve(&self) -> Result<UserId, DocumentIdError> {
        UserId::parse(&self.0)
    }
}

impl From<UserId> for UserReference {
    fn from(value: UserId) -> Self {
        Self(value.to_string())
    }
}

impl From<UserReference> for String {
    fn from(value: UserReference) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_filter_matches_everything() {
        let user = User::new(UserId::random(), "a@x.com");
        assert!(UserFilter::all().matches(&user));
    }

    #[rstest]
    #[case("a@x.com", true)]
    #[case("b@x.com", false)]
    fn email_filter_compares_exactly(#[case] email: &str, #[case] expected: bool) {
        let user = User::new(UserId::random(), "a@x.com");
        let filter = UserFilter {
            email: Some(email.to_owned()),
        };
        assert_eq!(filter.matches(&user), expected);
    }

    #[rstest]
    fn reference_from_id_resolves_back() {
        let id = UserId::random();
        assert_eq!(UserReference::from(id).resolve(), Ok(id));
    }

    #[rstest]
    fn reference_keeps_malformed_input_verbatim() {
        let reference = UserReference::new("5f8d0d55b54764421b7156c9");
        assert_eq!(reference.as_str(), "5f8d0d55b54764421b7156c9");
        assert!(matches!(
            reference.resolve(),
            Err(DocumentIdError::Malformed { kind: "user", .. })
        ));
    }

    #[rstest]
    #[case("3FA85F64-5717-4562-B3FC-2C963F66AFA6")]
    #[case("3fa85f6457174562b3fc2c963f66afa6")]
    #[case("{3fa85f64-5717-4562-b3fc-2c963f66afa6}")]
    fn reference_spellings_of_an_id_are_canonicalised(#[case] raw: &str) {
        let reference = UserReference::new(raw);
        assert_eq!(reference.as_str(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }
}
