//! Store-assigned document identifiers.
//!
//! Clients see identifiers as opaque strings. Every store in this crate
//! assigns UUID v4 values, so a supplied identifier that does not parse as a
//! UUID can never match a document and is reported as malformed instead of
//! being looked up.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Identifier parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentIdError {
    /// The identifier was blank.
    #[error("{kind} id must not be empty")]
    Empty { kind: &'static str },
    /// The identifier does not have the store's identifier shape.
    #[error("{kind} id `{value}` is not a valid identifier")]
    Malformed { kind: &'static str, value: String },
}

impl DocumentIdError {
    /// Entity kind the identifier was meant for.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty { kind } | Self::Malformed { kind, .. } => kind,
        }
    }
}

fn parse_uuid(kind: &'static str, raw: &str) -> Result<Uuid, DocumentIdError> {
    if raw.trim().is_empty() {
        return Err(DocumentIdError::Empty { kind });
    }
    if raw.trim() != raw {
        return Err(DocumentIdError::Malformed {
            kind,
            value: raw.to_owned(),
        });
    }
    Uuid::parse_str(raw).map_err(|_| DocumentIdError::Malformed {
        kind,
        value: raw.to_owned(),
    })
}

macro_rules! define_document_id {
    (
        $(#[$outer:meta])*
        $name:ident => $kind:literal
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            /// Entity kind used in error messages.
            pub const KIND: &'static str = $kind;

            /// Allocate a fresh identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parse a client-supplied identifier.
            pub fn parse(raw: impl AsRef<str>) -> Result<Self, DocumentIdError> {
                parse_uuid(Self::KIND, raw.as_ref()).map(Self)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = DocumentIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_document_id! {
    /// Identifier of a stored user.
    UserId => "user"
}

define_document_id! {
    /// Identifier of a stored book.
    BookId => "book"
}

define_document_id! {
    /// Identifier of a stored content document.
    ContentId => "content"
}
