//! Diesel and pool error translation into [`StoreError`].

use tracing::debug;

use crate::domain::ports::StoreError;

use super::pool::PoolError;

/// Whether the failing operation read or wrote documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Read,
    Write,
}

impl Access {
    fn error(self, collection: &'static str, message: impl Into<String>) -> StoreError {
        match self {
            Self::Read => StoreError::read(collection, message),
            Self::Write => StoreError::write(collection, message),
        }
    }
}

/// Build a closure mapping pool failures for `collection`.
pub(crate) fn map_pool_error(
    collection: &'static str,
    access: Access,
) -> impl FnOnce(PoolError) -> StoreError {
    move |error| match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            access.error(collection, message)
        }
    }
}

/// Build a closure mapping Diesel failures for `collection`.
///
/// Driver messages are logged at debug level and replaced with a fixed
/// description so SQL fragments never reach clients.
pub(crate) fn map_diesel_error(
    collection: &'static str,
    access: Access,
) -> impl FnOnce(diesel::result::Error) -> StoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    move |error| {
        match &error {
            DieselError::DatabaseError(kind, info) => {
                debug!(collection, ?kind, message = info.message(), "diesel operation failed");
            }
            _ => debug!(
                collection,
                error_type = %std::any::type_name_of_val(&error),
                "diesel operation failed"
            ),
        }

        let message = match error {
            DieselError::NotFound => "record not found",
            DieselError::QueryBuilderError(_) => "database query error",
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                "duplicate document id"
            }
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
                "database connection error"
            }
            _ => "database error",
        };
        access.error(collection, message)
    }
}

#[cfg(test)]
mod tests {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    use super::*;

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new("relation \"books\" secret".to_owned()))
    }

    #[rstest]
    #[case(Access::Read, StoreError::read("users", "timed out"))]
    #[case(Access::Write, StoreError::write("users", "timed out"))]
    fn pool_errors_keep_access_kind(#[case] access: Access, #[case] expected: StoreError) {
        let mapped = map_pool_error("users", access)(PoolError::checkout("timed out"));
        assert_eq!(mapped, expected);
    }

    #[rstest]
    #[case(DieselError::NotFound, "record not found")]
    #[case(database_error(DatabaseErrorKind::UniqueViolation), "duplicate document id")]
    #[case(database_error(DatabaseErrorKind::ClosedConnection), "database connection error")]
    #[case(database_error(DatabaseErrorKind::SerializationFailure), "database error")]
    #[case(DieselError::RollbackTransaction, "database error")]
    fn diesel_errors_use_fixed_messages(#[case] error: DieselError, #[case] message: &str) {
        let mapped = map_diesel_error("books", Access::Write)(error);
        assert_eq!(mapped, StoreError::write("books", message));
        assert!(!mapped.to_string().contains("secret"));
    }
}
