//! Error type shared by the document store ports.

use super::define_port_error;

define_port_error! {
    /// Failures raised by document store adapters.
    ///
    /// A lookup that finds nothing is not an error; adapters return `None`
    /// or an empty list instead.
    pub enum StoreError {
        /// Persisting a new document failed (constraint or connection).
        Write { collection: String, message: String } =>
            "{collection} store write failed: {message}",
        /// Reading documents failed (connection or query).
        Read { collection: String, message: String } =>
            "{collection} store read failed: {message}",
    }
}

impl StoreError {
    /// Collection the failing operation targeted.
    pub fn collection(&self) -> &str {
        match self {
            Self::Write { collection, .. } | Self::Read { collection, .. } => collection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn write_errors_name_the_collection() {
        let err = StoreError::write("books", "connection reset");
        assert_eq!(err.to_string(), "books store write failed: connection reset");
        assert_eq!(err.collection(), "books");
    }

    #[rstest]
    fn read_errors_name_the_collection() {
        let err = StoreError::read("users", "pool timed out");
        assert_eq!(err.to_string(), "users store read failed: pool timed out");
        assert_eq!(err.collection(), "users");
    }
}
