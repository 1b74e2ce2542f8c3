//! Translation of domain failures into GraphQL field errors.
//!
//! Every field error carries `extensions.code`, plus `traceId` when a trace
//! is in scope and `details` when the failure has structured context.

use async_graphql::{ErrorExtensions, Value};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::ports::StoreError;
use crate::domain::{DocumentIdError, Error};

/// Malformed identifier supplied for `field`.
pub(crate) fn invalid_id(field: &'static str, err: DocumentIdError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "kind": err.kind(),
    }))
}

/// Store failure surfaced through a resolver.
pub(crate) fn store_failure(err: StoreError) -> Error {
    match &err {
        StoreError::Read { collection, message } => {
            warn!(%collection, %message, "document store read failed");
            Error::service_unavailable(err.to_string())
                .with_details(json!({ "collection": collection }))
        }
        StoreError::Write { collection, message } => {
            error!(%collection, %message, "document store write failed");
            Error::internal(err.to_string()).with_details(json!({ "collection": collection }))
        }
    }
}

/// Convert a domain error into an `async_graphql` field error.
///
/// Internal errors are redacted first so driver messages stay in the logs.
pub(crate) fn into_field_error(err: Error) -> async_graphql::Error {
    let err = err.redacted();
    async_graphql::Error::new(err.message()).extend_with(|_, ext| {
        ext.set("code", err.code().as_str());
        if let Some(trace_id) = err.trace_id() {
            ext.set("traceId", trace_id);
        }
        if let Some(details) = err.details() {
            ext.set(
                "details",
                Value::from_json(details.clone()).unwrap_or(Value::Null),
            );
        }
    })
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        store_failure(err)
    }
}
