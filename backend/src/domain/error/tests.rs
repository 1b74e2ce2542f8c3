//! Tests for the domain error payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn internal_error() -> Error {
    Error::internal("connection string leaked: postgres://secret")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "secret": "x" }))
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest, "invalid_request")]
#[case(
    Error::service_unavailable("down"),
    ErrorCode::ServiceUnavailable,
    "service_unavailable"
)]
#[case(Error::internal("boom"), ErrorCode::InternalError, "internal_error")]
fn constructors_set_codes(#[case] error: Error, #[case] code: ErrorCode, #[case] wire: &str) {
    assert_eq!(error.code(), code);
    assert_eq!(error.code().as_str(), wire);
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn trace_id_is_captured_in_scope() {
    let trace_id = TraceId::generate();
    let error = TraceId::scope(trace_id, async { Error::service_unavailable("down") }).await;
    assert_eq!(error.trace_id(), Some(trace_id.to_string().as_str()));
}

#[rstest]
fn redaction_hides_internal_message_and_details(internal_error: Error) {
    let redacted = internal_error.redacted();
    assert_eq!(redacted.message(), "Internal server error");
    assert!(redacted.details().is_none());
    assert_eq!(redacted.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn redaction_keeps_client_errors_intact() {
    let error = Error::invalid_request("bad id").with_details(json!({ "field": "id" }));
    assert_eq!(error.redacted(), error);
}

#[rstest]
fn serialises_camel_case_without_empty_fields() {
    let error = Error::service_unavailable("down").with_trace_id(TRACE_ID);
    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(
        value,
        json!({ "code": "service_unavailable", "message": "down", "traceId": TRACE_ID })
    );
}
