//! GraphQL transport endpoints.

use actix_web::{HttpResponse, get, post, web};
use async_graphql::http::GraphiQLSource;
use tracing::debug;

use crate::inbound::graphql::GraphSchema;

/// Execute one GraphQL request.
///
/// Validation and resolver failures are reported in the response's
/// `errors` array with HTTP 200.
#[post("/graphql")]
pub async fn graphql(
    schema: web::Data<GraphSchema>,
    request: web::Json<async_graphql::Request>,
) -> web::Json<async_graphql::Response> {
    let request = request.into_inner();
    debug!(
        operation = request.operation_name.as_deref().unwrap_or("<anonymous>"),
        "executing GraphQL request"
    );
    web::Json(schema.execute(request).await)
}

/// GraphiQL explorer pointed at `/graphql`.
#[get("/graphql")]
pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}
