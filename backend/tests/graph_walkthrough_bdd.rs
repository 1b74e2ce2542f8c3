//! Behavioural tests walking the graph through the composed schema.

use std::sync::Arc;

use bookgraph::inbound::graphql::{GraphSchema, GraphState, build_schema};
use bookgraph::outbound::memory::InMemoryDocumentStore;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};
use tokio::runtime::Runtime;

#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

#[derive(Default, ScenarioState)]
struct GraphWorld {
    runtime: Slot<RuntimeHandle>,
    schema: Slot<GraphSchema>,
    user_id: Slot<String>,
    last_response: Slot<Value>,
}

impl GraphWorld {
    fn setup(&self) {
        let runtime = Runtime::new().expect("create runtime");
        self.runtime.set(RuntimeHandle(Arc::new(runtime)));
        self.schema.set(build_schema(GraphState::from_store(Arc::new(
            InMemoryDocumentStore::new(),
        ))));
    }

    /// Run `query` and keep the serialised response.
    fn execute(&self, query: String) -> Value {
        let RuntimeHandle(runtime) = self.runtime.get().expect("runtime is set");
        let schema = self.schema.get().expect("schema is set");
        let response = runtime.block_on(schema.execute(query));
        let body = serde_json::to_value(&response).expect("response serialises");
        self.last_response.set(body.clone());
        body
    }

    fn response(&self) -> Value {
        self.last_response.get().expect("a request was executed")
    }
}

#[fixture]
fn world() -> GraphWorld {
    GraphWorld::default()
}

#[given("an empty document store")]
fn an_empty_document_store(world: &GraphWorld) {
    world.setup();
}

#[when("a client adds the user a@x.com")]
fn a_client_adds_the_user(world: &GraphWorld) {
    let body = world.execute(r#"mutation { addUser(email: "a@x.com") { id email } }"#.to_owned());
    let id = body["data"]["addUser"]["id"]
        .as_str()
        .expect("user id in response")
        .to_owned();
    world.user_id.set(id);
}

#[when("the client adds the book Go with 300 pages for that user")]
fn the_client_adds_the_book_go(world: &GraphWorld) {
    let owner = world.user_id.get().expect("user was added");
    let body = world.execute(format!(
        r#"mutation {{ addBook(name: "Go", pages: 300, userId: "{owner}") {{ name pages }} }}"#
    ));
    assert_eq!(body["data"]["addBook"], json!({ "name": "Go", "pages": 300 }));
}

#[when("the client queries that user with their books")]
fn the_client_queries_that_user(world: &GraphWorld) {
    let id = world.user_id.get().expect("user was added");
    world.execute(format!(
        r#"{{ user(id: "{id}") {{ email book {{ name }} }} }}"#
    ));
}

#[when("a client adds a user without an email")]
fn a_client_adds_a_user_without_an_email(world: &GraphWorld) {
    world.execute("mutation { addUser { id } }".to_owned());
}

#[then("the response lists the email a@x.com and the book Go")]
fn the_response_lists_the_book(world: &GraphWorld) {
    assert_eq!(
        world.response(),
        json!({ "data": { "user": { "email": "a@x.com", "book": [{ "name": "Go" }] } } })
    );
}

#[then("the response lists the email a@x.com and no books")]
fn the_response_lists_no_books(world: &GraphWorld) {
    assert_eq!(
        world.response(),
        json!({ "data": { "user": { "email": "a@x.com", "book": [] } } })
    );
}

#[then("the request is rejected with a validation error")]
fn the_request_is_rejected(world: &GraphWorld) {
    let response = world.response();
    assert!(response.get("data").is_none_or(Value::is_null));
    let errors = response["errors"].as_array().expect("errors array");
    assert!(!errors.is_empty());
}

#[then("the store holds no users")]
fn the_store_holds_no_users(world: &GraphWorld) {
    let body = world.execute("{ users { id } }".to_owned());
    assert_eq!(body["data"], json!({ "users": [] }));
}

#[scenario(
    path = "tests/features/graph_walkthrough.feature",
    name = "A user's books are resolved through the owner reference"
)]
fn a_users_books_are_resolved_through_the_owner_reference(world: GraphWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/graph_walkthrough.feature",
    name = "A user without books has an empty book list"
)]
fn a_user_without_books_has_an_empty_book_list(world: GraphWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/graph_walkthrough.feature",
    name = "Adding a user without an email is rejected"
)]
fn adding_a_user_without_an_email_is_rejected(world: GraphWorld) {
    drop(world);
}
