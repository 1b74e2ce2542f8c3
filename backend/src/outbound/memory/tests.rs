//! Behaviour of the in-memory document store.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::UserReference;

#[fixture]
fn store() -> InMemoryDocumentStore {
    InMemoryDocumentStore::new()
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_owned(),
    }
}

fn new_book(name: &str, owner: UserReference) -> NewBook {
    NewBook {
        name: name.to_owned(),
        pages: 120,
        user_id: owner,
    }
}

#[rstest]
#[tokio::test]
async fn created_users_are_found_by_id(store: InMemoryDocumentStore) {
    let created = UserRepository::create(&store, new_user("a@x.com"))
        .await
        .expect("create user");

    let found = UserRepository::find_by_id(&store, created.id())
        .await
        .expect("lookup user");

    assert_eq!(found, Some(created));
}

#[rstest]
#[tokio::test]
async fn unknown_ids_are_absent_not_errors(store: InMemoryDocumentStore) {
    let found = BookRepository::find_by_id(&store, &BookId::random())
        .await
        .expect("lookup book");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn empty_collections_list_nothing(store: InMemoryDocumentStore) {
    let books = BookRepository::find(&store, &BookFilter::all())
        .await
        .expect("list books");
    assert!(books.is_empty());
}

#[rstest]
#[tokio::test]
async fn listing_preserves_creation_order(store: InMemoryDocumentStore) {
    for email in ["first@x.com", "second@x.com", "third@x.com"] {
        UserRepository::create(&store, new_user(email))
            .await
            .expect("create user");
    }

    let emails: Vec<String> = UserRepository::find(&store, &UserFilter::all())
        .await
        .expect("list users")
        .iter()
        .map(|user| user.email().to_owned())
        .collect();

    assert_eq!(emails, ["first@x.com", "second@x.com", "third@x.com"]);
}

#[rstest]
#[tokio::test]
async fn book_filter_selects_by_owner(store: InMemoryDocumentStore) {
    let owner = UserId::random();
    BookRepository::create(&store, new_book("Go", owner.into()))
        .await
        .expect("create owned book");
    BookRepository::create(&store, new_book("Rust", UserId::random().into()))
        .await
        .expect("create other book");

    let owned = BookRepository::find(&store, &BookFilter::owned_by(&owner))
        .await
        .expect("list owned books");

    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].name(), "Go");
}

#[rstest]
#[tokio::test]
async fn books_accept_references_to_missing_users(store: InMemoryDocumentStore) {
    let book = BookRepository::create(&store, new_book("Orphan", UserReference::new("nobody")))
        .await
        .expect("create book without owner");
    assert_eq!(book.user_id().as_str(), "nobody");
}

#[rstest]
#[tokio::test]
async fn content_is_stored_without_timestamps(store: InMemoryDocumentStore) {
    let creator = UserId::random();
    let created = ContentRepository::create(
        &store,
        NewContent {
            content_type_id: "article".to_owned(),
            data: "hello".to_owned(),
            created_by_user_id: creator.into(),
            last_updated_by_user_id: creator.into(),
        },
    )
    .await
    .expect("create content");

    let listed = ContentRepository::find(
        &store,
        &ContentFilter {
            content_type_id: Some("article".to_owned()),
            created_by_user_id: Some(creator.into()),
        },
    )
    .await
    .expect("list content");

    assert_eq!(listed, vec![created.clone()]);
    assert!(created.created_on().is_none());
    assert!(created.updated_on().is_none());
}

#[rstest]
#[tokio::test]
async fn poisoned_collections_surface_store_errors() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let poisoner = Arc::clone(&store);
    let outcome = std::thread::spawn(move || {
        let _guard = poisoner.users.documents.write().expect("acquire lock");
        panic!("poison the users collection");
    })
    .join();
    assert!(outcome.is_err());

    let read = UserRepository::find_by_id(store.as_ref(), &UserId::random()).await;
    assert_eq!(
        read,
        Err(StoreError::read(USERS_COLLECTION, "collection lock poisoned"))
    );

    let write = UserRepository::create(store.as_ref(), new_user("a@x.com")).await;
    assert!(matches!(write, Err(StoreError::Write { .. })));
}
