//! Diesel table definitions for the document store.
//!
//! Must match `migrations/` exactly. Regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// User documents.
    users (id) {
        /// Store-assigned UUID v4.
        id -> Uuid,
        email -> Text,
        /// Insertion time; orders listings.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Book documents. `user_id` is the owner reference exactly as
    /// supplied, so it is text without a foreign key.
    books (id) {
        id -> Uuid,
        name -> Text,
        pages -> Int4,
        user_id -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Content documents.
    contents (id) {
        id -> Uuid,
        content_type_id -> Text,
        data -> Text,
        created_by_user_id -> Text,
        last_updated_by_user_id -> Text,
        /// Never written by the application.
        created_on -> Nullable<Timestamptz>,
        /// Never written by the application.
        updated_on -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, books, contents);
