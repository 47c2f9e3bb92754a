//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly; `diesel print-schema`
//! regenerates them from a migrated database.

diesel::table! {
    /// Free-form activity documents.
    activities (id) {
        id -> Int4,
        /// JSON object holding every client-submitted field except `id`.
        data -> Jsonb,
    }
}

diesel::table! {
    /// Registered accounts. `email` carries a unique index.
    users (id) {
        id -> Int4,
        name -> Text,
        email -> Text,
        /// Stored exactly as submitted.
        password -> Text,
        photo -> Nullable<Text>,
        date_of_birth -> Nullable<Date>,
    }
}

diesel::table! {
    recipes (id) {
        id -> Int4,
        name -> Text,
        calories -> Float8,
        fats_value -> Float8,
        carbo_value -> Float8,
        prot_value -> Float8,
        /// Minutes.
        prepare_time -> Int4,
    }
}

diesel::table! {
    pantry_items (id) {
        id -> Int4,
        name -> Text,
        photo -> Nullable<Text>,
        categories -> Text,
        #[sql_name = "type"]
        item_type -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(activities, users, recipes, pantry_items);
