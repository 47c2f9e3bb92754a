//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of utoipa derives; these wrappers mirror their
//! wire shape for documentation only.

use utoipa::ToSchema;

/// Error response body.
#[derive(ToSchema)]
#[schema(as = ErrorResponse)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    #[schema(example = "Invalid credentials")]
    error: String,
}

/// Confirmation returned by delete endpoints.
#[derive(ToSchema)]
#[schema(as = MessageResponse)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct MessageSchema {
    #[schema(example = "Activity deleted")]
    message: String,
}

/// OpenAPI schema for [`crate::domain::Activity`].
///
/// Activities are free-form: besides `id`, every key submitted by the
/// client is stored and returned as-is at the top level.
#[derive(ToSchema)]
#[schema(as = crate::domain::Activity)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ActivitySchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i32,
    /// Example client-defined field.
    #[schema(value_type = Object, example = "Morning run")]
    name: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Recipe`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Recipe)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct RecipeSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Oatmeal")]
    name: String,
    #[schema(example = 350.0)]
    calories: f64,
    fats_value: f64,
    carbo_value: f64,
    prot_value: f64,
    /// Minutes.
    #[schema(example = 10)]
    prepare_time: i32,
}

/// OpenAPI schema for [`crate::domain::PantryItem`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PantryItem)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct PantryItemSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Rice")]
    name: String,
    photo: Option<String>,
    #[schema(example = "Grain")]
    categories: String,
    #[schema(rename = "type", example = "Dry")]
    item_type: String,
}
