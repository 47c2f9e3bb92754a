//! Pantry API handlers.
//!
//! ```text
//! GET    /pantry
//! POST   /pantry      {"name":"Rice","photo":null,"categories":"Grain","type":"Dry"}
//! PUT    /pantry/{id} {"categories":"Staple"}
//! DELETE /pantry/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::{PantryItem, PantryItemChanges, PantryItemDraft, RecordId};
use crate::inbound::http::schemas::{ErrorSchema, MessageSchema, PantryItemSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, MessageResponse};

/// Request body for `POST /pantry`.
///
/// `name`, `categories` and `type` are required by the store; an omitted
/// one fails the insert.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreatePantryItemRequest {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub categories: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

impl From<CreatePantryItemRequest> for PantryItemDraft {
    fn from(value: CreatePantryItemRequest) -> Self {
        Self {
            name: value.name,
            photo: value.photo,
            categories: value.categories,
            item_type: value.item_type,
        }
    }
}

/// Request body for `PUT /pantry/{id}`.
///
/// An explicit `"photo": null` clears the photo; omitting `photo` keeps it.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdatePantryItemRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub photo: Option<Option<String>>,
    pub categories: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

// Wraps any present value, including `null`, so absence stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl From<UpdatePantryItemRequest> for PantryItemChanges {
    fn from(value: UpdatePantryItemRequest) -> Self {
        Self {
            name: value.name,
            photo: value.photo,
            categories: value.categories,
            item_type: value.item_type,
        }
    }
}

/// List every pantry item.
#[utoipa::path(
    get,
    path = "/pantry",
    responses(
        (status = 200, description = "All pantry items", body = [PantryItemSchema]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["pantry"],
    operation_id = "listPantryItems"
)]
#[get("/pantry")]
pub async fn list_pantry_items(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PantryItem>>> {
    Ok(web::Json(state.pantry.list().await?))
}

/// Create a pantry item.
#[utoipa::path(
    post,
    path = "/pantry",
    request_body = CreatePantryItemRequest,
    responses(
        (status = 200, description = "Created pantry item", body = PantryItemSchema),
        (status = 400, description = "Malformed JSON", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["pantry"],
    operation_id = "createPantryItem"
)]
#[post("/pantry")]
pub async fn create_pantry_item(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePantryItemRequest>,
) -> ApiResult<web::Json<PantryItem>> {
    let item = state.pantry.create(payload.into_inner().into()).await?;
    Ok(web::Json(item))
}

/// Overwrite the submitted fields of a pantry item.
#[utoipa::path(
    put,
    path = "/pantry/{id}",
    params(("id" = String, Path, description = "Pantry item identifier")),
    request_body = UpdatePantryItemRequest,
    responses(
        (status = 200, description = "Updated pantry item", body = PantryItemSchema),
        (status = 400, description = "Malformed JSON", body = ErrorSchema),
        (status = 500, description = "Unknown id or store failure", body = ErrorSchema)
    ),
    tags = ["pantry"],
    operation_id = "updatePantryItem"
)]
#[put("/pantry/{id}")]
pub async fn update_pantry_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdatePantryItemRequest>,
) -> ApiResult<web::Json<PantryItem>> {
    let id = RecordId::parse_lenient(&path)?;
    let item = state.pantry.update(id, payload.into_inner().into()).await?;
    Ok(web::Json(item))
}

/// Delete a pantry item.
#[utoipa::path(
    delete,
    path = "/pantry/{id}",
    params(("id" = String, Path, description = "Pantry item identifier")),
    responses(
        (status = 200, description = "Pantry item removed", body = MessageSchema),
        (status = 500, description = "Unknown id or store failure", body = ErrorSchema)
    ),
    tags = ["pantry"],
    operation_id = "deletePantryItem"
)]
#[delete("/pantry/{id}")]
pub async fn delete_pantry_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = RecordId::parse_lenient(&path)?;
    state.pantry.delete(id).await?;
    Ok(web::Json(MessageResponse::new("Pantry item deleted")))
}
