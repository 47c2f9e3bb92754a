//! Activity API handlers.
//!
//! ```text
//! GET    /activities
//! POST   /activities      {"name":"Run","minutes":30}
//! PUT    /activities/{id} {"minutes":45}
//! DELETE /activities/{id}
//! ```
//!
//! Bodies are stored as submitted; no field whitelist applies.

use actix_web::{delete, get, post, put, web};
use serde_json::Value;

use crate::domain::{Activity, ActivityFields, RecordId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::MessageResponse;
use crate::inbound::http::schemas::{ActivitySchema, ErrorSchema, MessageSchema};
use crate::inbound::http::state::HttpState;

/// List every activity.
#[utoipa::path(
    get,
    path = "/activities",
    responses(
        (status = 200, description = "All activities", body = [ActivitySchema]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["activities"],
    operation_id = "listActivities"
)]
#[get("/activities")]
pub async fn list_activities(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Activity>>> {
    let activities = state.activities.list().await?;
    Ok(web::Json(activities))
}

/// Create an activity from the whole request body.
#[utoipa::path(
    post,
    path = "/activities",
    request_body = ActivitySchema,
    responses(
        (status = 200, description = "Created activity", body = ActivitySchema),
        (status = 400, description = "Malformed JSON", body = ErrorSchema),
        (status = 500, description = "Store failure or non-object body", body = ErrorSchema)
    ),
    tags = ["activities"],
    operation_id = "createActivity"
)]
#[post("/activities")]
pub async fn create_activity(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<Activity>> {
    let fields = ActivityFields::try_from_value(payload.into_inner())?;
    let activity = state.activities.create(fields).await?;
    Ok(web::Json(activity))
}

/// Overwrite the submitted keys of an activity.
#[utoipa::path(
    put,
    path = "/activities/{id}",
    params(("id" = String, Path, description = "Activity identifier")),
    request_body = ActivitySchema,
    responses(
        (status = 200, description = "Updated activity", body = ActivitySchema),
        (status = 400, description = "Malformed JSON", body = ErrorSchema),
        (status = 500, description = "Unknown id or store failure", body = ErrorSchema)
    ),
    tags = ["activities"],
    operation_id = "updateActivity"
)]
#[put("/activities/{id}")]
pub async fn update_activity(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<Activity>> {
    let id = RecordId::parse_lenient(&path)?;
    let patch = ActivityFields::try_from_value(payload.into_inner())?;
    let activity = state.activities.update(id, patch).await?;
    Ok(web::Json(activity))
}

/// Delete an activity.
#[utoipa::path(
    delete,
    path = "/activities/{id}",
    params(("id" = String, Path, description = "Activity identifier")),
    responses(
        (status = 200, description = "Activity removed", body = MessageSchema),
        (status = 500, description = "Unknown id or store failure", body = ErrorSchema)
    ),
    tags = ["activities"],
    operation_id = "deleteActivity"
)]
#[delete("/activities/{id}")]
pub async fn delete_activity(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = RecordId::parse_lenient(&path)?;
    state.activities.delete(id).await?;
    Ok(web::Json(MessageResponse::new("Activity deleted")))
}
