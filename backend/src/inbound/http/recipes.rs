//! Recipe API handlers.
//!
//! ```text
//! GET  /recipes
//! POST /recipes      {"name":"Oatmeal","calories":350,"fatsValue":6.5,"carboValue":60,"protValue":12,"prepareTime":10}
//! PUT  /recipes/{id} {"calories":400}
//! ```
//!
//! Only the listed fields are read from request bodies; other keys are
//! ignored. Omitted create fields reach the store, which rejects them.

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Recipe, RecipeChanges, RecipeDraft, RecordId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, RecipeSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /recipes`. Every field is required by the store.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub fats_value: Option<f64>,
    pub carbo_value: Option<f64>,
    pub prot_value: Option<f64>,
    /// Minutes.
    pub prepare_time: Option<i32>,
}

impl From<CreateRecipeRequest> for RecipeDraft {
    fn from(value: CreateRecipeRequest) -> Self {
        Self {
            name: value.name,
            calories: value.calories,
            fats_value: value.fats_value,
            carbo_value: value.carbo_value,
            prot_value: value.prot_value,
            prepare_time: value.prepare_time,
        }
    }
}

/// Request body for `PUT /recipes/{id}`; omitted fields keep their value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub fats_value: Option<f64>,
    pub carbo_value: Option<f64>,
    pub prot_value: Option<f64>,
    pub prepare_time: Option<i32>,
}

impl From<UpdateRecipeRequest> for RecipeChanges {
    fn from(value: UpdateRecipeRequest) -> Self {
        Self {
            name: value.name,
            calories: value.calories,
            fats_value: value.fats_value,
            carbo_value: value.carbo_value,
            prot_value: value.prot_value,
            prepare_time: value.prepare_time,
        }
    }
}

/// List every recipe.
#[utoipa::path(
    get,
    path = "/recipes",
    responses(
        (status = 200, description = "All recipes", body = [RecipeSchema]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "listRecipes"
)]
#[get("/recipes")]
pub async fn list_recipes(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Recipe>>> {
    Ok(web::Json(state.recipes.list().await?))
}

/// Create a recipe.
#[utoipa::path(
    post,
    path = "/recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 200, description = "Created recipe", body = RecipeSchema),
        (status = 400, description = "Malformed JSON", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "createRecipe"
)]
#[post("/recipes")]
pub async fn create_recipe(
    state: web::Data<HttpState>,
    payload: web::Json<CreateRecipeRequest>,
) -> ApiResult<web::Json<Recipe>> {
    let recipe = state.recipes.create(payload.into_inner().into()).await?;
    Ok(web::Json(recipe))
}

/// Overwrite the submitted fields of a recipe.
#[utoipa::path(
    put,
    path = "/recipes/{id}",
    params(("id" = String, Path, description = "Recipe identifier")),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Updated recipe", body = RecipeSchema),
        (status = 400, description = "Malformed JSON", body = ErrorSchema),
        (status = 500, description = "Unknown id or store failure", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "updateRecipe"
)]
#[put("/recipes/{id}")]
pub async fn update_recipe(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateRecipeRequest>,
) -> ApiResult<web::Json<Recipe>> {
    let id = RecordId::parse_lenient(&path)?;
    let recipe = state
        .recipes
        .update(id, payload.into_inner().into())
        .await?;
    Ok(web::Json(recipe))
}
