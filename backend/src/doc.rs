//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every record endpoint, the account endpoints and the
//! health probes. Domain types are described through the wrappers in
//! [`crate::inbound::http::schemas`]. Swagger UI serves the document at
//! `/docs` in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::accounts::{
    AuthenticatedUser, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    RegisteredUser,
};
use crate::inbound::http::pantry::{CreatePantryItemRequest, UpdatePantryItemRequest};
use crate::inbound::http::recipes::{CreateRecipeRequest, UpdateRecipeRequest};
use crate::inbound::http::schemas::{
    ActivitySchema, ErrorSchema, MessageSchema, PantryItemSchema, RecipeSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pantry backend API",
        description = "CRUD endpoints for activities, recipes and pantry items, plus account registration and login."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::activities::list_activities,
        crate::inbound::http::activities::create_activity,
        crate::inbound::http::activities::update_activity,
        crate::inbound::http::activities::delete_activity,
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::login,
        crate::inbound::http::recipes::list_recipes,
        crate::inbound::http::recipes::create_recipe,
        crate::inbound::http::recipes::update_recipe,
        crate::inbound::http::pantry::list_pantry_items,
        crate::inbound::http::pantry::create_pantry_item,
        crate::inbound::http::pantry::update_pantry_item,
        crate::inbound::http::pantry::delete_pantry_item,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ActivitySchema,
        RecipeSchema,
        PantryItemSchema,
        ErrorSchema,
        MessageSchema,
        RegisterRequest,
        RegisterResponse,
        RegisteredUser,
        LoginRequest,
        LoginResponse,
        AuthenticatedUser,
        CreateRecipeRequest,
        UpdateRecipeRequest,
        CreatePantryItemRequest,
        UpdatePantryItemRequest,
    )),
    tags(
        (name = "activities", description = "Free-form activity records"),
        (name = "accounts", description = "Registration and login"),
        (name = "recipes", description = "Recipes with nutrition values"),
        (name = "pantry", description = "Pantry items"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
