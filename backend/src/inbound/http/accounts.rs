//! Registration and login handlers.
//!
//! ```text
//! POST /register {"name":"Ada","email":"ada@example.com","password":"s3cret"}
//! POST /login    {"email":"ada@example.com","password":"s3cret"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{LoginCredentials, Registration, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Registration request body for `POST /register`.
///
/// `name`, `email` and `password` are required by the store; an omitted one
/// fails the insert.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub photo: Option<String>,
    /// A calendar date such as `1990-05-17`, `05/17/1990` or an RFC 3339
    /// timestamp.
    #[schema(example = "1990-05-17")]
    pub date_of_birth: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(value: RegisterRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            password: value.password,
            photo: value.photo,
            date_of_birth: value.date_of_birth,
        }
    }
}

/// Login request body for `POST /login`. A missing field never matches.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Account summary returned after registration.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisteredUser {
    pub id: i32,
    pub email: String,
}

/// Account summary returned after login.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub email: String,
    pub name: String,
}

/// `201` body of `POST /register`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user: RegisteredUser,
}

/// `200` body of `POST /login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: AuthenticatedUser,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            email: user.email,
        }
    }
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            email: user.email,
            name: user.name,
        }
    }
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Email already registered or malformed JSON", body = ErrorSchema),
        (status = 500, description = "Store failure, missing field or unreadable dateOfBirth", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let user = state.accounts.register(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "User registered successfully".to_owned(),
        user: user.into(),
    }))
}

/// Check an email and password pair.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 400, description = "Malformed JSON", body = ErrorSchema),
        (status = 401, description = "Unknown, wrong or missing email or password", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let LoginRequest { email, password } = payload.into_inner();
    let user = state
        .accounts
        .login(&LoginCredentials::from_parts(email, password))
        .await?;
    Ok(web::Json(LoginResponse {
        message: "Login successful".to_owned(),
        user: user.into(),
    }))
}
