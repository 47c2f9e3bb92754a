//! Domain primitives, ports and services.
//!
//! Purpose: define the record types served by the API, the ports persistence
//! adapters implement, and the account use-cases. Nothing here depends on
//! actix-web or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure with a stable category.
//! - TraceId: per-request correlation identifier held in task-local storage.
//! - RecordId: store-assigned integer identifier shared by every record.
//! - Activity, User, Recipe, PantryItem and their draft/change types.
//! - MissingColumn: a required column left unset on create.
//! - AccountServiceImpl: registration and login over a `UserRepository`.

pub mod account_service;
pub mod activity;
pub mod error;
pub mod missing_column;
pub mod pantry;
pub mod ports;
pub mod recipe;
pub mod record_id;
pub mod trace_id;
pub mod user;

pub use self::account_service::AccountServiceImpl;
pub use self::activity::{Activity, ActivityFields, ActivityFieldsError};
pub use self::error::{Error, ErrorCode};
pub use self::missing_column::MissingColumn;
pub use self::pantry::{PantryItem, PantryItemChanges, PantryItemDraft};
pub use self::recipe::{Recipe, RecipeChanges, RecipeDraft};
pub use self::record_id::{InvalidRecordId, RecordId};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    DateOfBirthError, LoginCredentials, NewUser, Registration, User, parse_date_of_birth,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("Invalid credentials"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
