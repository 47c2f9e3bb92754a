//! HTTP inbound adapter exposing the REST endpoints.

pub mod accounts;
pub mod activities;
pub mod error;
pub mod health;
pub mod pantry;
pub mod recipes;
pub mod router;
pub mod schemas;
pub mod state;

use serde::{Deserialize, Serialize};

pub use error::ApiResult;

/// `{"message": ...}` confirmation body used by delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
