//! Driving port for registration and login.
//!
//! Inbound adapters call this port to create accounts and check credentials
//! without depending on the persistence adapter, so handler tests can swap
//! in a mock.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Registration, User};

/// Domain use-case port for account handling.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create an account unless the email is already registered.
    ///
    /// Duplicates yield [`crate::domain::ErrorCode::InvalidRequest`] before
    /// the date of birth is read; an unreadable date is an internal error.
    async fn register(&self, registration: Registration) -> Result<User, Error>;

    /// Return the account whose email and password both match.
    ///
    /// Unknown or absent emails and wrong or absent passwords yield the same
    /// [`crate::domain::ErrorCode::Unauthorized`] error.
    async fn login(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}
