//! Pantry backend library.
//!
//! Hexagonal layout: [`domain`] holds record types, ports and the account
//! service; [`outbound`] implements the ports over PostgreSQL; [`inbound`]
//! exposes them over HTTP.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
