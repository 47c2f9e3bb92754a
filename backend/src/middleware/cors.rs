//! Cross-origin policy applied to every route.

use actix_cors::Cors;

/// Accept any origin, method and header, answering preflight requests.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::middleware::cors::permissive_cors;
///
/// let app = App::new().wrap(permissive_cors());
/// ```
#[must_use]
pub fn permissive_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .expose_any_header()
}
