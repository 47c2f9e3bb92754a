//! HTTP adapter mapping for domain errors.
//!
//! Every failure is rendered as `{"error": "<message>"}` with the status
//! chosen by the error code. Messages are not redacted.

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(trace_id = self.trace_id(), message = self.message(), "request failed");
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorBody {
            error: self.message(),
        })
    }
}

/// `JsonConfig` error handler.
///
/// Bodies that are not JSON at all (syntax errors, truncated input, wrong
/// content type) are rejected with 400. Well-formed JSON whose values have
/// the wrong shape fails like any other store input, with 500.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::error::json_error_handler;
///
/// let app = App::new().app_data(web::JsonConfig::default().error_handler(json_error_handler));
/// ```
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejected request body");
    match &err {
        JsonPayloadError::Deserialize(source) if source.is_data() => {
            Error::internal(err.to_string()).into()
        }
        _ => Error::invalid_request(err.to_string()).into(),
    }
}

/// Fallback for requests that match no route.
pub async fn unmatched_route(req: HttpRequest) -> HttpResponse {
    let message = format!("Cannot {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(ErrorBody { error: &message })
}
