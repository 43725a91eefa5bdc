//! HTTP route handlers.

use actix_files::Files;
use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::dto::search::ErrorResponse;
use crate::routes::api::api_search;
use crate::services::ServiceError;

pub mod api;

/// Renders a service error as its JSON body and status.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_GATEWAY);
    HttpResponse::build(status).json(ErrorResponse::from(err))
}

/// Keeps query-string extraction failures on the JSON error contract.
fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = ErrorResponse::new("Invalid query string").details(err.to_string());
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Registers the API scope and, behind it, the static frontend.
///
/// `Files` is mounted at `/` and must stay last so `/api/*` is matched first.
pub fn configure(cfg: &mut web::ServiceConfig, static_dir: &str) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(web::scope("/api").service(api_search))
        .service(Files::new("/", static_dir).index_file("index.html"));
}
