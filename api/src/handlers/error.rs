//! Mapping from domain errors to HTTP responses.

use actix_web::HttpResponse;
use tracing::error;

use mailauth_core::errors::DomainError;
use mailauth_shared::types::ApiResponse;

/// Convert a domain error into the uniform error envelope
///
/// Internal details never reach the client: the body carries a generic
/// message while the cause goes to the log.
pub fn error_response(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::Validation { .. } | DomainError::OtpExpired | DomainError::OtpInvalid => {
            HttpResponse::BadRequest().json(ApiResponse::error(err.to_string()))
        }
        DomainError::Unauthorized { .. } => {
            HttpResponse::Unauthorized().json(ApiResponse::error(err.to_string()))
        }
        DomainError::NotFound { .. } => {
            HttpResponse::NotFound().json(ApiResponse::error(err.to_string()))
        }
        DomainError::Conflict { .. } => {
            HttpResponse::Conflict().json(ApiResponse::error(err.to_string()))
        }
        DomainError::Internal { message } => {
            error!("internal error: {}", message);
            HttpResponse::InternalServerError()
                .json(ApiResponse::error("Internal server error"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (DomainError::validation("All inputs are required"), 400),
            (DomainError::OtpExpired, 400),
            (DomainError::OtpInvalid, 400),
            (DomainError::unauthorized("Invalid credentials"), 401),
            (DomainError::not_found("User"), 404),
            (DomainError::conflict("User already exists"), 409),
            (DomainError::internal("db down"), 500),
        ];
        for (err, status) in cases {
            assert_eq!(error_response(&err).status().as_u16(), status);
        }
    }
}
