//! Handler for GET /api/auth/is-auth

use actix_web::HttpResponse;

use mailauth_shared::types::ApiResponse;

use crate::middleware::AuthenticatedUser;

/// Report whether the caller holds a valid session
///
/// The extractor does all the work: reaching the handler means the
/// session cookie verified.
pub async fn is_auth(_user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok("Authenticated"))
}
