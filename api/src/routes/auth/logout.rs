//! Handler for GET /api/auth/logout

use actix_web::{web, HttpResponse};

use mailauth_shared::config::SessionConfig;
use mailauth_shared::types::ApiResponse;

/// Close the session by expiring the cookie
///
/// Tokens are stateless, so logout only removes the cookie; an already
/// captured token stays valid until its expiry. No authentication is
/// required: clearing an absent cookie is a no-op.
pub async fn logout(session: web::Data<SessionConfig>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(crate::session::clear_session_cookie(&session))
        .json(ApiResponse::ok("Logout successful"))
}
