//! Handler for POST /api/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use mailauth_core::repositories::AccountRepository;
use mailauth_core::services::mail::Mailer;
use mailauth_shared::config::SessionConfig;
use mailauth_shared::types::ApiResponse;

use crate::dto::auth::LoginRequest;
use crate::handlers::error_response;
use crate::session::session_cookie;
use crate::state::AppState;

/// Authenticate and open a session
pub async fn login<R, M>(
    state: web::Data<AppState<R, M>>,
    session: web::Data<SessionConfig>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(ApiResponse::error("All inputs are required"));
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(token) => HttpResponse::Ok()
            .cookie(session_cookie(&session, token))
            .json(ApiResponse::ok("User logged in successfully")),
        Err(e) => error_response(&e),
    }
}
