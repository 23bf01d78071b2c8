//! Handler for POST /api/auth/register

use actix_web::{web, HttpResponse};
use serde::Serialize;
use validator::Validate;

use mailauth_core::domain::value_objects::AccountSummary;
use mailauth_core::repositories::AccountRepository;
use mailauth_core::services::mail::Mailer;
use mailauth_shared::config::SessionConfig;
use mailauth_shared::types::ApiResponse;
use mailauth_shared::utils::validation::is_valid_email;

use crate::dto::auth::RegisterRequest;
use crate::handlers::error_response;
use crate::session::session_cookie;
use crate::state::AppState;

/// Payload returned on successful registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: AccountSummary,
}

/// Create an account and open a session
///
/// The session token goes out in the cookie, not the body.
pub async fn register<R, M>(
    state: web::Data<AppState<R, M>>,
    session: web::Data<SessionConfig>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(ApiResponse::error("All inputs are required"));
    }
    if !is_valid_email(&request.email) {
        return HttpResponse::BadRequest().json(ApiResponse::error("Invalid email format"));
    }

    match state
        .auth_service
        .register(&request.name, &request.email, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Created()
            .cookie(session_cookie(&session, response.token))
            .json(ApiResponse::success(
                "User registered successfully",
                RegisterResponse {
                    user: response.account,
                },
            )),
        Err(e) => error_response(&e),
    }
}
