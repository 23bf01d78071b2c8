//! Handler for POST /api/auth/send-reset-otp

use actix_web::{web, HttpResponse};
use validator::Validate;

use mailauth_core::repositories::AccountRepository;
use mailauth_core::services::mail::Mailer;
use mailauth_shared::types::ApiResponse;

use crate::dto::auth::SendResetOtpRequest;
use crate::handlers::error_response;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Send a password-reset OTP to the given email
///
/// Requires a live session, and the target email comes from the body
/// rather than the session identity.
pub async fn send_reset_otp<R, M>(
    _user: AuthenticatedUser,
    state: web::Data<AppState<R, M>>,
    request: web::Json<SendResetOtpRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(ApiResponse::error("All inputs are required"));
    }

    match state.auth_service.send_reset_otp(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ok("OTP sent successfully")),
        Err(e) => error_response(&e),
    }
}
