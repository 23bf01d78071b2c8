//! Handler for POST /api/auth/reset-password

use actix_web::{web, HttpResponse};
use validator::Validate;

use mailauth_core::repositories::AccountRepository;
use mailauth_core::services::mail::Mailer;
use mailauth_shared::types::ApiResponse;

use crate::dto::auth::ResetPasswordRequest;
use crate::handlers::error_response;
use crate::state::AppState;

/// Complete a password reset with the delivered OTP
///
/// Unauthenticated: the flow exists for people locked out of their
/// account, so possession of the OTP is the credential.
pub async fn reset_password<R, M>(
    state: web::Data<AppState<R, M>>,
    request: web::Json<ResetPasswordRequest>,
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
        .reset_password(&request.email, &request.otp, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ok("Password reset successful")),
        Err(e) => error_response(&e),
    }
}
