//! Handler for POST /api/auth/verify-account

use actix_web::{web, HttpResponse};
use validator::Validate;

use mailauth_core::repositories::AccountRepository;
use mailauth_core::services::mail::Mailer;
use mailauth_shared::types::ApiResponse;

use crate::dto::auth::VerifyAccountRequest;
use crate::handlers::error_response;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Confirm the authenticated account's email with an OTP
pub async fn verify_account<R, M>(
    user: AuthenticatedUser,
    state: web::Data<AppState<R, M>>,
    request: web::Json<VerifyAccountRequest>,
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
        .verify_account(user.account_id, &request.otp)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ok("Email verified successfully")),
        Err(e) => error_response(&e),
    }
}
