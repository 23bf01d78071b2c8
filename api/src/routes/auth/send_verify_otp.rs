//! Handler for POST /api/auth/send-verify-otp

use actix_web::{web, HttpResponse};

use mailauth_core::repositories::AccountRepository;
use mailauth_core::services::mail::Mailer;
use mailauth_shared::types::ApiResponse;

use crate::handlers::error_response;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Send a verification OTP to the authenticated account's email
pub async fn send_verify_otp<R, M>(
    user: AuthenticatedUser,
    state: web::Data<AppState<R, M>>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
{
    match state.auth_service.send_verify_otp(user.account_id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ok("OTP sent successfully")),
        Err(e) => error_response(&e),
    }
}
