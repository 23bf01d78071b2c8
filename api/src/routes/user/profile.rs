//! Handler for GET /api/user/profile

use actix_web::{web, HttpResponse};
use serde::Serialize;

use mailauth_core::domain::value_objects::ProfileData;
use mailauth_core::repositories::AccountRepository;
use mailauth_core::services::mail::Mailer;
use mailauth_shared::types::ApiResponse;

use crate::handlers::error_response;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Payload returned for the authenticated account's profile
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_data: ProfileData,
}

/// Fetch the authenticated account's profile
pub async fn profile<R, M>(
    user: AuthenticatedUser,
    state: web::Data<AppState<R, M>>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
{
    match state.auth_service.profile(user.account_id).await {
        Ok(user_data) => {
            HttpResponse::Ok().json(ApiResponse::success(
                "User profile",
                ProfileResponse { user_data },
            ))
        }
        Err(e) => error_response(&e),
    }
}
