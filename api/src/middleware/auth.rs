//! Session authentication extractor.
//!
//! Protected routes take an [`AuthenticatedUser`] parameter; extraction
//! reads the session cookie, verifies the token, and rejects the request
//! with a 401 envelope before the handler runs.

use actix_web::{
    dev::Payload, error::InternalError, web, Error, FromRequest, HttpRequest, HttpResponse,
};
use std::future::{ready, Ready};
use uuid::Uuid;

use mailauth_core::services::token::TokenService;
use mailauth_shared::config::SessionConfig;
use mailauth_shared::types::ApiResponse;

/// Identity asserted by a valid session cookie
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    /// Account ID from the token's subject claim
    pub account_id: Uuid,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, Error> {
    let cookie_name = req
        .app_data::<web::Data<SessionConfig>>()
        .map(|config| config.cookie_name.clone())
        .unwrap_or_else(|| String::from("token"));

    let cookie = req
        .cookie(&cookie_name)
        .ok_or_else(|| unauthorized("Not authorized, token missing"))?;

    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| unauthorized("Not authorized, invalid or expired token"))?;

    let account_id = tokens
        .verify_identity(cookie.value())
        .map_err(|e| unauthorized(&e.to_string()))?;

    Ok(AuthenticatedUser { account_id })
}

fn unauthorized(message: &str) -> Error {
    let response = HttpResponse::Unauthorized().json(ApiResponse::error(message));
    InternalError::from_response(message.to_string(), response).into()
}
