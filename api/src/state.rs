//! Shared application state for HTTP handlers.

use std::sync::Arc;

use mailauth_core::repositories::AccountRepository;
use mailauth_core::services::auth::AuthService;
use mailauth_core::services::mail::Mailer;

/// Application state that holds shared services
///
/// Generic over the repository and mailer so tests can wire in-memory
/// doubles behind the same routes.
pub struct AppState<R, M>
where
    R: AccountRepository,
    M: Mailer,
{
    pub auth_service: Arc<AuthService<R, M>>,
}
