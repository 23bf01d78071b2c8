//! Route registration.

pub mod auth;
pub mod health;
pub mod user;

use actix_web::web;

use mailauth_core::repositories::AccountRepository;
use mailauth_core::services::mail::Mailer;

/// Register every route of the API
///
/// Generic over the backing repository and mailer; the binary wires the
/// MySQL and HTTP-mail implementations, tests wire in-memory doubles.
pub fn configure<R, M>(cfg: &mut web::ServiceConfig)
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
{
    cfg.route("/health", web::get().to(health::health))
        .service(
            web::scope("/api/auth")
                .route("/register", web::post().to(auth::register::register::<R, M>))
                .route("/login", web::post().to(auth::login::login::<R, M>))
                .route("/logout", web::get().to(auth::logout::logout))
                .route(
                    "/send-verify-otp",
                    web::post().to(auth::send_verify_otp::send_verify_otp::<R, M>),
                )
                .route(
                    "/verify-account",
                    web::post().to(auth::verify_account::verify_account::<R, M>),
                )
                .route("/is-auth", web::get().to(auth::is_auth::is_auth))
                .route(
                    "/send-reset-otp",
                    web::post().to(auth::send_reset_otp::send_reset_otp::<R, M>),
                )
                .route(
                    "/reset-password",
                    web::post().to(auth::reset_password::reset_password::<R, M>),
                ),
        )
        .service(
            web::scope("/api/user")
                .route("/profile", web::get().to(user::profile::profile::<R, M>)),
        );
}
