//! MailAuth API server binary.

use actix_web::{web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use mailauth_api::{middleware, routes, state::AppState};
use mailauth_core::services::auth::{AuthService, AuthServiceConfig};
use mailauth_core::services::token::TokenService;
use mailauth_infra::database::{DatabasePool, MySqlAccountRepository};
use mailauth_infra::mail::{create_mailer, DynMailer};
use mailauth_shared::config::AppConfig;
use mailauth_shared::types::ApiResponse;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!("Starting MailAuth API server ({})", config.environment);

    if config.environment.is_production() && config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; sessions are signed with the default development secret");
    }

    let pool = DatabasePool::new(&config.database).await?;
    pool.health_check().await?;

    let accounts = Arc::new(MySqlAccountRepository::new(pool.get_pool().clone()));
    let mailer = Arc::new(create_mailer(&config.mail));
    let tokens = Arc::new(TokenService::new(&config.auth.jwt));

    let service_config = AuthServiceConfig::default().with_client_url(
        std::env::var("CLIENT_URL").unwrap_or_else(|_| String::from("http://localhost:3000")),
    );

    let auth_service = Arc::new(AuthService::new(
        accounts,
        mailer,
        tokens.clone(),
        service_config,
    ));

    let state = web::Data::new(AppState { auth_service });
    let tokens_data = web::Data::from(tokens);
    let session_data = web::Data::new(config.auth.session.clone());
    let environment = config.environment;

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::cors::create_cors(environment))
            .app_data(state.clone())
            .app_data(tokens_data.clone())
            .app_data(session_data.clone())
            .configure(routes::configure::<MySqlAccountRepository, DynMailer>)
            .default_service(web::route().to(not_found))
    })
    .bind(&bind_address)?;

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.run().await?;
    Ok(())
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error("Not found"))
}
