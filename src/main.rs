mod model;
mod server;

use axum::http::HeaderValue;
use chrono::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    scheduler,
    service::{auth::token::TokenService, mail::Mailer},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    startup::seed_admin(&db, &config).await?;

    // Kept alive for the lifetime of the server.
    let _scheduler = scheduler::start_scheduler(
        db.clone(),
        http_client.clone(),
        config.keep_alive_url.clone(),
    )
    .await?;

    if config.mail.is_none() {
        tracing::warn!("MAIL_API_URL, MAIL_API_KEY or MAIL_FROM not set, OTPs will only be logged");
    }

    let state = AppState::new(
        db,
        http_client.clone(),
        TokenService::new(&config.jwt_secret, Duration::hours(config.jwt_ttl_hours)),
        Mailer::new(http_client, config.mail.clone()),
        Duration::minutes(config.otp_ttl_minutes),
        config.nominatim_url.clone(),
    );

    let router = server::router::router()
        .with_state(state)
        .layer(cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {} ({})", config.bind_address, config.app_url);

    axum::serve(listener, router).await?;

    Ok(())
}

/// Allows the configured frontend origin, or any origin when none is set.
fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match &config.cors_origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
                name: "CORS_ORIGIN".to_string(),
                value: origin.clone(),
            })?;
            Ok(layer.allow_origin(origin))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}
