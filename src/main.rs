use edrs_portal::{
    AppState,
    config::{AppConfig, Env},
    create_router,
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Loads configuration, initialises logging, and serves the portal.
#[tokio::main]
async fn main() {
    // 1. Configuration (fail-fast in production).
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Log filter: RUST_LOG wins, otherwise development defaults.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "edrs_portal=debug,tower_http=info,axum=trace".into());

    // 3. Pretty logs locally, JSON for log aggregation in production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Portal starting in {:?} mode", config.env);

    let bind_addr = config.bind_addr.clone();
    let app = create_router(AppState { config });

    let listener = TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|err| panic!("FATAL: failed to bind {bind_addr}: {err}"));

    tracing::info!("Listening on {bind_addr}");
    tracing::info!("API documentation (Swagger UI) at /swagger-ui");

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("server terminated: {err}");
    }
}
