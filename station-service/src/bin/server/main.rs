use std::sync::Arc;

use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use station_service::config::Config;
use station_service::domain::station::service::StationService;
use station_service::domain::user::service::UserService;
use station_service::inbound::http::router::create_router;
use station_service::outbound::repositories::PostgresStationRepository;
use station_service::outbound::repositories::PostgresUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "station_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "station-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Refuse to run unauthenticated or unconnected
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Configuration invalid; set JWT_SECRET and DATABASE_URL");
            return Err(e.into());
        }
    };

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let station_repository = Arc::new(PostgresStationRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(user_repository));
    let station_service = Arc::new(StationService::new(station_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        user_service,
        station_service,
        authenticator,
        config.jwt.expiration_hours,
    );

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
