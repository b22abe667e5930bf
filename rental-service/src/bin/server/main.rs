use std::sync::Arc;

use auth::Authenticator;
use rental_service::config::Config;
use rental_service::domain::car::ports::CarServicePort;
use rental_service::domain::car::service::CarService;
use rental_service::domain::user::ports::AuthServicePort;
use rental_service::domain::user::service::AuthService;
use rental_service::inbound::http::router::create_router;
use rental_service::outbound::repositories::InMemoryCarRepository;
use rental_service::outbound::repositories::InMemoryRoleRepository;
use rental_service::outbound::repositories::InMemoryUserRepository;
use rental_service::outbound::repositories::PostgresCarRepository;
use rental_service::outbound::repositories::PostgresRoleRepository;
use rental_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rental_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "rental-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        storage = if config.database.url.is_some() { "postgresql" } else { "memory" },
        password_algorithm = ?config.password.algorithm,
        token_lifetime_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::with_hasher(
        config.jwt.secret.as_bytes(),
        config.password.password_hasher(),
    ));
    let token_lifetime = config.jwt.token_lifetime();

    let (auth_service, car_service): (Arc<dyn AuthServicePort>, Arc<dyn CarServicePort>) =
        match &config.database.url {
            Some(url) => {
                let pg_pool = PgPoolOptions::new()
                    .max_connections(5)
                    .connect(url)
                    .await?;
                tracing::info!(
                    max_connections = 5,
                    database = "postgresql",
                    "Database connection pool created"
                );

                sqlx::migrate!("./migrations").run(&pg_pool).await?;
                tracing::info!(database = "postgresql", "Database migrations completed");

                (
                    Arc::new(AuthService::new(
                        Arc::new(PostgresUserRepository::new(pg_pool.clone())),
                        Arc::new(PostgresRoleRepository::new(pg_pool.clone())),
                        authenticator,
                        token_lifetime,
                    )),
                    Arc::new(CarService::new(Arc::new(PostgresCarRepository::new(
                        pg_pool,
                    )))),
                )
            }
            None => {
                tracing::warn!("No database.url configured, data will not survive a restart");
                (
                    Arc::new(AuthService::new(
                        Arc::new(InMemoryUserRepository::new()),
                        Arc::new(InMemoryRoleRepository::seeded()),
                        authenticator,
                        token_lifetime,
                    )),
                    Arc::new(CarService::new(Arc::new(InMemoryCarRepository::new()))),
                )
            }
        };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(auth_service, car_service)).await?;

    tracing::info!("Server exited successfully");
    Ok(())
}
