use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lostnfound::config::Config;
use lostnfound::db::create_pool;
use lostnfound::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lostnfound=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration (is DATABASE_URL set?)")?;

    tracing::info!("Starting lostnfound server...");
    tracing::info!("Connecting to database...");

    let pool = create_pool(&config.database_url, config.pool_max_connections).await?;
    tracing::info!("Database connection established");

    // Schema creation is an idempotent migration step, finished before the
    // listener starts accepting traffic.
    sqlx::migrate!().run(&pool).await?;

    let app = routes::router(pool);

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
