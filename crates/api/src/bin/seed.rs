//! Reset the configured database to the sample data set.
//!
//! Reads the same environment as the server (`DATABASE_URL`, ...), applies
//! migrations, clears every table and inserts the seed rows.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skybook_api::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skybook_db=info,skybook_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let pool = skybook_db::create_pool(&config.database_url, 1)
        .await
        .with_context(|| format!("Failed to connect to {}", config.database_url))?;
    skybook_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Clearing database");
    let mut conn = pool.acquire().await?;
    skybook_db::seed::clear_database(&mut conn)
        .await
        .context("Failed to clear database")?;
    drop(conn);

    tracing::info!("Seeding database");
    let summary = skybook_db::seed::seed_database(&pool)
        .await
        .context("Failed to seed database")?;
    tracing::info!(
        airlines = summary.airlines,
        flights = summary.flights,
        passengers = summary.passengers,
        bookings = summary.bookings,
        seats = summary.seats,
        "Database seeded successfully"
    );

    pool.close().await;
    Ok(())
}
