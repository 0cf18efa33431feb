//! Resets the database to the demo data set.
//!
//! Reads `DATABASE_URL` (from the environment or `.env`), applies pending migrations and
//! replaces all users, units, soldiers and notifications.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use personnel::server::{
    config::Config,
    error::AppError,
    seed::{self, DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD},
    startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("Seeding failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let database_url = Config::database_url_from_env()?;
    let db = startup::connect_to_database(&database_url).await?;

    let summary = seed::seed_demo_data(&db).await?;

    tracing::info!(
        "Seeded {} users, {} units, {} soldiers and {} notifications",
        summary.users,
        summary.units,
        summary.soldiers,
        summary.notifications
    );
    tracing::info!(
        "Super admin login: {} / {}",
        DEMO_ADMIN_EMAIL,
        DEMO_ADMIN_PASSWORD
    );

    Ok(())
}
