use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::NewUser,
    service::user::UserService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `database_url` - SeaORM connection string, such as `sqlite://personnel.db?mode=rwc`
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the first super admin account when none exists.
///
/// Runs only when `ADMIN_EMAIL` and `ADMIN_PASSWORD` are configured. Does nothing once
/// any `super_admin` account exists, so restarts never create duplicates.
///
/// # Returns
/// - `Ok(true)` - A super admin was created
/// - `Ok(false)` - Nothing to do
/// - `Err(AppError)` - Invalid bootstrap credentials or database failure
pub async fn bootstrap_super_admin(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<bool, AppError> {
    if UserRepository::new(db).super_admin_exists().await? {
        return Ok(false);
    }

    let Some(admin) = &config.bootstrap_admin else {
        tracing::warn!(
            "No super_admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one"
        );
        return Ok(false);
    };

    let user = UserService::new(db)
        .register(NewUser::new(
            admin.name.clone(),
            admin.email.clone(),
            admin.password.clone(),
            Some("super_admin"),
            Some(true),
        )?)
        .await?;

    tracing::info!("Created super_admin account {} (id {})", user.email, user.id);

    Ok(true)
}
