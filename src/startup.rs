use crate::{config::Config, error::AppError, service::admin::AdminService};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to
/// ensure the database schema is up-to-date. This function must complete
/// successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds the initial super-admin account when none exists.
///
/// Without at least one super-admin the approval workflow and admin
/// lifecycle are unreachable, so an empty table with no configured seed
/// credentials is worth a loud warning.
pub async fn seed_super_admin(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    let Some(seed) = &config.seed_super_admin else {
        if crate::data::super_admin::SuperAdminRepository::new(db)
            .count()
            .await?
            == 0
        {
            tracing::warn!(
                "No super-admin account exists and no seed credentials are configured"
            );
        }
        return Ok(());
    };

    AdminService::new(db)
        .seed_super_admin(&seed.name, &seed.email, &seed.password)
        .await?;

    Ok(())
}
