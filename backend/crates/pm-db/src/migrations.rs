use crate::Result as DbErrorResult;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;

/// Schema migrations embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    log::info!("Running database migrations...");
    MIGRATOR.run(pool).await?;
    log::info!("Migrations complete");
    Ok(())
}
