//! Backend entry-point: configuration, schema bootstrap, and server start.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::server::{AppSettings, create_server};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply any pending migrations over a dedicated synchronous connection.
fn run_migrations(database_url: &str) -> std::io::Result<()> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|e| std::io::Error::other(format!("database connection failed: {e}")))?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| std::io::Error::other(format!("migration failed: {e}")))?;

    if !applied.is_empty() {
        info!(count = applied.len(), "applied pending migrations");
    }

    Ok(())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("configuration error: {e}")))?;
    let database_url = settings.require_database_url()?.to_owned();

    let migration_url = database_url.clone();
    tokio::task::spawn_blocking(move || run_migrations(&migration_url))
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))??;

    let pool_config = PoolConfig::new(database_url, settings.pool_max_size);
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    info!(addr = %settings.bind_addr, "starting intake backend");
    create_server(&settings, pool)?.await
}
