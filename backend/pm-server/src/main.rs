use pm_auth::{AdminRoles, ClerkMembershipDirectory, JwtValidator};
use pm_config::{Config, ConfigError};
use pm_core::SystemClock;
use pm_server::{AppState, build_router, error::ServerError, logger};

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is fine
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pm-server v{}", env!("CARGO_PKG_VERSION"));
    if dotenv_loaded {
        info!("Loaded environment from .env");
    }
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");
    pm_db::run_migrations(&pool).await?;

    let jwt_validator = Arc::new(build_jwt_validator(&config)?);
    info!("JWT: {} session tokens", jwt_validator.algorithm());

    let directory = ClerkMembershipDirectory::new(
        &config.directory.api_url,
        &config.directory.secret_key,
        config.directory.timeout(),
        config.directory.page_size,
    )?;

    let app_state = AppState {
        pool,
        jwt_validator,
        directory: Arc::new(directory),
        clock: Arc::new(SystemClock),
        admin_roles: config
            .authorization
            .admin_roles
            .as_ref()
            .map(AdminRoles::new)
            .unwrap_or_default(),
        allow_reactivation: config.sprint.allow_reactivation,
        sign_in_url: config.auth.sign_in_url.clone(),
        session_cookie: config.auth.session_cookie.clone(),
    };

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

fn build_jwt_validator(config: &Config) -> Result<JwtValidator, ServerError> {
    if let Some(ref secret) = config.auth.jwt_secret {
        return Ok(JwtValidator::with_hs256(secret.as_bytes()));
    }

    let Some(key_path) = config.jwt_public_key_path()? else {
        return Err(ConfigError::auth(
            "auth.jwt_secret or auth.jwt_public_key_path is required",
        )
        .into());
    };

    let public_key =
        std::fs::read_to_string(&key_path).map_err(|source| ServerError::JwtKeyFile {
            path: key_path.display().to_string(),
            source,
        })?;

    Ok(JwtValidator::with_rs256(&public_key)?)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            warn!("Graceful shutdown disabled");
            std::future::pending::<()>().await;
        }
    }
}
