use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use super::commands::ServeArgs;
use crate::api;
use crate::config::{ServerConfig, DEFAULT_DATABASE, DEFAULT_LOG_FILTER};
use crate::error::{NoteError, Result};
use crate::logging;
use crate::repository::SqliteNoteRepository;
use crate::service::Notes;
use crate::storage::SqliteStore;

const OPEN_STORE: &str = "OpenStore";

fn open_store(path: &std::path::Path) -> Result<SqliteStore> {
    SqliteStore::open(path).map_err(|e| NoteError::store(OPEN_STORE, None, e))
}

pub fn handle_init_db(db: Option<PathBuf>) -> Result<()> {
    logging::init(DEFAULT_LOG_FILTER);

    let path = db.unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));
    open_store(&path)?;

    println!("Initialized notes database at {}", path.display());
    Ok(())
}

pub fn handle_serve(args: ServeArgs) -> Result<()> {
    let config = args.into_config();
    logging::init(&config.log_filter);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(config))
}

/// Open the store, wire repository, service and router, and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let store = Arc::new(open_store(&config.database_path)?);
    let notes = Arc::new(Notes::new(SqliteNoteRepository::new(store)));
    let app = api::router(notes);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(
        addr = %listener.local_addr()?,
        db = %config.database_path.display(),
        "notes api listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
