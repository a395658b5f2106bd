use std::sync::Arc;

use folio_cloud::S3Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). Both the database pool and the S3 store are constructed once
/// at startup and injected here; there is no lazily-initialized global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Blob store for demo gallery images.
    pub s3: S3Store,
}
