//! # Try-On DB
//!
//! Database handle for the try-on gateway.
//!
//! The connection is an explicit startup step: [`Database::new`] starts in the
//! `connecting` state, [`spawn_connect`] runs a bounded retry loop in the
//! background, and the outcome is published as a [`DatabaseStatus`] that the
//! readiness endpoint reports. Liveness never depends on it.
//!
//! # Example
//!
//! ```ignore
//! use tryon_db::{Database, spawn_connect};
//!
//! let db = Database::new();
//! spawn_connect(config.database.clone(), db.clone());
//! // serve traffic; `db.is_ready()` flips once the pool is up
//! ```

pub mod backoff;
pub mod connect;

use std::sync::Arc;

use tokio::sync::{OnceCell, watch};

pub use backoff::calculate_backoff;
pub use connect::{connect_with_retry, retry_with_backoff, spawn_connect};
pub use sqlx::PgPool;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatabaseStatus {
    Connecting,
    Connected,
    Failed(String),
}

impl DatabaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DatabaseStatus::Connecting => "connecting",
            DatabaseStatus::Connected => "connected",
            DatabaseStatus::Failed(_) => "failed",
        }
    }
}

/// Shared database handle. Cheap to clone; all clones see the same pool and
/// status.
#[derive(Clone)]
pub struct Database {
    pool: Arc<OnceCell<PgPool>>,
    status: Arc<watch::Sender<DatabaseStatus>>,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("status", &*self.status.borrow())
            .finish()
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl Database {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(DatabaseStatus::Connecting);
        Self {
            pool: Arc::new(OnceCell::new()),
            status: Arc::new(tx),
        }
    }

    pub fn status(&self) -> DatabaseStatus {
        self.status.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.status.borrow(), DatabaseStatus::Connected)
    }

    /// The pool, once connected.
    pub fn pool(&self) -> Option<PgPool> {
        self.pool.get().cloned()
    }

    pub fn subscribe(&self) -> watch::Receiver<DatabaseStatus> {
        self.status.subscribe()
    }

    pub fn mark_connected(&self, pool: PgPool) {
        // A second pool is dropped; the first one wins.
        let _ = self.pool.set(pool);
        self.status.send_replace(DatabaseStatus::Connected);
    }

    pub fn mark_failed(&self, reason: impl Into<String>) {
        self.status.send_replace(DatabaseStatus::Failed(reason.into()));
    }
}
