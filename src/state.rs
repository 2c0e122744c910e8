use std::sync::Arc;

use tryon_config::GatewayConfig;
use tryon_db::Database;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub db: Database,
}

impl AppState {
    pub fn new(config: GatewayConfig, db: Database) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }
}
