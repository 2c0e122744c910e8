use dotenvy::dotenv;
use tracing::error;
use tryon_config::GatewayConfig;
use tryon_db::{Database, spawn_connect};
use tryon_gateway::logging::{init_tracing, shutdown_tracer};
use tryon_gateway::metrics::{init_metrics, watch_database_status};
use tryon_gateway::modules::GatewayRoutes;
use tryon_gateway::router::init_router;
use tryon_gateway::server::run;
use tryon_gateway::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing();
    let metrics_handle = init_metrics();

    let db = Database::new();
    spawn_connect(config.database.clone(), db.clone());
    if metrics_handle.is_some() {
        tokio::spawn(watch_database_status(db.subscribe()));
    }

    let addr = config.server.socket_addr();
    let state = AppState::new(config, db);

    let app = init_router(state, GatewayRoutes::default(), metrics_handle);

    let result = run(app, addr).await;
    shutdown_tracer().await;

    if let Err(e) = result {
        error!(error = ?e, "Gateway stopped with an error");
        std::process::exit(1);
    }
}
