//! Fruit Orders API entry point.
//!
//! Loads `config/{env}.yaml`, initializes logging, seeds the order store
//! and starts the HTTP gateway.

use std::sync::Arc;

use fruit_orders_api::config::AppConfig;
use fruit_orders_api::gateway;
use fruit_orders_api::logging;
use fruit_orders_api::store::OrderStore;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let mut app_config = AppConfig::load(&env);
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }

    let _log_guard = logging::init_logging(&app_config);
    tracing::info!("Starting Fruit Orders API in {} mode", env);

    let store = Arc::new(OrderStore::new());
    tracing::info!("order store seeded, {} order(s)", store.total());

    gateway::run_server(&app_config, store).await;
}
