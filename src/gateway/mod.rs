pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::store::OrderStore;
use state::AppState;

/// Build the gateway router.
///
/// Separate from [`run_server`] so tests can drive the router directly.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health and readiness probes (both path styles)
        .route("/health", get(handlers::liveness))
        .route("/health/liveness", get(handlers::liveness))
        .route("/ready", get(handlers::readiness))
        .route("/health/readiness", get(handlers::readiness))
        // Order API
        .route(
            "/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route("/orders/{order_id}", get(handlers::get_order))
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway server.
pub async fn run_server(config: &AppConfig, store: Arc<OrderStore>) {
    let state = Arc::new(AppState::new(store));
    let app = app(state);

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);
    tracing::info!("gateway listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
