//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::types::{ErrorPayload, OrderListData};
use crate::models::{FruitItem, FruitOrder, NewOrderRequest};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fruit Orders API",
        version = "1.0.0",
        description = "Minimal in-memory order management service: create fruit orders, list them with pagination, fetch one by id."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::liveness,
        crate::gateway::handlers::readiness,
        crate::gateway::handlers::list_orders,
        crate::gateway::handlers::create_order,
        crate::gateway::handlers::get_order,
    ),
    components(
        schemas(
            FruitItem,
            FruitOrder,
            NewOrderRequest,
            OrderListData,
            ErrorPayload,
        )
    ),
    tags(
        (name = "Orders", description = "Order creation and queries"),
        (name = "System", description = "Health and readiness probes")
    )
)]
pub struct ApiDoc;
