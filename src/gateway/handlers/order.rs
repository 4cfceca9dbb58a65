//! Order handlers (list, create, get by id)

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Response,
};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, OrderListData, ValidatedNewOrder, created, ok};
use crate::models::FruitOrder;

/// Default page size when `limit` is absent
const DEFAULT_LIMIT: i64 = 50;
/// Maximum allowed page size
const MAX_LIMIT: i64 = 100;

/// List orders with pagination
///
/// GET /orders?limit=&offset=
#[utoipa::path(
    get,
    path = "/orders",
    params(
        ("limit" = Option<i64>, Query, description = "Page size, 1..=100 (default: 50)"),
        ("offset" = Option<i64>, Query, description = "Items to skip, >= 0 (default: 0)")
    ),
    responses(
        (status = 200, description = "Page of orders with total count", body = OrderListData, content_type = "application/json"),
        (status = 400, description = "limit/offset out of bounds", body = crate::gateway::types::ErrorPayload)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<OrderListData> {
    // Provided parameters must be within bounds; unparsable values count
    // as out of bounds too.
    let limit = match params.get("limit") {
        Some(raw) => match raw.parse::<i64>() {
            Ok(v) if (1..=MAX_LIMIT).contains(&v) => Some(v),
            _ => {
                return ApiError::bad_request("Query parameter validation failed").into_err();
            }
        },
        None => None,
    };

    let offset = match params.get("offset") {
        Some(raw) => match raw.parse::<i64>() {
            Ok(v) if v >= 0 => Some(v),
            _ => {
                return ApiError::bad_request("Query parameter validation failed").into_err();
            }
        },
        None => None,
    };

    // Defaults are already in range; clamp anyway.
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT) as usize;
    let offset = offset.unwrap_or(0).max(0) as usize;

    let items = state.store.get_paged(offset, limit);
    ok(OrderListData {
        total: state.store.total(),
        items,
    })
}

/// Create a new order
///
/// POST /orders
#[utoipa::path(
    post,
    path = "/orders",
    request_body = crate::models::NewOrderRequest,
    responses(
        (status = 201, description = "Order created, Location header points at it", body = FruitOrder, content_type = "application/json"),
        (status = 400, description = "Validation failed or body unparsable", body = crate::gateway::types::ErrorPayload)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    ValidatedNewOrder(new_order): ValidatedNewOrder,
) -> Result<Response, ApiError> {
    let order = state.store.add(new_order);
    tracing::info!(order_id = %order.id, customer = %order.customer_name, "order created");

    let location = format!("/orders/{}", order.id);
    created(location, order)
}

/// Get a single order by id
///
/// GET /orders/{orderId}
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order identifier, e.g. ord-001")
    ),
    responses(
        (status = 200, description = "The stored order", body = FruitOrder, content_type = "application/json"),
        (status = 404, description = "Unknown or blank order id", body = crate::gateway::types::ErrorPayload)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> ApiResult<FruitOrder> {
    if order_id.trim().is_empty() {
        return ApiError::not_found("Order with the specified ID was not found").into_err();
    }

    match state.store.get(&order_id) {
        Some(order) => ok(order),
        None => ApiError::not_found("Order with the specified ID was not found").into_err(),
    }
}
