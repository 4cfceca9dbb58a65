//! Domain models for fruit orders.
//!
//! These structs double as the JSON wire format: field names are camelCase
//! on the wire (`customerName`, `createdAt`), snake_case in Rust.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status assigned to every order at creation. No transition logic exists;
/// this is the only status value the service ever produces.
pub const ORDER_STATUS_PENDING: &str = "Pending";

/// A single fruit line item within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FruitItem {
    /// Fruit name (must not be blank)
    #[schema(example = "Apple")]
    pub fruit: String,
    /// Requested quantity (must be >= 1)
    #[schema(example = 3, minimum = 1)]
    pub quantity: u32,
}

/// A stored fruit order. Created only through [`crate::store::OrderStore::add`]
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FruitOrder {
    /// Unique generated identifier, e.g. `ord-002`
    #[schema(example = "ord-001")]
    pub id: String,
    /// Name of the customer who placed the order
    #[schema(example = "Alice")]
    pub customer_name: String,
    /// Ordered items (never empty)
    pub items: Vec<FruitItem>,
    /// Order status (always "Pending")
    #[schema(example = "Pending")]
    pub status: String,
    /// UTC timestamp when the order was created
    pub created_at: DateTime<Utc>,
}

/// Payload required to create a new order. Input only, never persisted;
/// validated and then converted into a [`FruitOrder`] by the store.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    /// Name of the customer placing the order
    #[schema(example = "Bob")]
    pub customer_name: String,
    /// Requested items (must contain at least one)
    pub items: Vec<FruitItem>,
}
