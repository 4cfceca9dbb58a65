use std::sync::Arc;

use crate::store::OrderStore;

/// Shared gateway state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Order store (owns all orders and the id counter)
    pub store: Arc<OrderStore>,
}

impl AppState {
    pub fn new(store: Arc<OrderStore>) -> Self {
        Self { store }
    }
}
