//! Fruit Orders API
//!
//! Minimal order-management HTTP service: create fruit orders, list them
//! with pagination, fetch one by id. All state lives in process memory.
//!
//! - [`store`]: thread-safe in-memory order store with sequential ids
//! - [`gateway`]: axum router, handlers, and API types
//! - [`config`] / [`logging`]: YAML config and tracing setup

pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod store;
