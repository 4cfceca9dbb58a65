//! Gateway types module
//!
//! Types used at the API boundary:
//!
//! ## Input Types
//! - [`ValidatedNewOrder`]: axum extractor for framework-level validation
//!
//! ## Output Types
//! - [`ApiError`] / [`ApiResult`]: error handling at the handler boundary
//! - [`ErrorPayload`]: structured error body
//! - [`OrderListData`]: list endpoint envelope

pub mod order;
pub mod response;

pub use order::{ValidatedNewOrder, validate_new_order};
pub use response::{
    ApiError, ApiResult, ErrorPayload, OrderListData, created, error_codes, ok,
};
