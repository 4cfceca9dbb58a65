//! Order request validation and the validated-body extractor.
//!
//! - [`validate_new_order`]: business validation for create requests
//! - [`ValidatedNewOrder`]: axum extractor that rejects malformed JSON and
//!   invalid payloads with the standard `invalid_request` error shape,
//!   so handlers never see invalid data

use axum::{
    Json,
    extract::{FromRequest, Request},
};

use crate::models::NewOrderRequest;

use super::response::ApiError;

/// Validate a create-order request.
///
/// Rules: customerName must not be blank, items must not be empty, and each
/// item needs a non-blank fruit name and quantity >= 1. The quantity lower
/// bound is also enforced here explicitly even though `quantity: u32`
/// already rejects negatives at the serde layer (zero still gets through).
pub fn validate_new_order(req: &NewOrderRequest) -> Result<(), &'static str> {
    if req.customer_name.trim().is_empty() || req.items.is_empty() {
        return Err("customerName and items are required");
    }

    for item in &req.items {
        if item.fruit.trim().is_empty() || item.quantity < 1 {
            return Err("Each item must have a fruit name and quantity >= 1");
        }
    }

    Ok(())
}

/// Validated create-order body.
///
/// Performs validation at the framework level: a missing or unparsable body
/// becomes a 400 `invalid_request` instead of a transport-level error page,
/// and handlers only ever receive requests that passed [`validate_new_order`].
#[derive(Debug)]
pub struct ValidatedNewOrder(pub NewOrderRequest);

impl<S> FromRequest<S> for ValidatedNewOrder
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(new_order): Json<NewOrderRequest> =
            Json::from_request(req, state).await.map_err(|_| {
                ApiError::bad_request("Request body is invalid or missing required fields")
            })?;

        validate_new_order(&new_order).map_err(ApiError::bad_request)?;

        Ok(Self(new_order))
    }
}
