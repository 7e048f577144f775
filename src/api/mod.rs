//! API handlers for the bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    body::{to_bytes, Body},
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Same as axum's default body limit
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// JSON body extractor where a request without a body reads as `T::default()`.
///
/// A non-empty body goes through `Json<T>`, so syntax errors, wrong field
/// types and a missing JSON content type are still rejected.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = to_bytes(body, BODY_LIMIT)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        if bytes.is_empty() {
            return Ok(JsonBody(T::default()));
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}
