/**
 * Request Extractors
 *
 * Thin wrappers over axum's `Json` and `Multipart` extractors whose
 * rejections are `BackendError`, so malformed bodies render in the same
 * `{ message, statusCode, data }` shape as every other failure.
 */

use axum::{
    extract::{FromRequest, Multipart, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// JSON request body; rejects with `ValidationFailed`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Multipart request body; rejects with `ValidationFailed`
pub struct MultipartBody(pub Multipart);

impl<S> FromRequest<S> for MultipartBody
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state).await?;
        Ok(Self(multipart))
    }
}
