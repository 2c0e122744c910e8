//! Body extractors whose rejections flow through [`AppError`].
//!
//! axum's own `Json` and `Form` reject with plain-text bodies. These wrappers
//! keep the status axum picked (400 malformed, 413 too large, 415 wrong
//! content type, 422 wrong shape) and render it like every other gateway
//! error.

use anyhow::anyhow;
use axum::{
    Form, Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tryon_core::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::new(rejection.status(), anyhow!(rejection.body_text())))?;

        Ok(ApiJson(value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ApiForm<T>(pub T);

impl<T, S> FromRequest<S> for ApiForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::new(rejection.status(), anyhow!(rejection.body_text())))?;

        Ok(ApiForm(value))
    }
}
