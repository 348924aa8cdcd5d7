//! Request extractors that reject with the uniform error envelope

use std::{collections::HashMap, convert::Infallible};

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::{error::AppError, models::PageRequest};

/// Positive integer `:id` path segment
#[derive(Debug, Clone, Copy)]
pub struct BookId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::invalid_parameter())?;

        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(BookId(id)),
            _ => {
                tracing::debug!(param = %raw, "rejected book id");
                Err(AppError::invalid_parameter())
            }
        }
    }
}

/// JSON body that deserialized and passed `Validate`
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection.body_text(), "rejected request body");
            AppError::invalid_payload()
        })?;

        value.validate().map_err(|errors| {
            tracing::debug!(%errors, "payload failed validation");
            AppError::invalid_payload()
        })?;

        Ok(ValidatedJson(value))
    }
}

/// `?page=&limit=`; values that are not integers count as absent
#[async_trait]
impl<S> FromRequestParts<S> for PageRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| params)
            .unwrap_or_default();

        let int_param = |name: &str| params.get(name).and_then(|v| v.trim().parse::<i64>().ok());

        Ok(PageRequest::from_query(int_param("page"), int_param("limit")))
    }
}
