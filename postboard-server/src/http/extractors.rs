//! Custom Axum extractors

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{Pagination, PaginationParams, ValidationError};

/// Extract the `skip`/`limit` window from the query string.
///
/// Missing values take their defaults, `limit` is capped at 100, and
/// anything that is not a non-negative integer is rejected with 422.
pub struct Window(pub Pagination);

impl<S> FromRequestParts<S> for Window
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<PaginationParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::InvalidQuery {
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(Pagination::try_from(params)?))
    }
}
