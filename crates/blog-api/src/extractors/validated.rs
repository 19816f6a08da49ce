//! JSON body extractor that runs `validator` rules before the handler

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// `Json<T>` whose content already passed `T::validate`
///
/// Malformed JSON becomes `INVALID_BODY`; rule violations become
/// `VALIDATION_ERROR` with per-field details.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_body(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}
