//! Authentication extractor
//!
//! Verifies the externally issued session token from the Authorization
//! header and turns its claims into a [`Caller`].

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use blog_common::AppError;
use blog_core::Caller;

use crate::response::ApiError;
use crate::state::AppState;

/// Signed-in caller; rejects the request with 401 otherwise
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Caller);

impl AuthUser {
    pub fn caller(&self) -> &Caller {
        &self.0
    }
}

fn verify(state: &AppState, token: &str) -> Result<Caller, ApiError> {
    state.sessions().verify(token).map_err(|e| {
        tracing::warn!(error = %e, "Rejected session token");
        ApiError::App(e)
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::App(AppError::MissingAuth))?;

        let app_state = AppState::from_ref(state);
        let caller = verify(&app_state, bearer.token())?;

        Ok(AuthUser(caller))
    }
}

/// Optional caller
///
/// `None` when no Authorization header is present; a present but invalid
/// token is still rejected.
#[derive(Debug, Clone, Copy)]
pub struct OptionalAuthUser(pub Option<Caller>);

impl OptionalAuthUser {
    pub fn caller(&self) -> Option<&Caller> {
        self.0.as_ref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => {
                let app_state = AppState::from_ref(state);
                let caller = verify(&app_state, bearer.token())?;
                Ok(OptionalAuthUser(Some(caller)))
            }
            Err(_) => Ok(OptionalAuthUser(None)),
        }
    }
}
