//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use domain::AccountRepository;
use serde::Serialize;

use super::accounts::AppState;
use crate::error::ApiError;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub accounts: usize,
}

/// GET /health: reports liveness and how many accounts are held.
pub async fn check<R: AccountRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<HealthResponse>, ApiError> {
    let accounts = state.account_service.repository().count().await?;
    Ok(Json(HealthResponse {
        status: "ok",
        accounts,
    }))
}
