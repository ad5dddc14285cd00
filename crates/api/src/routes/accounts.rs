//! Account CRUD and balance endpoints.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::AccountNumber;
use domain::{Account, AccountRepository, AccountService, DomainError, OpenAccount};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<R: AccountRepository> {
    pub account_service: AccountService<R>,
}

impl<R: AccountRepository> AppState<R> {
    /// Wraps a repository in a service and shares it.
    pub fn new(repository: R) -> Arc<Self> {
        Arc::new(Self {
            account_service: AccountService::new(repository),
        })
    }
}

// -- Handlers --

/// GET /accounts: list every account.
#[tracing::instrument(skip(state))]
pub async fn list<R: AccountRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<Vec<Account>>, ApiError> {
    let accounts = state.account_service.list_accounts().await?;
    Ok(Json(accounts))
}

/// GET /accounts/{account_number}: load one account.
#[tracing::instrument(skip(state))]
pub async fn get<R: AccountRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(account_number): Path<String>,
) -> Result<Json<Account>, ApiError> {
    let account_number = parse_account_number(&account_number)?;
    let account = state.account_service.get_account(account_number).await?;
    Ok(Json(account))
}

/// POST /accounts: open a new account.
#[tracing::instrument(skip(state, body))]
pub async fn create<R: AccountRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    body: Result<Json<OpenAccount>, JsonRejection>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let Json(cmd) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let account = state.account_service.open_account(cmd).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// DELETE /accounts/{account_number}: remove an account if it exists.
#[tracing::instrument(skip(state))]
pub async fn delete<R: AccountRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(account_number): Path<String>,
) -> Result<StatusCode, ApiError> {
    let account_number = parse_account_number(&account_number)?;
    state.account_service.close_account(account_number).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /accounts/{account_number}/withdrawal: body is the amount as text.
#[tracing::instrument(skip(state, body))]
pub async fn withdrawal<R: AccountRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(account_number): Path<String>,
    body: Bytes,
) -> Result<Json<Account>, ApiError> {
    let account_number = parse_account_number(&account_number)?;
    let amount = amount_text(&body)?;
    let account = state
        .account_service
        .withdraw(account_number, amount)
        .await?;
    Ok(Json(account))
}

/// PUT /accounts/{account_number}/deposit: body is the amount as text.
#[tracing::instrument(skip(state, body))]
pub async fn deposit<R: AccountRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(account_number): Path<String>,
    body: Bytes,
) -> Result<Json<Account>, ApiError> {
    let account_number = parse_account_number(&account_number)?;
    let amount = amount_text(&body)?;
    let account = state.account_service.deposit(account_number, amount).await?;
    Ok(Json(account))
}

fn parse_account_number(raw: &str) -> Result<AccountNumber, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid account number: {raw}")))
}

/// A body that is not UTF-8 cannot hold decimal text.
fn amount_text(body: &Bytes) -> Result<&str, ApiError> {
    std::str::from_utf8(body).map_err(|err| {
        ApiError::Domain(DomainError::InvalidAmount {
            amount: String::from_utf8_lossy(body).into_owned(),
            reason: err.to_string(),
        })
    })
}
