//! HTTP API server with observability for the bank accounts service.
//!
//! Provides REST endpoints for listing, opening, removing and moving money
//! in and out of accounts, with structured logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use domain::{Account, AccountNumber, AccountRepository, CustomerNumber, InMemoryAccountRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use rust_decimal::Decimal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use error::ApiError;
use routes::accounts::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: AccountRepository + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check::<R>))
        .route(
            "/accounts",
            get(routes::accounts::list::<R>).post(routes::accounts::create::<R>),
        )
        .route(
            "/accounts/{account_number}",
            get(routes::accounts::get::<R>).delete(routes::accounts::delete::<R>),
        )
        .route(
            "/accounts/{account_number}/withdrawal",
            put(routes::accounts::withdrawal::<R>),
        )
        .route(
            "/accounts/{account_number}/deposit",
            put(routes::accounts::deposit::<R>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .layer(TraceLayer::new_for_http())
}

fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal("unexpected failure while handling request".to_string()).into_response()
}

/// Creates the application state over an in-memory repository.
///
/// With `seed` set, the repository starts with [`demo_accounts`].
pub fn create_default_state(seed: bool) -> Arc<AppState<InMemoryAccountRepository>> {
    let repository = if seed {
        InMemoryAccountRepository::with_accounts(demo_accounts())
    } else {
        InMemoryAccountRepository::new()
    };
    AppState::new(repository)
}

/// The accounts a freshly started server holds when seeding is enabled.
pub fn demo_accounts() -> Vec<Account> {
    [
        (123456789, 987654321, "George Baird", Decimal::new(35423, 2)),
        (121212121, 888777666, "Mary Taylor", Decimal::new(56003, 2)),
        (545454545, 222444999, "Diana Rigg", Decimal::new(42200, 2)),
    ]
    .into_iter()
    .filter_map(|(number, customer, name, balance)| {
        AccountNumber::new(number)
            .map(|number| Account::new(number, CustomerNumber::new(customer), name, balance))
    })
    .collect()
}
