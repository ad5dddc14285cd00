//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request that never reached the domain.
    #[error("{0}")]
    BadRequest(String),

    /// Domain logic error.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(err) => domain_error_status(err),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = %message, "internal server error");
        } else {
            tracing::debug!(error = %message, status = status.as_u16(), "request rejected");
        }

        let body = serde_json::json!({ "error": message, "code": status.as_u16() });
        (status, axum::Json(body)).into_response()
    }
}

fn domain_error_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::AccountNotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::InvalidInput(_) | DomainError::InvalidAmount { .. } => {
            StatusCode::BAD_REQUEST
        }
        DomainError::DuplicateAccount { .. } => StatusCode::CONFLICT,
        DomainError::BalanceOverflow { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

#[cfg(test)]
mod tests {
    use domain::AccountNumber;

    use super::*;

    #[test]
    fn test_domain_errors_map_to_status_codes() {
        let number = AccountNumber::new(1).unwrap();
        let cases = [
            (
                DomainError::AccountNotFound {
                    account_number: number,
                },
                StatusCode::NOT_FOUND,
            ),
            (
                DomainError::InvalidInput("missing".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::InvalidAmount {
                    amount: "x".into(),
                    reason: "bad".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::DuplicateAccount {
                    account_number: number,
                },
                StatusCode::CONFLICT,
            ),
            (
                DomainError::BalanceOverflow {
                    account_number: number,
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_internal_is_server_error() {
        let err = ApiError::Internal("boom".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "boom");
    }
}
