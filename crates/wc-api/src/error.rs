//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use wc_core::Error;

/// API error type. Domain failures carry their own status mapping;
/// transport-level problems get explicit variants.
#[derive(Debug)]
pub enum ApiError {
    Domain(Error),
    BadRequest(String),
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Domain(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Domain(err) => {
                if matches!(err, Error::Persistence { .. }) {
                    tracing::error!(error = %err, "persistence failure");
                }
                ErrorBody {
                    code: err.error_code(),
                    message: err.to_string(),
                }
            }
            ApiError::BadRequest(msg) => ErrorBody {
                code: "bad_request",
                message: msg.clone(),
            },
            ApiError::ServiceUnavailable(msg) => ErrorBody {
                code: "service_unavailable",
                message: msg.clone(),
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
