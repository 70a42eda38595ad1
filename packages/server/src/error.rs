use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sewa_domain::ErrorBody;
use thiserror::Error;

/// API errors for the SEWA platform.
///
/// Validation and authentication failures carry fixed, user-facing
/// message strings; clients display them verbatim.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("User already exists")]
    DuplicateUser,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("OTP expired or not requested")]
    OtpNotRequested,

    #[error("OTP expired")]
    OtpExpired,

    #[error("Invalid OTP")]
    OtpInvalid,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::DuplicateUser
            | ApiError::OtpNotRequested
            | ApiError::OtpExpired
            | ApiError::OtpInvalid => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            tracing::error!(error = %err, "request failed");
        }
        let body = ErrorBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
