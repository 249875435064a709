//! Error handling for the Mitra backend
//!
//! Provides consistent error responses in English and Hindi

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::ValidationError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String, message_hi: String },

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_hi: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    // External service errors
    #[error("Weather provider error: {0}")]
    WeatherProvider(String),

    #[error("Advisory provider error: {0}")]
    AdvisoryProvider(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation {
            field: e.field,
            message: e.message,
            message_hi: e.message_hi,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let field = e
            .field_errors()
            .keys()
            .next()
            .map(|f| f.to_string())
            .unwrap_or_default();
        AppError::Validation {
            message: format!("Invalid value for {}", field),
            message_hi: format!("{} का मान अमान्य है", field),
            field,
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_hi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "TOKEN_EXPIRED".to_string(),
                    message_en: "Session has expired".to_string(),
                    message_hi: "सत्र समाप्त हो गया है".to_string(),
                    field: None,
                },
            ),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "INVALID_TOKEN".to_string(),
                    message_en: "Invalid session token".to_string(),
                    message_hi: "सत्र टोकन अमान्य है".to_string(),
                    field: None,
                },
            ),
            AppError::Unauthorized { message, message_hi } => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "UNAUTHORIZED".to_string(),
                    message_en: message.clone(),
                    message_hi: message_hi.clone(),
                    field: None,
                },
            ),
            AppError::Validation {
                field,
                message,
                message_hi,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_hi: message_hi.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_hi: format!("{} नहीं मिला", resource),
                    field: None,
                },
            ),
            AppError::UnknownLocation(city) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "UNKNOWN_LOCATION".to_string(),
                    message_en: format!("City coordinates not found for {}", city),
                    message_hi: format!("{} के निर्देशांक नहीं मिले", city),
                    field: Some("city".to_string()),
                },
            ),
            AppError::WeatherProvider(_) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "WEATHER_SERVICE_UNAVAILABLE".to_string(),
                    message_en: "Failed to fetch weather data".to_string(),
                    message_hi: "मौसम की जानकारी प्राप्त नहीं हो सकी".to_string(),
                    field: None,
                },
            ),
            AppError::AdvisoryProvider(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "ADVISORY_SERVICE_ERROR".to_string(),
                    message_en: format!("Advisory service error: {}", msg),
                    message_hi: format!("सलाह सेवा में त्रुटि: {}", msg),
                    field: None,
                },
            ),
            AppError::StorageError(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "STORAGE_ERROR".to_string(),
                    message_en: format!("Storage error: {}", msg),
                    message_hi: format!("संग्रहण में त्रुटि: {}", msg),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_hi: format!("कॉन्फ़िगरेशन में त्रुटि: {}", msg),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: "सर्वर में आंतरिक त्रुटि हुई".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: AppError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn test_every_variant_maps_to_a_status() {
        let cases = [
            (AppError::TokenExpired, StatusCode::UNAUTHORIZED),
            (AppError::InvalidToken, StatusCode::UNAUTHORIZED),
            (
                AppError::Unauthorized {
                    message: "no".to_string(),
                    message_hi: "नहीं".to_string(),
                },
                StatusCode::UNAUTHORIZED,
            ),
            (
                ValidationError::new("otp", "bad", "गलत").into(),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::NotFound("Registration".to_string()), StatusCode::NOT_FOUND),
            (AppError::UnknownLocation("Atlantis".to_string()), StatusCode::NOT_FOUND),
            (AppError::WeatherProvider("down".to_string()), StatusCode::BAD_GATEWAY),
            (AppError::AdvisoryProvider("down".to_string()), StatusCode::BAD_GATEWAY),
            (AppError::StorageError("disk".to_string()), StatusCode::SERVICE_UNAVAILABLE),
            (AppError::Configuration("key".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Internal("jwt".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            // Adding a variant without a case here is a compile error
            match &error {
                AppError::TokenExpired
                | AppError::InvalidToken
                | AppError::Unauthorized { .. }
                | AppError::Validation { .. }
                | AppError::NotFound(_)
                | AppError::UnknownLocation(_)
                | AppError::WeatherProvider(_)
                | AppError::AdvisoryProvider(_)
                | AppError::StorageError(_)
                | AppError::Configuration(_)
                | AppError::Internal(_) => {}
            }
            assert_eq!(status_of(error), expected);
        }
    }
}
