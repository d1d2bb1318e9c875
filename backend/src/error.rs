//! Error handling for the forest fire dashboard
//!
//! Provides consistent error responses in English and Turkish

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Backend read faults
    #[error("Backend returned {status} for {source_name}: {body}")]
    Backend {
        source_name: String,
        status: u16,
        body: String,
    },

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Could not decode rows from {source_name}: {message}")]
    Decode {
        source_name: String,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the error came from the backend read boundary
    pub fn is_backend_fault(&self) -> bool {
        matches!(
            self,
            AppError::Backend { .. } | AppError::BackendUnavailable(_) | AppError::Decode { .. }
        )
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
    pub message_tr: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Backend { source_name, status, .. } => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "BACKEND_ERROR".to_string(),
                    message_en: format!("Backend read of {} failed with status {}", source_name, status),
                    message_tr: format!("{} okunamadı (durum {})", source_name, status),
                },
            ),
            AppError::BackendUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "BACKEND_UNAVAILABLE".to_string(),
                    message_en: "The data service is temporarily unavailable".to_string(),
                    message_tr: "Veri servisine şu anda ulaşılamıyor".to_string(),
                },
            ),
            AppError::Decode { source_name, .. } => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "BACKEND_DECODE_ERROR".to_string(),
                    message_en: format!("Unexpected data returned for {}", source_name),
                    message_tr: format!("{} için beklenmeyen veri döndü", source_name),
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_tr: format!("Yapılandırma hatası: {}", msg),
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_tr: "Sunucuda beklenmeyen bir hata oluştu".to_string(),
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
