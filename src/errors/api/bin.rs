use crate::errors::internal::{BinError, InternalError};
use crate::errors::validation::ValidationError;
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Failure envelope shared by every endpoint
#[derive(Object, Debug, Clone)]
pub struct ErrorEnvelope {
    /// Always false
    pub success: bool,

    /// Human-readable error message
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Bin API error types
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Request input failed validation
    #[oai(status = 400)]
    BadRequest(Json<ErrorEnvelope>),

    /// Bin does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorEnvelope>),

    /// Bin id already taken
    #[oai(status = 409)]
    Conflict(Json<ErrorEnvelope>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
}

impl ApiError {
    /// Create a BadRequest error
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(Json(ErrorEnvelope::new(message)))
    }

    /// Create a NotFound error
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(Json(ErrorEnvelope::new(message)))
    }

    /// Create a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(Json(ErrorEnvelope::new(message)))
    }

    /// Create a generic internal server error
    ///
    /// Never carries internal details; those are logged at the conversion point.
    pub fn internal_server_error() -> Self {
        ApiError::InternalError(Json(ErrorEnvelope::new("Internal server error")))
    }

    /// Convert InternalError to ApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Database { operation, .. } => {
                tracing::error!("Database error in {}: {}", operation, err);
                Self::internal_server_error()
            }
            InternalError::Transaction { operation, .. } => {
                tracing::error!("Transaction error in {}: {}", operation, err);
                Self::internal_server_error()
            }
            InternalError::Parse { value_type, .. } => {
                tracing::error!("Parse error for {}: {}", value_type, err);
                Self::internal_server_error()
            }
            InternalError::Bin(BinError::NotFound(id)) => {
                tracing::debug!("Bin not found: {}", id);
                Self::not_found("Bin not found")
            }
            InternalError::Bin(BinError::Conflict(id)) => {
                tracing::warn!("Bin id collision: {}", id);
                Self::conflict("Bin already exists")
            }
        }
    }

    /// HTTP status code of the variant
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) => 409,
            ApiError::InternalError(_) => 500,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(json) => json.0.error.clone(),
            ApiError::NotFound(json) => json.0.error.clone(),
            ApiError::Conflict(json) => json.0.error.clone(),
            ApiError::InternalError(json) => json.0.error.clone(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        tracing::debug!("Validation failed: {}", err);
        Self::bad_request(err.to_string())
    }
}

impl From<InternalError> for ApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
