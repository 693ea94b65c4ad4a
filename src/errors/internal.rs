use thiserror::Error;

/// Internal error type for store and service operations
///
/// Separates infrastructure failures (Database, Transaction, Parse) from
/// bin-domain failures. Not exposed via the API; handlers convert it to
/// `ApiError` explicitly.
#[derive(Error, Debug)]
pub enum InternalError {
    // ============================================================
    // Infrastructure Errors
    // ============================================================

    /// Database query or operation failed
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Database transaction failed
    #[error("Transaction error: {operation} failed: {source}")]
    Transaction {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Failed to encode or decode a stored value
    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    // ============================================================
    // Domain Errors
    // ============================================================

    /// Bin store errors
    #[error(transparent)]
    Bin(#[from] BinError),
}

impl InternalError {
    /// Create a database error with context
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }

    /// Create a transaction error with context
    pub fn transaction(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Transaction {
            operation: operation.into(),
            source,
        }
    }

    /// Create a parse error with context
    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Bin(BinError::NotFound(_)))
    }
}

/// Bin store specific errors
#[derive(Error, Debug, PartialEq)]
pub enum BinError {
    /// No record exists for the id
    #[error("Bin not found: {0}")]
    NotFound(String),

    /// A record already exists for the id
    #[error("Bin already exists: {0}")]
    Conflict(String),
}
