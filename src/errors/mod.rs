// Errors layer - Error type definitions
pub mod api;
pub mod internal;
pub mod validation;

// Re-exports for convenience
pub use api::{ApiError, ErrorEnvelope};
pub use internal::{BinError, InternalError};
pub use validation::ValidationError;
