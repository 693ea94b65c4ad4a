// API-facing error types
pub mod bin;

// Re-exports for convenience
pub use bin::{ApiError, ErrorEnvelope};

#[cfg(test)]
mod bin_test;
