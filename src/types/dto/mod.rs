// Data transfer objects - API request/response models
pub mod bins;
pub mod common;
