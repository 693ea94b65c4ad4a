// Services layer - Business logic and orchestration
pub mod bin_search;
pub mod bin_service;
pub mod bin_validator;

pub use bin_search::search_bins;
pub use bin_service::BinService;
pub use bin_validator::BinValidator;
