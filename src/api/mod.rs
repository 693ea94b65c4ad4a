// API layer - HTTP endpoints
pub mod bins;
pub mod health;
pub mod helpers;

pub use bins::BinsApi;
pub use health::HealthApi;

use poem::{
    middleware::{Cors, Tracing},
    Endpoint, EndpointExt, Route,
};
use poem_openapi::OpenApiService;

use crate::app_data::AppData;
use helpers::envelope_errors;

/// Compose the HTTP application
///
/// JSON API under `/api`, Swagger UI under `/swagger`. Every error leaves as
/// an envelope.
///
/// # Arguments
/// * `app_data` - Shared stores and services
/// * `server_url` - Externally visible origin, advertised in the OpenAPI document
pub fn build_app(app_data: &AppData, server_url: &str) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (HealthApi, BinsApi::new(app_data)),
        "Binstash API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{}/api", server_url));

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .catch_all_error(envelope_errors)
        .with(Cors::new())
        .with(Tracing)
}
