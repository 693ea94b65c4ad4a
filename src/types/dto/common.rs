use poem_openapi::Object;

/// Health check payload
#[derive(Object, Debug)]
pub struct HealthDto {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Success envelope for the health check
#[derive(Object, Debug)]
pub struct HealthEnvelope {
    pub success: bool,
    pub data: HealthDto,
}
