use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

const SERVICE_NAME: &str = "recommendation";

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service name
    pub service: String,
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Liveness endpoint for orchestrators and load balancers.
///
/// Does not probe the product catalog: a catalog outage shows up as 503 on
/// the recommendation call itself.
pub struct HealthApi;

impl HealthApi {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Returns "healthy" while the process is serving requests.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            service: SERVICE_NAME.to_string(),
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::{Route, test::TestClient};
    use poem_openapi::OpenApiService;

    #[tokio::test]
    async fn should_report_healthy_status() {
        let service = OpenApiService::new(HealthApi::new(), "test", "0.1.0");
        let client = TestClient::new(Route::new().nest("/", service));

        let response = client.get("/health").send().await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let body = json.value().object();
        body.get("status").assert_string("healthy");
        body.get("service").assert_string("recommendation");
        body.get("version").assert_string(env!("CARGO_PKG_VERSION"));
    }
}
