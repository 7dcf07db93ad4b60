use std::sync::Arc;

use catalog::client::CatalogClient;
use catalog::product_catalog::ProductCatalogHttp;
use logger::TracingLogger;

use business::application::recommendation::list::ListRecommendationsUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::recommendation::routes::RecommendationApi;
use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub recommendation_api: RecommendationApi,
}

impl DependencyContainer {
    pub fn new(catalog_config: &CatalogConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let catalog_client = CatalogClient::new(&catalog_config.address, catalog_config.timeout)?;
        let product_catalog = Arc::new(ProductCatalogHttp::new(catalog_client));

        // Recommendation use cases
        let list_use_case = Arc::new(ListRecommendationsUseCaseImpl {
            catalog: product_catalog,
            logger,
        });

        Ok(Self {
            health_api: HealthApi::new(),
            recommendation_api: RecommendationApi::new(list_use_case),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn should_wire_container_for_valid_catalog_address() {
        let config = CatalogConfig {
            address: "product-catalog:3550".to_string(),
            timeout: Duration::from_secs(1),
        };

        assert!(DependencyContainer::new(&config).is_ok());
    }

    #[test]
    fn should_fail_for_invalid_catalog_address() {
        let config = CatalogConfig {
            address: "http://".to_string(),
            timeout: Duration::from_secs(1),
        };

        assert!(DependencyContainer::new(&config).is_err());
    }
}
