use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use business::domain::catalog::services::ProductCatalogService;
use business::domain::errors::CatalogError;
use business::domain::shared::value_objects::ProductId;

use crate::client::CatalogClient;

#[derive(Debug, Deserialize)]
struct ListProductsResponse {
    #[serde(default)]
    products: Vec<CatalogProduct>,
}

/// Only the identifier matters here; name, price and the rest are ignored.
#[derive(Debug, Deserialize)]
struct CatalogProduct {
    id: String,
}

/// Product catalog adapter over HTTP.
pub struct ProductCatalogHttp {
    client: CatalogClient,
}

impl ProductCatalogHttp {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductCatalogService for ProductCatalogHttp {
    async fn get_product_list(&self) -> Result<Vec<ProductId>, CatalogError> {
        let url = self
            .client
            .products_url()
            .map_err(|_| CatalogError::unavailable())?;

        let response = self
            .client
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "Product catalog request failed");
                CatalogError::unavailable()
            })?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Product catalog returned an error status");
            return Err(CatalogError::unavailable());
        }

        let body: ListProductsResponse = response.json().await.map_err(|err| {
            warn!(error = %err, "Product catalog response could not be decoded");
            CatalogError::invalid_response()
        })?;

        Ok(body
            .products
            .into_iter()
            .filter_map(|product| ProductId::parse(&product.id))
            .collect())
    }
}
