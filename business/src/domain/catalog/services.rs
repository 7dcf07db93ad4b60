use async_trait::async_trait;

use crate::domain::errors::CatalogError;
use crate::domain::shared::value_objects::ProductId;

/// Service port for the external product catalog.
///
/// Returns every product identifier available for recommendation, in catalog
/// order. Implementations must not retry on failure.
#[async_trait]
pub trait ProductCatalogService: Send + Sync {
    async fn get_product_list(&self) -> Result<Vec<ProductId>, CatalogError>;
}
