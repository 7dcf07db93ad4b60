use crate::domain::errors::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("recommendation.service_unavailable")]
    ServiceUnavailable(#[from] CatalogError),
}
