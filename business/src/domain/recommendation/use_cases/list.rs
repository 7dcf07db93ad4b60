use async_trait::async_trait;

use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;
use crate::domain::shared::value_objects::UserId;

pub struct ListRecommendationsParams {
    pub user_id: UserId,
    /// Raw product identifiers to leave out, typically the product being viewed.
    pub excluded_ids: Vec<String>,
}

#[async_trait]
pub trait ListRecommendationsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListRecommendationsParams,
    ) -> Result<Recommendation, RecommendationError>;
}
