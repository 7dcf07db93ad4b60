use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::services::ProductCatalogService;
use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::{
    MAX_RECOMMENDATIONS, Recommendation, RecommendationRequest,
};
use crate::domain::recommendation::selection::select_recommendations;
use crate::domain::recommendation::use_cases::list::{
    ListRecommendationsParams, ListRecommendationsUseCase,
};

pub struct ListRecommendationsUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListRecommendationsUseCase for ListRecommendationsUseCaseImpl {
    async fn execute(
        &self,
        params: ListRecommendationsParams,
    ) -> Result<Recommendation, RecommendationError> {
        let request = RecommendationRequest::new(params.user_id, params.excluded_ids);

        self.logger.info(&format!(
            "Received recommendation request for user: {}, excluded products: {}",
            request.user_id,
            request.excluded_ids.len()
        ));

        let catalog = self.catalog.get_product_list().await?;

        let product_ids = select_recommendations(
            &catalog,
            &request.excluded_ids,
            MAX_RECOMMENDATIONS,
            &mut rand::rng(),
        );

        Ok(Recommendation { product_ids })
    }
}
