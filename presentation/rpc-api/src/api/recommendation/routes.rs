use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::recommendation::use_cases::list::{
    ListRecommendationsParams, ListRecommendationsUseCase,
};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recommendation::dto::{ListRecommendationsRequest, RecommendationResponse};
use crate::api::tags::ApiTags;

pub struct RecommendationApi {
    list_use_case: Arc<dyn ListRecommendationsUseCase>,
}

impl RecommendationApi {
    pub fn new(list_use_case: Arc<dyn ListRecommendationsUseCase>) -> Self {
        Self { list_use_case }
    }
}

/// Recommendation API
///
/// RPC-style endpoints returning product recommendations.
#[OpenApi]
impl RecommendationApi {
    /// ListRecommendations
    ///
    /// Returns up to five random products from the catalog, leaving out the
    /// products listed in `product_ids`.
    #[oai(
        path = "/recommendations/list",
        method = "post",
        tag = "ApiTags::Recommendations"
    )]
    async fn list_recommendations(
        &self,
        body: Json<ListRecommendationsRequest>,
    ) -> ListRecommendationsResponse {
        let params = ListRecommendationsParams {
            excluded_ids: body.0.excluded_ids(),
            user_id: UserId::new(body.0.user_id.unwrap_or_default()),
        };

        match self.list_use_case.execute(params).await {
            Ok(recommendation) => ListRecommendationsResponse::Ok(Json(recommendation.into())),
            Err(err) => match err.into_error_response() {
                (StatusCode::SERVICE_UNAVAILABLE, json) => {
                    ListRecommendationsResponse::ServiceUnavailable(json)
                }
                (_, json) => ListRecommendationsResponse::InternalError(json),
            },
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListRecommendationsResponse {
    #[oai(status = 200)]
    Ok(Json<RecommendationResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
