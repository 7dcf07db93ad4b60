use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use business::domain::recommendation::model::Recommendation;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Object)]
pub struct ListRecommendationsRequest {
    /// User asking for recommendations; empty or missing for anonymous visitors
    pub user_id: Option<String>,
    /// Product IDs to leave out, typically the product being viewed.
    /// Anything other than an array is treated as an empty list.
    pub product_ids: Option<Value>,
}

impl ListRecommendationsRequest {
    /// String entries of `product_ids`; non-string entries are skipped.
    pub fn excluded_ids(&self) -> Vec<String> {
        match &self.product_ids {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RecommendationResponse {
    /// Recommended product IDs, at most five, in no particular order
    pub product_ids: Vec<String>,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(r: Recommendation) -> Self {
        Self {
            product_ids: r
                .product_ids
                .into_iter()
                .map(|id| id.into_inner())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_with(product_ids: Value) -> ListRecommendationsRequest {
        ListRecommendationsRequest {
            user_id: Some("u".to_string()),
            product_ids: Some(product_ids),
        }
    }

    #[test]
    fn should_keep_string_entries_of_exclusion_array() {
        let request = request_with(json!(["p1", 7, null, "p2", {"id": "p3"}]));

        assert_eq!(request.excluded_ids(), vec!["p1".to_string(), "p2".to_string()]);
    }

    #[test]
    fn should_treat_non_array_exclusions_as_empty() {
        assert!(request_with(json!("p1")).excluded_ids().is_empty());
        assert!(request_with(json!({"a": 1})).excluded_ids().is_empty());
        assert!(request_with(json!(42)).excluded_ids().is_empty());
    }

    #[test]
    fn should_treat_missing_exclusions_as_empty() {
        let request = ListRecommendationsRequest::default();

        assert!(request.excluded_ids().is_empty());
    }
}
