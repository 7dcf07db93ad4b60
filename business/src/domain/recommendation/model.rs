use std::collections::HashSet;

use crate::domain::shared::value_objects::{ProductId, UserId};

/// Upper bound on the number of products returned for a single request.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// A single ListRecommendations call, built per request and discarded.
#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    pub user_id: UserId,
    pub excluded_ids: HashSet<ProductId>,
}

impl RecommendationRequest {
    /// Builds a request from raw exclusion values. Blank entries are ignored.
    pub fn new<I, S>(user_id: UserId, excluded_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let excluded_ids = excluded_ids
            .into_iter()
            .filter_map(|raw| ProductId::parse(raw.as_ref()))
            .collect();

        Self {
            user_id,
            excluded_ids,
        }
    }
}

/// Products recommended for a request, at most [`MAX_RECOMMENDATIONS`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recommendation {
    pub product_ids: Vec<ProductId>,
}

impl Recommendation {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_drop_blank_excluded_ids() {
        let request = RecommendationRequest::new(UserId::new("u1"), ["p1", "", "  ", "p2"]);

        assert_eq!(request.excluded_ids.len(), 2);
        assert!(request.excluded_ids.contains(&ProductId::new("p1")));
        assert!(request.excluded_ids.contains(&ProductId::new("p2")));
    }

    #[test]
    fn should_collapse_duplicate_excluded_ids() {
        let request =
            RecommendationRequest::new(UserId::new("u1"), vec!["p1".to_string(), "p1".to_string()]);

        assert_eq!(request.excluded_ids.len(), 1);
    }

    #[test]
    fn should_accept_empty_exclusion_list() {
        let request = RecommendationRequest::new(UserId::new(""), Vec::<String>::new());

        assert!(request.excluded_ids.is_empty());
        assert!(request.user_id.is_anonymous());
    }

    #[test]
    fn should_create_empty_recommendation() {
        let recommendation = Recommendation::empty();
        assert!(recommendation.is_empty());
        assert_eq!(recommendation.len(), 0);
    }
}
