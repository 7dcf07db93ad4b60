use serde::{Deserialize, Serialize};

/// Represents the identifier of the user asking for recommendations.
/// An empty identifier is accepted and means an anonymous visitor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no user identifier was provided.
    pub fn is_anonymous(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_anonymous() {
            write!(f, "anonymous")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of a product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parses a raw identifier, rejecting blank values.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_user_id_from_string() {
        let user_id = UserId::new("user-123".to_string());
        assert_eq!(user_id.as_str(), "user-123");
    }

    #[test]
    fn should_treat_empty_user_id_as_anonymous() {
        assert!(UserId::new("").is_anonymous());
        assert!(UserId::new("   ").is_anonymous());
        assert!(!UserId::new("test_user").is_anonymous());
    }

    #[test]
    fn should_display_anonymous_for_empty_user_id() {
        assert_eq!(format!("{}", UserId::new("")), "anonymous");
        assert_eq!(format!("{}", UserId::new("test_user")), "test_user");
    }

    #[test]
    fn should_convert_from_str() {
        let user_id: UserId = "from-str".into();
        assert_eq!(user_id.as_str(), "from-str");
    }

    #[test]
    fn should_parse_product_id_trimming_whitespace() {
        let id = ProductId::parse("  OLJCESPC7Z ").unwrap();
        assert_eq!(id.as_str(), "OLJCESPC7Z");
    }

    #[test]
    fn should_reject_blank_product_id() {
        assert!(ProductId::parse("").is_none());
        assert!(ProductId::parse("   ").is_none());
    }

    #[test]
    fn should_compare_product_ids_for_equality() {
        assert_eq!(ProductId::new("p1"), ProductId::from("p1"));
        assert_ne!(ProductId::new("p1"), ProductId::new("p2"));
    }
}
