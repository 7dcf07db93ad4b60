/// Errors raised by the product catalog port.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.unavailable")]
    Unavailable,
    #[error("catalog.invalid_response")]
    InvalidResponse,
}

impl CatalogError {
    pub fn unavailable() -> Self {
        CatalogError::Unavailable
    }
    pub fn invalid_response() -> Self {
        CatalogError::InvalidResponse
    }
}
