use std::time::Duration;

use reqwest::Client;
use url::Url;

/// Default timeout applied to every catalog request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum CatalogClientError {
    #[error("catalog.invalid_address")]
    InvalidAddress(#[from] url::ParseError),
    #[error("catalog.http_client")]
    HttpClient(#[from] reqwest::Error),
}

/// Shared HTTP client configuration for the product catalog service.
pub struct CatalogClient {
    pub client: Client,
    pub base_url: Url,
}

impl CatalogClient {
    /// Builds a client for `address`.
    ///
    /// Accepts either a full URL or a bare `host:port`, in which case `http`
    /// is assumed.
    pub fn new(address: &str, timeout: Duration) -> Result<Self, CatalogClientError> {
        let base_url = Self::normalize_address(address)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    fn normalize_address(address: &str) -> Result<Url, url::ParseError> {
        let address = address.trim();
        let mut raw = if address.contains("://") {
            address.to_string()
        } else {
            format!("http://{}", address)
        };
        // Url::join drops the last path segment unless it ends with a slash.
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw)
    }

    /// Returns the product listing endpoint URL.
    pub fn products_url(&self) -> Result<Url, url::ParseError> {
        self.base_url.join("products")
    }
}
