use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shared HTTP client configuration for the catalog REST API.
#[derive(Clone)]
pub struct ApiClient {
    pub client: Client,
    pub base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an API path such as `products/5`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn login_url(&self) -> String {
        self.url("auth/login")
    }

    pub fn products_url(&self) -> String {
        self.url("products")
    }

    pub fn product_url(&self, id: impl std::fmt::Display) -> String {
        self.url(&format!("products/{}", id))
    }

    pub fn add_product_url(&self) -> String {
        self.url("products/add")
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}
