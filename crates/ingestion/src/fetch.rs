//! Well-detail page retrieval.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use well_common::{WellError, WellResult};

/// Default location of the OCD permitting well-detail page.
pub const DEFAULT_BASE_URL: &str =
    "https://wwwapps.emnrd.nm.gov/OCD/OCDPermitting/Data/WellDetails.aspx";

/// Source of raw page text for a well identifier.
///
/// The contract is narrow on purpose: fetch the raw document for an id, or
/// fail. Everything downstream (parsing, normalization) is transport-free.
#[async_trait]
pub trait WellPageSource: Send + Sync {
    async fn fetch_page(&self, api: &str) -> WellResult<String>;
}

/// HTTP implementation backed by reqwest.
pub struct HttpPageSource {
    client: Client,
    base_url: String,
}

impl HttpPageSource {
    /// Build a client with an explicit request timeout. A fetch that runs
    /// past the timeout is a [`WellError::FetchFailure`], never a hang.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> WellResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| WellError::InternalError(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl WellPageSource for HttpPageSource {
    async fn fetch_page(&self, api: &str) -> WellResult<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("api", api)])
            .send()
            .await
            .map_err(|e| WellError::FetchFailure(format!("request for {} failed: {}", api, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WellError::FetchFailure(format!(
                "status {} for api {}",
                status, api
            )));
        }

        response
            .text()
            .await
            .map_err(|e| WellError::FetchFailure(format!("body read for {} failed: {}", api, e)))
    }
}
