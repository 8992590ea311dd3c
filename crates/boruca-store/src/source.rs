use std::time::Duration;

use async_trait::async_trait;
use boruca_config::network::NetworkConfig;
use boruca_types::Dataset;

use crate::error::StoreError;

/// Where the canonical word list comes from
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetch and parse the full word list
    async fn fetch(&self) -> Result<Dataset, StoreError>;

    /// Human-readable origin, used in log lines
    fn describe(&self) -> String;
}

/// Plain GET of a JSON document, no auth or conditional requests
///
/// Client construction errors surface from `fetch`, never from `new`.
#[derive(Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self { url, timeout }
    }

    pub fn from_config(config: &NetworkConfig) -> Self {
        Self::new(config.dictionary_url.clone(), config.timeout())
    }
}

#[async_trait]
impl DictionarySource for HttpSource {
    async fn fetch(&self) -> Result<Dataset, StoreError> {
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let response = client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(StoreError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let dataset: Dataset = serde_json::from_str(&body)?;
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
