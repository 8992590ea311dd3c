use boruca_config::Config;
use boruca_config::storage::StorageConfig;
use boruca_types::Dataset;

use crate::cache::{self, DownloadInfo, UNKNOWN_DATE};
use crate::error::StoreError;
use crate::source::{DictionarySource, HttpSource};

/// Resolves the word list: remote first, then the local cache, then empty
pub struct DataStore<S = HttpSource> {
    source: S,
    storage: StorageConfig,
}

impl DataStore<HttpSource> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(HttpSource::from_config(&config.network), config.storage.clone())
    }
}

impl<S: DictionarySource> DataStore<S> {
    pub fn new(source: S, storage: StorageConfig) -> Self {
        Self { source, storage }
    }

    /// Never fails; network and cache problems are logged and degrade the result
    pub async fn load(&self) -> Dataset {
        match self.source.fetch().await {
            Ok(dataset) => {
                tracing::info!(
                    "Downloaded {} entries from {}",
                    dataset.len(),
                    self.source.describe()
                );
                if let Err(e) = self.persist(&dataset) {
                    tracing::warn!("Failed to update local cache: {}", e);
                }
                dataset
            }
            Err(e) => {
                tracing::warn!(
                    "Error downloading dictionary from {}: {}",
                    self.source.describe(),
                    e
                );
                self.load_cached()
            }
        }
    }

    /// Cache first, download date only once the cache is on disk
    fn persist(&self, dataset: &Dataset) -> Result<(), StoreError> {
        cache::write_cache(&self.storage.cache_path(), dataset)?;
        cache::write_download_info(&self.storage.download_info_path(), &DownloadInfo::now())?;
        Ok(())
    }

    fn load_cached(&self) -> Dataset {
        let path = self.storage.cache_path();
        match cache::read_cache(&path) {
            Ok(Some(dataset)) => {
                tracing::info!(
                    "Loading {} entries from local file {}",
                    dataset.len(),
                    path.display()
                );
                dataset
            }
            Ok(None) => {
                tracing::info!("No local data available");
                Dataset::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring unusable local cache: {}", e);
                Dataset::default()
            }
        }
    }

    /// `YYYY-MM-DD HH:MM:SS` of the last successful download, or [`UNKNOWN_DATE`]
    pub fn last_download_timestamp(&self) -> String {
        match cache::read_download_info(&self.storage.download_info_path()) {
            Ok(Some(DownloadInfo {
                last_download_date: Some(date),
            })) => date,
            Ok(_) => UNKNOWN_DATE.to_string(),
            Err(e) => {
                tracing::debug!("Unreadable download info: {}", e);
                UNKNOWN_DATE.to_string()
            }
        }
    }
}
