use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const CACHE_FILE: &str = "boruca_dictionary.json";
pub const DOWNLOAD_INFO_FILE: &str = "download_info.json";

/// Local data directory, `~/.local/share` on Linux
fn default_data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from("data"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup("BORUCA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        Self { data_dir }
    }

    /// Last successfully downloaded word list
    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join(CACHE_FILE)
    }

    /// `{ "last_download_date": ... }` record
    pub fn download_info_path(&self) -> PathBuf {
        self.data_dir.join(DOWNLOAD_INFO_FILE)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}
