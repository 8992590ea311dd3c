mod cache;
mod error;
mod source;
mod store;

#[cfg(test)]
mod tests;

pub use cache::{DownloadInfo, UNKNOWN_DATE, read_cache, read_download_info, write_cache, write_download_info};
pub use error::StoreError;
pub use source::{DictionarySource, HttpSource};
pub use store::DataStore;
