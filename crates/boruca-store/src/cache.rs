//! On-disk cache pair: the last downloaded word list and its download date

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use boruca_types::Dataset;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Shown when no download date is on record
pub const UNKNOWN_DATE: &str = "Fecha desconocida";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadInfo {
    #[serde(default)]
    pub last_download_date: Option<String>,
}

impl DownloadInfo {
    pub fn now() -> Self {
        Self {
            last_download_date: Some(chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()),
        }
    }
}

/// Four-space indented JSON, non-ASCII left unescaped
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| StoreError::CacheWrite {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let json = to_pretty_json(value)?;
    fs::write(path, json).map_err(|source| StoreError::CacheWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// `Ok(None)` when the file does not exist
fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Option<T>, StoreError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::CacheRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    Ok(Some(serde_json::from_str(&data)?))
}

/// Overwrite the cached word list
pub fn write_cache(path: &Path, dataset: &Dataset) -> Result<(), StoreError> {
    write_json(path, dataset)
}

pub fn read_cache(path: &Path) -> Result<Option<Dataset>, StoreError> {
    read_json(path)
}

pub fn write_download_info(path: &Path, info: &DownloadInfo) -> Result<(), StoreError> {
    write_json(path, info)
}

pub fn read_download_info(path: &Path) -> Result<Option<DownloadInfo>, StoreError> {
    read_json(path)
}
