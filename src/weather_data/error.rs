use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherDataError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    // Every line was blank or a comment
    #[error("API payload contains no data lines")]
    EmptyPayload,

    // Data lines present but none complete, e.g. a JSON error body
    #[error("API payload contains no complete observation lines")]
    NoRecords,

    #[error("Cache file '{0}' does not exist")]
    CacheMissing(PathBuf),

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to read cache file '{0}'")]
    CacheRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to write cache file '{0}'")]
    CacheWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to encode observations for cache file")]
    CacheEncode(#[source] serde_json::Error),

    #[error("Failed to decode cache file '{0}'")]
    CacheDecode(PathBuf, #[source] serde_json::Error),
}
