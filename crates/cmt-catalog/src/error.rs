//! Catalog loading error types.
//!
//! These errors are produced per source and, during a catalog load,
//! recovered by skipping the source. They surface directly only from the
//! manifest/source-classification helpers the CLI calls before loading.

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Errors from dataset source handling and fetching.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A source string looked like a URL but did not parse as one.
    #[error("invalid source '{value}': {reason}")]
    InvalidSource {
        /// The offending source string.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A file source could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// An HTTP transport error while fetching a URL source.
    #[error("HTTP error fetching {url}: {source}")]
    Http {
        /// The URL being fetched.
        url: Url,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// A URL source answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    HttpStatus {
        /// The URL being fetched.
        url: Url,
        /// The response status code.
        status: u16,
    },

    /// The HTTP client could not be constructed, so URL sources cannot
    /// be fetched this session.
    #[error("no HTTP client available for {url}")]
    NoHttpClient {
        /// The URL that would have been fetched.
        url: Url,
    },

    /// The sources manifest file could not be read.
    #[error("failed to read sources manifest {}: {source}", path.display())]
    ManifestRead {
        /// The manifest path.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The sources manifest was not valid JSON of the expected shape.
    #[error("invalid sources manifest {}: {source}", path.display())]
    ManifestParse {
        /// The manifest path.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },
}
