//! Error types for the trails library.

use thiserror::Error;

/// Errors that can occur when talking to TrailService or rendering its data.
#[derive(Error, Debug)]
pub enum TrailError {
    /// The configured base URL cannot be used to build endpoint URLs.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Connection, TLS or body read failure.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not JSON of the expected shape.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A trail plot needs at least one point to take its title from.
    #[error("Cannot plot an empty trail: no location points")]
    EmptyTrail,

    /// A map marker needs both latitude and longitude.
    #[error("Location point {index} has no latitude or longitude")]
    MissingCoordinate { index: usize },

    /// The drawing backend failed.
    #[error("Plotting error: {0}")]
    Plot(String),

    /// IO error when writing rendered output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`TrailError`].
pub type Result<T> = std::result::Result<T, TrailError>;
