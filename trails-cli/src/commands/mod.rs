pub mod check;
pub mod comments;
pub mod demo;
pub mod export;
pub mod fetch;
pub mod map;
pub mod plot;

#[cfg(test)]
pub(crate) mod testing;

use anyhow::{Context, Result};
use std::path::PathBuf;
use trails::TrailServiceClient;

/// Build a client for `url`.
pub fn client(url: &str) -> Result<TrailServiceClient> {
    TrailServiceClient::new(url).with_context(|| format!("Invalid TrailService URL: {}", url))
}

/// Default output path for a trail: its name in lower case with every run of
/// non-alphanumeric characters replaced by `_`.
pub fn default_output(trail: &str, extension: &str) -> PathBuf {
    let mut stem = String::with_capacity(trail.len());
    for c in trail.chars() {
        if c.is_alphanumeric() {
            stem.extend(c.to_lowercase());
        } else if !stem.is_empty() && !stem.ends_with('_') {
            stem.push('_');
        }
    }
    let stem = stem.trim_end_matches('_');
    let stem = if stem.is_empty() { "trail" } else { stem };
    PathBuf::from(format!("{}.{}", stem, extension))
}
