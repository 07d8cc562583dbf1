//! Blocking client for the TrailService REST API.
//!
//! One method per API resource. Each call issues exactly one `GET` and
//! returns the decoded body, or fails. There are no retries, no caching and
//! no request timeout.
//!
//! ```ignore
//! use trails::TrailServiceClient;
//!
//! let client = TrailServiceClient::new("http://localhost:5026/api")?;
//! let points = client.get_trail_points("Combe Martin Circular")?;
//! println!("{} points", points.len());
//! ```

use std::fmt;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::{Result, TrailError};
use crate::records::{LocationPoint, TrailRecord, UserRecord};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5026/api";

/// Environment variable read by [`TrailServiceClientBuilder::from_env`].
pub const BASE_URL_ENV: &str = "TRAILS_API_URL";

const USERS: &str = "users";
const TRAILS: &str = "trails";
const LOCATION_POINTS: &str = "locationpoints";
// The per-trail endpoint is spelled with a capital L on the server.
const TRAIL_POINTS: &str = "Locationpoints";

/// HTTP status codes of the four read endpoints, as returned by
/// [`TrailServiceClient::check_responses`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointStatuses {
    /// `GET /users`
    pub users: StatusCode,
    /// `GET /trails`
    pub trails: StatusCode,
    /// `GET /locationpoints`
    pub location_points: StatusCode,
    /// `GET /Locationpoints/{trailName}`
    pub trail_points: StatusCode,
}

impl EndpointStatuses {
    /// `true` when every endpoint answered `200 OK`.
    pub fn all_ok(&self) -> bool {
        self.iter().all(|(_, status)| status == StatusCode::OK)
    }

    /// Endpoint labels paired with their status, in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, StatusCode)> {
        [
            ("/users", self.users),
            ("/trails", self.trails),
            ("/locationpoints", self.location_points),
            ("/Locationpoints/{trailName}", self.trail_points),
        ]
        .into_iter()
    }
}

/// Client bound to one TrailService base URL.
///
/// The base URL is fixed at construction. The client holds no other state
/// besides the underlying HTTP connection pool, so calls are independent and
/// may be repeated in any order.
#[derive(Debug, Clone)]
pub struct TrailServiceClient {
    client: Client,
    base_url: Url,
}

impl TrailServiceClient {
    /// Create a client for the given base URL (e.g. `http://localhost:5026/api`).
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::InvalidBaseUrl`] if the URL cannot be parsed or
    /// cannot carry path segments, and [`TrailError::Transport`] if the HTTP
    /// client cannot be initialised.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    /// Create a builder for more configuration options.
    pub fn builder(base_url: impl AsRef<str>) -> TrailServiceClientBuilder {
        TrailServiceClientBuilder::new(base_url)
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET {base}/users`
    pub fn get_users(&self) -> Result<Vec<UserRecord>> {
        let url = self.endpoint(&[USERS])?;
        tracing::info!(url = %url, "Getting users");
        self.get_json(url)
    }

    /// `GET {base}/users/{username}`
    ///
    /// The server answers with either the user or an error body. Both decode
    /// into a [`UserRecord`]; an error body just leaves the known fields empty.
    pub fn get_user_by_name(&self, username: &str) -> Result<UserRecord> {
        let url = self.endpoint(&[USERS, username])?;
        tracing::info!(url = %url, username, "Getting user");
        self.get_json(url)
    }

    /// `GET {base}/trails`
    pub fn get_trails(&self) -> Result<Vec<TrailRecord>> {
        let url = self.endpoint(&[TRAILS])?;
        tracing::info!(url = %url, "Getting trails");
        self.get_json(url)
    }

    /// `GET {base}/locationpoints`: the points of every trail.
    pub fn get_location_points(&self) -> Result<Vec<LocationPoint>> {
        let url = self.endpoint(&[LOCATION_POINTS])?;
        tracing::info!(url = %url, "Getting location points");
        self.get_json(url)
    }

    /// `GET {base}/Locationpoints/{trailName}`: the points of one trail.
    ///
    /// The trail name is sent as a single percent-encoded path segment.
    pub fn get_trail_points(&self, trail_name: &str) -> Result<Vec<LocationPoint>> {
        let url = self.endpoint(&[TRAIL_POINTS, trail_name])?;
        tracing::info!(url = %url, trail = trail_name, "Getting trail points");
        self.get_json(url)
    }

    /// Request the four read endpoints and report their status codes.
    ///
    /// Bodies are not decoded. Only transport failures are errors; a non-200
    /// answer is reported in the returned statuses.
    pub fn check_responses(&self, trail_name: &str) -> Result<EndpointStatuses> {
        Ok(EndpointStatuses {
            users: self.status_of(self.endpoint(&[USERS])?)?,
            trails: self.status_of(self.endpoint(&[TRAILS])?)?,
            location_points: self.status_of(self.endpoint(&[LOCATION_POINTS])?)?,
            trail_points: self.status_of(self.endpoint(&[TRAIL_POINTS, trail_name])?)?,
        })
    }

    /// Build an endpoint URL by appending path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TrailError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        let body = response.bytes()?;

        tracing::debug!(url = %url, status = %status, bytes = body.len(), "Response received");

        serde_json::from_slice(&body).map_err(|source| TrailError::Decode {
            url: url.to_string(),
            source,
        })
    }

    fn status_of(&self, url: Url) -> Result<StatusCode> {
        let status = self.client.get(url.clone()).send()?.status();
        tracing::info!(url = %url, status = %status, "Endpoint checked");
        Ok(status)
    }
}

impl fmt::Display for TrailServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The url in this instance is: {}", self.base_url)
    }
}

/// Builder for [`TrailServiceClient`].
///
/// ```ignore
/// use trails::TrailServiceClientBuilder;
///
/// // TRAILS_API_URL=http://trails.example.com/api
/// let client = TrailServiceClientBuilder::from_env().build()?;
/// ```
#[derive(Debug, Clone)]
pub struct TrailServiceClientBuilder {
    base_url: String,
}

impl TrailServiceClientBuilder {
    /// Create a new builder with the specified base URL.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().to_string(),
        }
    }

    /// Create a builder configured from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `TRAILS_API_URL` | TrailService base URL | `http://localhost:5026/api` |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().to_string();
        self
    }

    /// Build the [`TrailServiceClient`].
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::InvalidBaseUrl`] if the base URL is unusable.
    pub fn build(self) -> Result<TrailServiceClient> {
        let base_url = parse_base_url(&self.base_url)?;
        // Requests wait for the server for as long as it takes.
        let client = Client::builder().timeout(None).build()?;
        Ok(TrailServiceClient { client, base_url })
    }
}

impl Default for TrailServiceClientBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| TrailError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(TrailError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "URL cannot be a base".to_string(),
        });
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> TrailServiceClient {
        TrailServiceClient::new(base).unwrap()
    }

    #[test]
    fn test_endpoint_collection_paths() {
        let client = client("http://localhost:5026/api");
        assert_eq!(
            client.endpoint(&[USERS]).unwrap().as_str(),
            "http://localhost:5026/api/users"
        );
        assert_eq!(
            client.endpoint(&[LOCATION_POINTS]).unwrap().as_str(),
            "http://localhost:5026/api/locationpoints"
        );
    }

    #[test]
    fn test_endpoint_keeps_trail_points_casing() {
        let client = client("http://localhost:5026/api");
        let url = client
            .endpoint(&[TRAIL_POINTS, "Combe Martin Circular"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5026/api/Locationpoints/Combe%20Martin%20Circular"
        );
    }

    #[test]
    fn test_endpoint_encodes_path_separators() {
        let client = client("http://localhost:5026/api");
        let url = client.endpoint(&[USERS, "a/b?c#d"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5026/api/users/a%2Fb%3Fc%23d");
    }

    #[test]
    fn test_endpoint_trailing_slash_and_bare_host() {
        let client_slash = client("http://localhost:5026/api/");
        assert_eq!(
            client_slash.endpoint(&[TRAILS]).unwrap().as_str(),
            "http://localhost:5026/api/trails"
        );

        let client_host = client("http://localhost:5026");
        assert_eq!(
            client_host.endpoint(&[TRAILS]).unwrap().as_str(),
            "http://localhost:5026/trails"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            TrailServiceClient::new("not a url"),
            Err(TrailError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            TrailServiceClient::new("mailto:someone@example.com"),
            Err(TrailError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_display() {
        let api = client("http://localhost:5026/api");
        assert_eq!(
            api.to_string(),
            "The url in this instance is: http://localhost:5026/api"
        );
        assert_eq!(
            client("http://localhost:5026").to_string(),
            "The url in this instance is: http://localhost:5026/"
        );
    }

    #[test]
    fn test_builder_base_url_override() {
        let client = TrailServiceClientBuilder::default()
            .base_url("http://trails.example.com/v2")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://trails.example.com/v2");
    }

    #[test]
    fn test_endpoint_statuses_all_ok() {
        let mut statuses = EndpointStatuses {
            users: StatusCode::OK,
            trails: StatusCode::OK,
            location_points: StatusCode::OK,
            trail_points: StatusCode::OK,
        };
        assert!(statuses.all_ok());
        assert_eq!(statuses.iter().count(), 4);

        statuses.trail_points = StatusCode::NOT_FOUND;
        assert!(!statuses.all_ok());
    }
}
