use crate::config::config::ApiConfig;
use crate::error::{Result, SwapiError};
use crate::models::{Film, Person, ResourceAccessor};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev";

/// The outbound calls records and query sets make.
///
/// `SwapiClient` is the HTTP implementation; anything else that can hand back
/// SWAPI-shaped JSON (an in-memory fixture, a recorded session) can stand in.
pub trait Fetch {
    /// `GET /api/{resource}/{id}`
    fn fetch_single(&self, resource: &str, id: u32) -> Result<Value>;

    /// `GET /api/{resource}/?page={page}`, returning the page envelope
    fn fetch_page(&self, resource: &str, page: u32) -> Result<Value>;
}

#[derive(Clone)]
pub struct SwapiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl SwapiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(SwapiError::ClientBuild)?;

        Ok(Self {
            base_url: normalize_base_url(&config.base_url),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn people(&self) -> ResourceAccessor<'_, Person, Self> {
        ResourceAccessor::new(self)
    }

    pub fn films(&self) -> ResourceAccessor<'_, Film, Self> {
        ResourceAccessor::new(self)
    }

    fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(target: "api", "GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| SwapiError::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().map_err(|source| SwapiError::Transport {
            path: path.to_string(),
            source,
        })?;
        trace!(target: "api", "{} -> {} ({} bytes)", path, status, body.len());

        if !status.is_success() {
            debug!(target: "api", "{} failed with status {}", path, status);
            return Err(SwapiError::Request {
                path: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| SwapiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

impl Fetch for SwapiClient {
    fn fetch_single(&self, resource: &str, id: u32) -> Result<Value> {
        self.get_json(&single_path(resource, id))
    }

    fn fetch_page(&self, resource: &str, page: u32) -> Result<Value> {
        self.get_json(&page_path(resource, page))
    }
}

impl std::fmt::Debug for SwapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

pub fn single_path(resource: &str, id: u32) -> String {
    format!("/api/{}/{}", resource, id)
}

pub fn page_path(resource: &str, page: u32) -> String {
    format!("/api/{}/?page={}", resource, page)
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}
