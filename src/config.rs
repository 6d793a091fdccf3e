//! Request settings read from the environment.
//!
//! The binary loads `.env` with `dotenvy` first, so any of these can live
//! there:
//!
//! ```text
//! HMRC_ENV=sandbox            # or live
//! HMRC_API_BASE_URL=...       # overrides HMRC_ENV
//! HMRC_SERVICE_VERSION=1.0
//! HMRC_CONTENT_TYPE=json
//! HMRC_SERVER_TOKEN=...
//! HMRC_ACCESS_TOKEN=...
//! ```

use anyhow::{Context, Result};

use crate::fetch::HttpClient;
use crate::request::{
    DEFAULT_CONTENT_TYPE, DEFAULT_SERVICE_VERSION, Endpoint, Environment, Request,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub environment: Environment,
    pub api_base_url: Option<String>,
    pub service_version: String,
    pub content_type: String,
    pub server_token: Option<String>,
    pub access_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: Environment::Sandbox,
            api_base_url: None,
            service_version: DEFAULT_SERVICE_VERSION.to_string(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            server_token: None,
            access_token: None,
        }
    }
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`. Unset and empty variables fall back
    /// to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Settings::default();

        let environment = match get("HMRC_ENV") {
            Some(env) => env.parse().context("HMRC_ENV is invalid")?,
            None => defaults.environment,
        };

        Ok(Self {
            environment,
            api_base_url: get("HMRC_API_BASE_URL"),
            service_version: get("HMRC_SERVICE_VERSION").unwrap_or(defaults.service_version),
            content_type: get("HMRC_CONTENT_TYPE").unwrap_or(defaults.content_type),
            server_token: get("HMRC_SERVER_TOKEN"),
            access_token: get("HMRC_ACCESS_TOKEN"),
        })
    }

    /// Configures `request`: environment, then base URL override, then
    /// version and content type.
    pub fn apply<E: Endpoint, C: HttpClient>(&self, request: Request<E, C>) -> Request<E, C> {
        let mut request = request
            .use_env(self.environment)
            .set_service_version(self.service_version.as_str())
            .set_content_type(self.content_type.as_str());

        if let Some(url) = &self.api_base_url {
            request = request.set_api_base_url(url.as_str());
        }

        request
    }
}
