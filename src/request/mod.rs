//! The request builder shared by every HMRC endpoint.
//!
//! A [`Request`] pairs an [`Endpoint`] (method + path) with the settings every
//! HMRC call needs: which deployment to hit, which API version to ask for,
//! and the transport to send it through. [`Request::fire`] issues exactly one
//! call and wraps the result in a [`Response`].

mod endpoint;
mod environment;
pub mod headers;

pub use endpoint::Endpoint;
pub use environment::{Environment, URL_LIVE, URL_SANDBOX, UnknownEnvironment};
pub use headers::{accept_header, authorization_header};

use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::fetch::{BasicClient, HttpClient};
use crate::response::Response;

pub const DEFAULT_SERVICE_VERSION: &str = "1.0";
pub const DEFAULT_CONTENT_TYPE: &str = "json";

/// A configured call to one HMRC endpoint.
///
/// Setters consume and return the builder so they chain:
///
/// ```no_run
/// # async fn run() -> hmrc_api::Result<()> {
/// use hmrc_api::endpoints::HelloWorld;
/// use hmrc_api::Request;
///
/// let resp = Request::new(HelloWorld)
///     .use_live_env()
///     .set_service_version("1.0")
///     .fire()
///     .await?;
/// println!("{}", resp.status());
/// # Ok(())
/// # }
/// ```
pub struct Request<E, C = BasicClient> {
    endpoint: E,
    client: C,
    api_base_url: String,
    service_version: String,
    content_type: String,
}

impl<E: Endpoint> Request<E> {
    /// Targets the sandbox through a fresh [`BasicClient`].
    pub fn new(endpoint: E) -> Self {
        Self::with_client(endpoint, BasicClient::new())
    }
}

impl<E: Endpoint, C: HttpClient> Request<E, C> {
    /// Targets the sandbox through `client`.
    pub fn with_client(endpoint: E, client: C) -> Self {
        Self {
            endpoint,
            client,
            api_base_url: URL_SANDBOX.to_string(),
            service_version: DEFAULT_SERVICE_VERSION.to_string(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }

    pub fn use_live_env(self) -> Self {
        self.use_env(Environment::Live)
    }

    pub fn use_sandbox_env(self) -> Self {
        self.use_env(Environment::Sandbox)
    }

    /// Replaces the base URL, including any custom one, with `env`'s.
    pub fn use_env(mut self, env: Environment) -> Self {
        self.api_base_url = env.base_url().to_string();
        self
    }

    /// Points the request at an arbitrary base URL. Not validated; it should
    /// carry no trailing `/`.
    pub fn set_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn set_service_version(mut self, service_version: impl Into<String>) -> Self {
        self.service_version = service_version.into();
        self
    }

    pub fn set_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn service_version(&self) -> &str {
        &self.service_version
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn accept_header(&self) -> String {
        accept_header(&self.service_version, &self.content_type)
    }

    /// `Accept`, then whatever the endpoint adds.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_str(&self.accept_header())?);
        self.endpoint.headers(&mut headers)?;
        Ok(headers)
    }

    /// Base URL followed directly by the endpoint path.
    pub fn uri(&self) -> String {
        format!("{}{}", self.api_base_url, self.endpoint.api_path())
    }

    /// Sends the request and wraps the response.
    ///
    /// Any status the transport returns successfully is wrapped, 4xx and 5xx
    /// included.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidUri`] and [`Error::InvalidHeader`] are raised before
    /// anything is sent. Transport failures come back as
    /// [`Error::Transport`] holding the transport's own error.
    #[tracing::instrument(
        name = "hmrc_request",
        skip(self),
        fields(method = %self.endpoint.method(), uri = %self.uri())
    )]
    pub async fn fire(&self) -> Result<Response> {
        let uri = self.uri();
        let url = Url::parse(&uri).map_err(|source| Error::InvalidUri {
            uri: uri.clone(),
            source,
        })?;

        let mut req = reqwest::Request::new(self.endpoint.method(), url);
        *req.headers_mut() = self.headers()?;

        let resp = match self.client.execute(req).await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "HMRC transport call failed");
                return Err(e.into());
            }
        };

        let resp = Response::from_http(resp).await?;
        debug!(
            status = resp.status().as_u16(),
            bytes = resp.body().len(),
            "HMRC response received"
        );
        Ok(resp)
    }
}
