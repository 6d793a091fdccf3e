use async_trait::async_trait;
use reqwest::{Request, Response};

/// The transport a [`crate::request::Request`] hands its call to.
///
/// Implementations perform exactly one round-trip per `execute` and report
/// failures as the `reqwest::Error` they hit, untouched.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
