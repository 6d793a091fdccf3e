//! Wrapper around a completed HMRC API call.

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

/// The status, headers and fully-read body of a successful transport call.
///
/// Only [`crate::request::Request::fire`] builds one of these.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// Drains the body of a raw transport response.
    pub(crate) async fn from_http(resp: reqwest::Response) -> reqwest::Result<Self> {
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Message {
        message: String,
    }

    fn canned(status: u16, body: &'static str) -> reqwest::Response {
        http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body)
            .unwrap()
            .into()
    }

    #[tokio::test]
    async fn test_wraps_status_and_body() {
        let resp = Response::from_http(canned(200, r#"{"message":"Hello World"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.is_success());
        assert_eq!(resp.text(), r#"{"message":"Hello World"}"#);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );

        let msg: Message = resp.json().unwrap();
        assert_eq!(msg.message, "Hello World");
    }

    #[tokio::test]
    async fn test_non_success_status_is_still_wrapped() {
        let resp = Response::from_http(canned(401, r#"{"code":"MISSING_CREDENTIALS"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(!resp.is_success());
    }

    #[tokio::test]
    async fn test_json_on_non_json_body_fails() {
        let resp = Response::from_http(canned(200, "not json")).await.unwrap();
        assert!(resp.json::<Message>().is_err());
    }
}
