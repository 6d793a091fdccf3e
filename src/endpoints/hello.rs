//! HMRC's "Hello World" API: one open, one application-restricted and one
//! user-restricted resource, handy for checking credentials end to end.

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::error::Result;
use crate::request::Endpoint;
use crate::request::headers::insert_bearer;

/// `GET /hello/world`, no authorization.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloWorld;

impl Endpoint for HelloWorld {
    fn method(&self) -> Method {
        Method::GET
    }

    fn api_path(&self) -> String {
        "/hello/world".to_string()
    }
}

/// `GET /hello/application`, authorized with the application's server token.
#[derive(Clone)]
pub struct HelloApplication {
    pub server_token: String,
}

impl HelloApplication {
    pub fn new(server_token: impl Into<String>) -> Self {
        Self {
            server_token: server_token.into(),
        }
    }
}

impl Endpoint for HelloApplication {
    fn method(&self) -> Method {
        Method::GET
    }

    fn api_path(&self) -> String {
        "/hello/application".to_string()
    }

    fn headers(&self, headers: &mut HeaderMap) -> Result<()> {
        insert_bearer(headers, &self.server_token)
    }
}

/// `GET /hello/user`, authorized with a user's OAuth access token.
#[derive(Clone)]
pub struct HelloUser {
    pub access_token: String,
}

impl HelloUser {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

impl Endpoint for HelloUser {
    fn method(&self) -> Method {
        Method::GET
    }

    fn api_path(&self) -> String {
        "/hello/user".to_string()
    }

    fn headers(&self, headers: &mut HeaderMap) -> Result<()> {
        insert_bearer(headers, &self.access_token)
    }
}
