//! Header values sent to HMRC.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::Result;

/// `Accept` value selecting an API version and representation,
/// e.g. `application/vnd.hmrc.1.0+json`. Neither token is escaped.
pub fn accept_header(service_version: &str, content_type: &str) -> String {
    format!("application/vnd.hmrc.{service_version}+{content_type}")
}

/// `Authorization` value for a server token or OAuth access token.
pub fn authorization_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Inserts `Authorization: Bearer <token>`, marked sensitive.
pub fn insert_bearer(headers: &mut HeaderMap, token: &str) -> Result<()> {
    let mut value = HeaderValue::from_str(&authorization_header(token))?;
    value.set_sensitive(true);
    headers.insert(AUTHORIZATION, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_header() {
        assert_eq!(accept_header("1.0", "json"), "application/vnd.hmrc.1.0+json");
        assert_eq!(accept_header("2.0", "xml"), "application/vnd.hmrc.2.0+xml");
        assert_eq!(accept_header("", ""), "application/vnd.hmrc.+");
    }

    #[test]
    fn test_authorization_header() {
        assert_eq!(authorization_header("abc123"), "Bearer abc123");
        assert_eq!(authorization_header(" spaced "), "Bearer  spaced ");
    }

    #[test]
    fn test_insert_bearer() {
        let mut headers = HeaderMap::new();
        insert_bearer(&mut headers, "tok").unwrap();

        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value, "Bearer tok");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_insert_bearer_rejects_control_characters() {
        let mut headers = HeaderMap::new();
        assert!(insert_bearer(&mut headers, "bad\ntoken").is_err());
        assert!(headers.is_empty());
    }
}
