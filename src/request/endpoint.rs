use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::error::Result;

/// What a concrete HMRC endpoint contributes to a [`super::Request`].
///
/// The method is fixed per endpoint type. The path may embed endpoint state
/// (a VRN, a period key, ...) and must start with `/`; it is appended to the
/// base URL as-is.
pub trait Endpoint: Send + Sync {
    fn method(&self) -> Method;

    fn api_path(&self) -> String;

    /// Adds endpoint-specific headers after the `Accept` header is set.
    ///
    /// Nothing is added by default, authorization included. Restricted
    /// endpoints insert their own, usually via [`super::headers::insert_bearer`].
    fn headers(&self, _headers: &mut HeaderMap) -> Result<()> {
        Ok(())
    }
}
