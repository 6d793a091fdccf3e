use thiserror::Error;

use crate::helpers::date::InvalidDateFormat;

/// Errors surfaced by requests and helpers.
///
/// Nothing here is recovered from locally; transport failures in particular
/// are passed through exactly as the [`crate::fetch::HttpClient`] reported them.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("invalid request URI `{uri}`: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error(transparent)]
    InvalidDateFormat(#[from] InvalidDateFormat),
}

pub type Result<T> = std::result::Result<T, Error>;
