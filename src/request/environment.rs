use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Base URL of the HMRC sandbox.
pub const URL_SANDBOX: &str = "https://test-api.service.hmrc.gov.uk";

/// Base URL of the HMRC production API.
pub const URL_LIVE: &str = "https://api.service.hmrc.gov.uk";

/// The two HMRC deployments a request can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Sandbox,
    Live,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Sandbox => URL_SANDBOX,
            Environment::Live => URL_LIVE,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => f.write_str("sandbox"),
            Environment::Live => f.write_str("live"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown HMRC environment `{0}` (expected `sandbox` or `live`)")]
pub struct UnknownEnvironment(pub String);

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "live" => Ok(Environment::Live),
            _ => Err(UnknownEnvironment(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_urls() {
        assert_eq!(
            Environment::Sandbox.base_url(),
            "https://test-api.service.hmrc.gov.uk"
        );
        assert_eq!(Environment::Live.base_url(), "https://api.service.hmrc.gov.uk");
        assert_eq!(Environment::default(), Environment::Sandbox);
    }

    #[test]
    fn test_parse() {
        assert_eq!("sandbox".parse::<Environment>(), Ok(Environment::Sandbox));
        assert_eq!(" LIVE ".parse::<Environment>(), Ok(Environment::Live));
        assert_eq!(
            "staging".parse::<Environment>(),
            Err(UnknownEnvironment("staging".to_string()))
        );
        assert_eq!(Environment::Live.to_string(), "live");
    }
}
