//! Endpoint configuration.
//!
//! The collection endpoint is a fixed constant; an environment variable can
//! override it (useful for pointing tests or staging at another server).
//! There is no config file and nothing is persisted.

use std::env;

use once_cell::sync::Lazy;
use url::Url;

use crate::error::{Result, SoapboxError};

/// Default collection endpoint for feedback items.
pub const DEFAULT_ENDPOINT: &str =
    "https://bytegrad.com/course-assets/projects/corpcomment/api/feedbacks";

/// Environment variable that overrides the collection endpoint.
pub const ENDPOINT_ENV: &str = "SOAPBOX_ENDPOINT";

static DEFAULT_ENDPOINT_URL: Lazy<Url> =
    Lazy::new(|| Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"));

#[derive(Debug, Clone)]
pub struct Config {
    /// The remote resource holding all feedback items.
    pub endpoint: Url,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT_URL.clone(),
        }
    }
}

impl Config {
    /// Load configuration, honoring the `SOAPBOX_ENDPOINT` override.
    pub fn from_env() -> Result<Self> {
        match env::var(ENDPOINT_ENV) {
            Ok(raw) => {
                let endpoint = Url::parse(&raw).map_err(|e| {
                    SoapboxError::Config(format!("invalid {ENDPOINT_ENV} '{raw}': {e}"))
                })?;
                Ok(Self { endpoint })
            }
            Err(_) => Ok(Self::default()),
        }
    }
}
