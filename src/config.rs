//! Configuration types for remote-feed

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// HTTP transport settings used by [`ReqwestHttpClient`](crate::http::ReqwestHttpClient)
///
/// Timeouts belong to the transport; the loader itself never times out.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Total request timeout in seconds, including reading the body (default: 30)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// TCP/TLS connect timeout in seconds (default: 10)
    #[serde(default = "default_connect_timeout", with = "duration_serde")]
    pub connect_timeout: Duration,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Main configuration for a remote feed loader
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint serving the `{"items": [...]}` document
    pub feed_url: String,

    /// Transport settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Create a configuration for `feed_url` with default transport settings
    pub fn new(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
            http: HttpConfig::default(),
        }
    }

    /// Parse a JSON configuration document and validate it
    ///
    /// # Errors
    /// Returns `Error::Serialization` for malformed JSON and `Error::Config`
    /// if any value fails [`Config::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every setting, returning the first violation
    ///
    /// # Errors
    /// Returns `Error::Config` naming the offending key.
    pub fn validate(&self) -> Result<()> {
        self.parsed_feed_url()?;

        if self.http.timeout.is_zero() {
            return Err(Error::config("http.timeout", "timeout must be non-zero"));
        }
        if self.http.connect_timeout.is_zero() {
            return Err(Error::config(
                "http.connect_timeout",
                "connect timeout must be non-zero",
            ));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(Error::config("http.user_agent", "user agent must not be empty"));
        }

        Ok(())
    }

    /// The feed URL, parsed and restricted to http/https
    ///
    /// # Errors
    /// Returns `Error::Config` if the URL is not absolute or uses another scheme.
    pub fn parsed_feed_url(&self) -> Result<Url> {
        let url = Url::parse(&self.feed_url).map_err(|e| {
            Error::config("feed_url", format!("invalid URL '{}': {}", self.feed_url, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(Error::config(
                "feed_url",
                format!("unsupported scheme '{}' (expected http or https)", scheme),
            )),
        }
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_user_agent() -> String {
    format!("remote-feed/{}", env!("CARGO_PKG_VERSION"))
}

// Durations as (possibly fractional) seconds, so sub-second timeouts survive a round trip
mod duration_serde {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs)
            .map_err(|e| D::Error::custom(format!("invalid duration {}: {}", secs, e)))
    }
}
