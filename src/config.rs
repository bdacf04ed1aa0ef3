//! Host configuration parsed from environment variables.

use std::time::Duration;

use crate::error::ProxyError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8000/chat";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl UpstreamTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub port: u16,
    pub upstream_url: String,
    /// Crop slug sent upstream when the browser does not pick one.
    pub default_cultura: Option<String>,
    pub timeouts: UpstreamTimeouts,
}

impl ProxyConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SB100_UPSTREAM_URL`: answer service chat endpoint
    /// - `SB100_DEFAULT_CULTURA`: crop slug used when the request has none
    /// - `SB100_UPSTREAM_TIMEOUT_SECS`: default 120
    /// - `SB100_UPSTREAM_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns `ProxyError::ConfigParse` for an invalid port or upstream URL.
    pub fn from_env() -> Result<Self, ProxyError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ProxyError::ConfigParse` for an invalid port or upstream URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ProxyError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ProxyError::ConfigParse(format!("invalid PORT: {raw}")))?,
            None => DEFAULT_PORT,
        };

        let upstream_url = lookup("SB100_UPSTREAM_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());
        reqwest::Url::parse(&upstream_url)
            .map_err(|e| ProxyError::ConfigParse(format!("invalid SB100_UPSTREAM_URL '{upstream_url}': {e}")))?;

        let default_cultura = lookup("SB100_DEFAULT_CULTURA")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let timeouts = UpstreamTimeouts {
            request_secs: parse_u64(&lookup, "SB100_UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS),
            connect_secs: parse_u64(&lookup, "SB100_UPSTREAM_CONNECT_TIMEOUT_SECS", DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, upstream_url, default_cultura, timeouts })
    }
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
