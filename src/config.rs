use std::time::Duration;

use crate::constants::{DEFAULT_PORT, DEFAULT_REVALIDATE_SECS};

/// Process-wide settings, parsed once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Upstream menu endpoint. Missing is not fatal, every render reports it instead.
    pub api_url: Option<String>,
    pub bind: String,
    pub port: u16,
    /// How long a successful page fetch is reused. Zero disables the cache.
    pub revalidate: Duration,
    /// Overall timeout for the upstream request, none by default.
    pub upstream_timeout: Option<Duration>,
}

impl Config {
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            bind: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            revalidate: Duration::from_secs(DEFAULT_REVALIDATE_SECS),
            upstream_timeout: None,
        }
    }
}
