use std::time::Duration;

use crate::constants::{DEFAULT_SEARCH_TIMEOUT_SECS, DEFAULT_SEARCH_URL};

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub url: String,

    pub timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SEARCH_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS),
        }
    }
}

impl SearchConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
