use std::time::Duration;

/// Serverless function that proxies the Riot account, summoner and mastery endpoints.
pub const DEFAULT_ENDPOINT: &str = "https://vd4mgoxi5ukhybct4ht4gaqbwe0qpmqh.lambda-url.us-east-1.on.aws/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    /// Deadline per attempt. Expiry counts as a transport failure.
    pub timeout: Duration,
    /// Extra attempts after the first one, 0 disables retrying.
    pub max_retries: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: 0,
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }
}
