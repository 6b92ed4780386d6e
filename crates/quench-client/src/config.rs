//! Client configuration.
//!
//! A [`ClientConfig`] is a plain value, fully resolved before any transport
//! is built from it. Resources derive their scoped base URL from the
//! endpoint exactly once at construction; nothing mutates shared session
//! state afterwards.

use std::time::Duration;

use crate::error::{ApiError, ApiResult};

/// Default SAPI endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://cloud.quench.dev/sapi/v2";

/// Environment variable holding the API token.
pub const ENV_TOKEN: &str = "QUENCH_API_TOKEN";

/// Environment variable overriding the API endpoint.
pub const ENV_ENDPOINT: &str = "QUENCH_API_ENDPOINT";

/// User agent sent with every request.
const USER_AGENT: &str = concat!("quench-client/", env!("CARGO_PKG_VERSION"));

/// Connection settings for a SAPI client.
#[derive(Clone)]
pub struct ClientConfig {
    /// API endpoint, without a trailing slash.
    pub endpoint: String,
    /// API token (sent as `X-Auth-Token`).
    pub token: String,
    /// Overall request timeout.
    ///
    /// Must comfortably exceed the service's blocking-submit hold time,
    /// which the service does not disclose.
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// User agent header value.
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration for the default endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: token.into(),
            timeout: Duration::from_secs(120),
            connect_timeout: Duration::from_secs(10),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Read token (and optionally endpoint) from the environment.
    pub fn from_env() -> ApiResult<Self> {
        let token = std::env::var(ENV_TOKEN).map_err(|_| ApiError::MissingToken)?;
        let mut config = Self::new(token);
        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
            config = config.with_endpoint(endpoint);
        }
        Ok(config)
    }

    /// Override the endpoint (for private deployments and testing).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the overall request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate that the configuration can authenticate.
    pub(crate) fn check(&self) -> ApiResult<()> {
        if self.token.is_empty() {
            return Err(ApiError::MissingToken);
        }
        Ok(())
    }
}
