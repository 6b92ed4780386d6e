//! Top-level client facade.

use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::resources::{Problems, Solvers};
use crate::transport::HttpTransport;

/// Entry point holding a resolved [`ClientConfig`] and minting scoped
/// resources from it.
///
/// Resources built from the same client share configuration but not
/// transport state; each carries its own resource-scoped base URL, fixed
/// at construction.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
}

impl Client {
    /// Create a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        config.check()?;
        Ok(Self { config })
    }

    /// Create a client from the environment (`QUENCH_API_TOKEN`,
    /// optionally `QUENCH_API_ENDPOINT`).
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// A problems resource scoped to `problems/`.
    pub fn problems(&self) -> ApiResult<Problems<HttpTransport>> {
        Problems::new(&self.config)
    }

    /// A solvers resource scoped to `solvers/`.
    pub fn solvers(&self) -> ApiResult<Solvers<HttpTransport>> {
        Solvers::new(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_client_rejects_empty_token() {
        let result = Client::new(ClientConfig::new(""));
        assert!(matches!(result, Err(ApiError::MissingToken)));
    }

    #[test]
    fn test_client_mints_resources() {
        let client = Client::new(
            ClientConfig::new("tok").with_endpoint("https://sapi.example.com/v2"),
        )
        .unwrap();
        assert!(client.problems().is_ok());
        assert!(client.solvers().is_ok());
    }
}
