//! Solvers resource — read-only solver discovery.

use tracing::instrument;

use quench_types::SolverConfiguration;

use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::resources::decode;
use crate::transport::{HttpTransport, Transport};

/// Client for the `solvers/` resource.
#[derive(Debug)]
pub struct Solvers<T: Transport = HttpTransport> {
    transport: T,
}

impl Solvers<HttpTransport> {
    /// Build a solvers resource over an authenticated HTTP transport.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        Ok(Self {
            transport: HttpTransport::new(config, "solvers/")?,
        })
    }
}

impl<T: Transport> Solvers<T> {
    /// Build a solvers resource over an injected transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    // Content-Type: application/vnd.quench.sapi.solver-definition-list+json; version=2.0.0
    /// List all solvers visible to this account.
    #[instrument(skip(self))]
    pub async fn list_solvers(&self) -> ApiResult<Vec<SolverConfiguration>> {
        let raw = self.transport.get("remote/", &[]).await?;
        decode(raw, "solver definition list")
    }

    // Content-Type: application/vnd.quench.sapi.solver-definition+json; version=2.0.0
    /// Retrieve one solver's configuration by ID.
    #[instrument(skip(self))]
    pub async fn get_solver(&self, solver_id: &str) -> ApiResult<SolverConfiguration> {
        let raw = self.transport.get(&format!("remote/{solver_id}"), &[]).await?;
        decode(raw, "solver definition")
    }
}
