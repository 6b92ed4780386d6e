//! REST client for the Quench quantum-annealing solver API (SAPI).
//!
//! This crate binds the SAPI `solvers/` and `problems/` resources to typed
//! async operations: discovering solvers, then submitting, monitoring,
//! retrieving, and cancelling problems on them.
//!
//! # Architecture
//!
//! - [`ClientConfig`] resolves endpoint, token, and timeouts once.
//! - [`Transport`] is the HTTP seam; [`HttpTransport`] is the `reqwest`
//!   implementation, scoped to one resource path at construction. Resources
//!   are generic over the trait so tests inject doubles.
//! - [`Problems`] and [`Solvers`] expose the resource operations and decode
//!   untyped response JSON into the records of `quench-types`.
//!
//! Every operation is a single, stateless round trip. There is no retry,
//! backoff, or client-side polling here; callers that want those layer them
//! on top.
//!
//! # Batch semantics
//!
//! Batch submit and cancel return one element per requested item, in
//! request order, where each element is independently a success record or
//! an error record ([`SubmitOutcome`] / [`CancelOutcome`]). Item-level
//! failures are values, not errors: only request-level problems (validation,
//! transport, malformed responses) surface as [`ApiError`].
//!
//! # Example
//!
//! ```ignore
//! use quench_client::{Client, ClientConfig, ProblemFilter};
//! use quench_types::{ProblemData, ProblemJob, ProblemType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::from_env()?;
//!
//!     let solvers = client.solvers()?.list_solvers().await?;
//!     let solver = solvers.first().expect("no solvers visible");
//!
//!     let jobs = vec![
//!         ProblemJob::new(
//!             ProblemData::qp("bGlu", "cXVhZA=="),
//!             serde_json::json!({"num_reads": 100}),
//!             &solver.id,
//!             ProblemType::Ising,
//!         )
//!         .with_label("first"),
//!     ];
//!
//!     let problems = client.problems()?;
//!     for outcome in problems.submit_problems(&jobs).await? {
//!         match outcome.into_result() {
//!             Ok(status) => println!("accepted: {}", status.id),
//!             Err(err) => println!("rejected: {}", err.error_msg),
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod resources;
mod transport;
pub mod util;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_ENDPOINT, ENV_ENDPOINT, ENV_TOKEN};
pub use error::{ApiError, ApiResult};
pub use resources::{MAX_BATCH_IDS, ProblemFilter, Problems, Solvers};
pub use transport::{HttpTransport, Transport};

// Re-exported so downstream callers need only one dependency.
pub use quench_types as types;
pub use quench_types::{CancelOutcome, SubmitOutcome};
