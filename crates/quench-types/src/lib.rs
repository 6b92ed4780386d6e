//! Wire-format records for the Quench solver API (SAPI).
//!
//! Everything in this crate is a plain serde record constructed from (or
//! serialized into) the JSON bodies SAPI exchanges. Records carry no
//! behavior beyond field validation and a few status predicates; all
//! request orchestration lives in `quench-client`.
//!
//! # Record families
//!
//! - [`SolverConfiguration`] — read-only solver identity + capabilities.
//! - [`ProblemStatus`] and friends — lifecycle state of a submitted problem,
//!   only ever produced from server responses.
//! - [`ProblemJob`] — the one caller-constructed record, describing a
//!   submission before it has an identity.
//! - [`SubmitOutcome`] / [`CancelOutcome`] — per-element results of batch
//!   operations, where each element is independently either a success
//!   record or an error record.

mod constants;
mod outcome;
mod problem;
mod solver;

pub use constants::{ProblemStatusCode, ProblemType};
pub use outcome::{CancelOutcome, SubmitOutcome};
pub use problem::{
    ProblemAnswer, ProblemCancelError, ProblemData, ProblemInfo, ProblemInitialStatus,
    ProblemJob, ProblemMessage, ProblemMetadata, ProblemStatus, ProblemStatusMaybeWithAnswer,
    ProblemSubmitError,
};
pub use solver::SolverConfiguration;
