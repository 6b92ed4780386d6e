//! Per-element results of batch operations.
//!
//! A batch submit or cancel answers with one JSON object per requested item,
//! and each object is independently either a success record or an error
//! record. These enums are the typed form of that mix: item-level failures
//! are values inside the result sequence, never request-level errors.

use crate::problem::{
    ProblemCancelError, ProblemInitialStatus, ProblemStatus, ProblemSubmitError,
};

/// Result of one element of a batch submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The job was accepted and is now pending on the service.
    Accepted(ProblemInitialStatus),
    /// The job was rejected; no problem was created for it.
    Rejected(ProblemSubmitError),
}

impl SubmitOutcome {
    /// Check if this element was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    /// The initial status, if accepted.
    pub fn status(&self) -> Option<&ProblemInitialStatus> {
        match self {
            SubmitOutcome::Accepted(s) => Some(s),
            SubmitOutcome::Rejected(_) => None,
        }
    }

    /// Convert into a `Result`, surfacing the rejection as the error side.
    pub fn into_result(self) -> Result<ProblemInitialStatus, ProblemSubmitError> {
        match self {
            SubmitOutcome::Accepted(s) => Ok(s),
            SubmitOutcome::Rejected(e) => Err(e),
        }
    }
}

/// Result of one element of a batch cancel.
#[derive(Debug, Clone, PartialEq)]
pub enum CancelOutcome {
    /// Cancellation was recorded; the returned status may already be
    /// terminal, since cancellation is advisory.
    Cancelled(ProblemStatus),
    /// The service could not act on this ID.
    Failed(ProblemCancelError),
}

impl CancelOutcome {
    /// Check if this element's cancellation was recorded.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CancelOutcome::Cancelled(_))
    }

    /// The resulting status, if the cancellation was recorded.
    pub fn status(&self) -> Option<&ProblemStatus> {
        match self {
            CancelOutcome::Cancelled(s) => Some(s),
            CancelOutcome::Failed(_) => None,
        }
    }

    /// Convert into a `Result`, surfacing the failure as the error side.
    pub fn into_result(self) -> Result<ProblemStatus, ProblemCancelError> {
        match self {
            CancelOutcome::Cancelled(s) => Ok(s),
            CancelOutcome::Failed(e) => Err(e),
        }
    }
}
