//! Enumerated wire constants shared across problem records.

use serde::{Deserialize, Serialize};

/// Problem encoding accepted by SAPI solvers.
///
/// Serialized lowercase on the wire (`"ising"`, `"qubo"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemType {
    /// Ising spin model (linear + quadratic biases over {-1, +1}).
    Ising,
    /// Quadratic unconstrained binary optimization.
    Qubo,
    /// Binary quadratic model (serialized dimod-style payload).
    Bqm,
    /// Constrained quadratic model.
    Cqm,
    /// Discrete quadratic model.
    Dqm,
}

impl std::fmt::Display for ProblemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProblemType::Ising => "ising",
            ProblemType::Qubo => "qubo",
            ProblemType::Bqm => "bqm",
            ProblemType::Cqm => "cqm",
            ProblemType::Dqm => "dqm",
        };
        write!(f, "{s}")
    }
}

/// Lifecycle state of a submitted problem, as reported by the service.
///
/// Serialized SCREAMING_SNAKE_CASE on the wire (`"PENDING"`,
/// `"IN_PROGRESS"`, ...). Transitions are server-side and monotonic; the
/// client only ever observes these values, never sets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemStatusCode {
    /// Accepted and queued, not yet picked up by the solver.
    Pending,
    /// Running on the solver.
    InProgress,
    /// Solved; an answer is (or will shortly be) retrievable.
    Completed,
    /// Terminated with a solver-side error.
    Failed,
    /// Cancelled before completion.
    Cancelled,
}

impl ProblemStatusCode {
    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProblemStatusCode::Completed | ProblemStatusCode::Failed | ProblemStatusCode::Cancelled
        )
    }

    /// Check if the problem is still pending (queued or in progress).
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            ProblemStatusCode::Pending | ProblemStatusCode::InProgress
        )
    }
}

impl std::fmt::Display for ProblemStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProblemStatusCode::Pending => "PENDING",
            ProblemStatusCode::InProgress => "IN_PROGRESS",
            ProblemStatusCode::Completed => "COMPLETED",
            ProblemStatusCode::Failed => "FAILED",
            ProblemStatusCode::Cancelled => "CANCELLED",
        };
        write!(f, "{s}")
    }
}
