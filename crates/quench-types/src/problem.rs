//! Problem lifecycle records.
//!
//! All of these are deserialized from SAPI responses except [`ProblemJob`],
//! which the caller builds and the client serializes into a submission body.
//! Optional response fields default to `None` rather than failing the whole
//! record, so additive server-side changes stay backward compatible.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{ProblemStatusCode, ProblemType};

/// Problem payload in one of the SAPI data formats.
///
/// The `qp` format carries base64-encoded linear/quadratic bias vectors
/// inline; the `ref` format points at data uploaded out of band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemData {
    /// Data format tag: `"qp"` or `"ref"`.
    pub format: String,
    /// Base64-encoded linear biases (`qp` format).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lin: Option<String>,
    /// Base64-encoded quadratic biases (`qp` format).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quad: Option<String>,
    /// Constant energy offset (`qp` format).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    /// Reference to uploaded problem data (`ref` format).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl ProblemData {
    /// Inline `qp`-format data from pre-encoded bias vectors.
    pub fn qp(lin: impl Into<String>, quad: impl Into<String>) -> Self {
        Self {
            format: "qp".into(),
            lin: Some(lin.into()),
            quad: Some(quad.into()),
            offset: None,
            data: None,
        }
    }

    /// By-reference data pointing at a previously uploaded payload.
    pub fn by_ref(data_id: impl Into<String>) -> Self {
        Self {
            format: "ref".into(),
            lin: None,
            quad: None,
            offset: None,
            data: Some(data_id.into()),
        }
    }

    /// Set the constant energy offset.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Short status of a submitted problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemStatus {
    /// Problem ID assigned by the service.
    pub id: String,
    /// Caller-supplied label, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Current lifecycle state.
    pub status: ProblemStatusCode,
    /// Solver the problem was submitted to.
    pub solver: String,
    /// Problem encoding.
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
    /// Submission timestamp (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_on: Option<DateTime<Utc>>,
    /// Completion timestamp, present once terminal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solved_on: Option<DateTime<Utc>>,
}

/// Short status plus the answer, when one is already available.
///
/// Returned by single-problem fetch and by blocking submit. The answer is
/// absent whenever the problem is still pending or failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemStatusMaybeWithAnswer {
    /// Problem ID assigned by the service.
    pub id: String,
    /// Caller-supplied label, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Current lifecycle state.
    pub status: ProblemStatusCode,
    /// Solver the problem was submitted to.
    pub solver: String,
    /// Problem encoding.
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
    /// Submission timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_on: Option<DateTime<Utc>>,
    /// Completion timestamp, present once terminal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solved_on: Option<DateTime<Utc>>,
    /// Decoded answer, present only when the problem completed in time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<ProblemAnswer>,
}

impl ProblemStatusMaybeWithAnswer {
    /// Project onto the short status record, dropping the answer.
    pub fn status_only(&self) -> ProblemStatus {
        ProblemStatus {
            id: self.id.clone(),
            label: self.label.clone(),
            status: self.status,
            solver: self.solver.clone(),
            problem_type: self.problem_type,
            submitted_on: self.submitted_on,
            solved_on: self.solved_on,
        }
    }
}

/// Initial status of a freshly accepted problem, as returned per element
/// from a batch submit. Like [`ProblemStatus`] but never carries
/// `solved_on` — the problem has only just been queued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemInitialStatus {
    /// Problem ID assigned by the service.
    pub id: String,
    /// Caller-supplied label, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Current lifecycle state (normally `PENDING`).
    pub status: ProblemStatusCode,
    /// Solver the problem was submitted to.
    pub solver: String,
    /// Problem encoding.
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
    /// Submission timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_on: Option<DateTime<Utc>>,
}

/// Solver metadata block inside [`ProblemInfo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemMetadata {
    /// Solver the problem ran on.
    pub solver: String,
    /// Problem encoding.
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
    /// Caller-supplied label, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Current lifecycle state.
    pub status: ProblemStatusCode,
    /// Account that submitted the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
    /// Submission timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_on: Option<DateTime<Utc>>,
    /// Completion timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solved_on: Option<DateTime<Utc>>,
    /// Messages attached during processing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<ProblemMessage>,
}

/// Complete problem record: metadata plus submitted data and params.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemInfo {
    /// Problem ID.
    pub id: String,
    /// Submitted problem data.
    pub data: ProblemData,
    /// Solver parameters the problem was submitted with.
    pub params: Value,
    /// Solver metadata.
    pub metadata: ProblemMetadata,
    /// Answer, present once solved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<ProblemAnswer>,
}

/// Decoded solution payload.
///
/// On the wire this arrives nested one level inside an `{"answer": {...}}`
/// envelope; the client unwraps that envelope before constructing this
/// record. Solution vectors stay base64-encoded — decoding them into
/// numeric arrays is a higher-level concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemAnswer {
    /// Answer format tag (currently `"qp"`).
    pub format: String,
    /// Number of problem variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_variables: Option<u64>,
    /// Base64-encoded indices of active variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_variables: Option<String>,
    /// Base64-encoded packed solution vectors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solutions: Option<String>,
    /// Base64-encoded solution energies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energies: Option<String>,
    /// Base64-encoded per-solution occurrence counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_occurrences: Option<String>,
    /// Solver timing breakdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<Value>,
    /// Format-specific fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A message attached to a problem during processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemMessage {
    /// When the message was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Message text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Severity tag, if the service provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    /// Service-specific fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One unit of a batch submission, built by the caller.
///
/// Has no identity until the service accepts it and assigns an ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemJob {
    /// Problem data payload.
    pub data: ProblemData,
    /// Solver parameters (free-form, solver-specific).
    pub params: Value,
    /// Target solver ID.
    pub solver: String,
    /// Problem encoding.
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
    /// Optional human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ProblemJob {
    /// Create a submission unit for a solver.
    pub fn new(
        data: ProblemData,
        params: Value,
        solver: impl Into<String>,
        problem_type: ProblemType,
    ) -> Self {
        Self {
            data,
            params,
            solver: solver.into(),
            problem_type,
            label: None,
        }
    }

    /// Attach a human-readable label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Per-element rejection from a batch submit.
///
/// This is data, not an exception: it travels inside the result sequence
/// alongside accepted elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemSubmitError {
    /// Service error code.
    pub error_code: i32,
    /// Human-readable rejection reason.
    pub error_msg: String,
}

/// Per-element failure from a batch cancel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemCancelError {
    /// Service error code.
    pub error_code: i32,
    /// Human-readable failure reason.
    pub error_msg: String,
}
