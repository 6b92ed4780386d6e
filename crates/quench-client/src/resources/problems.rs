//! Problems resource — submission, monitoring, retrieval, cancellation.
//!
//! ## Batch result model
//!
//! Batch submit and batch cancel answer with one JSON object per requested
//! item. Each object is classified independently: an object carrying a
//! `status` key decodes as the success variant, anything else as the
//! matching error variant. A single response routinely mixes both, so
//! elements are decoded one at a time instead of assuming a uniform array
//! shape. The result sequence always has the same length and order as the
//! request.
//!
//! ## Blocking submit
//!
//! [`Problems::submit_problem`] is the one call that can hold the task for
//! a server-controlled duration: the service keeps the request open until
//! the problem resolves or an undisclosed time limit passes. Callers
//! needing a bound must layer their own timeout around the call.

use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::instrument;

use quench_types::{
    CancelOutcome, ProblemAnswer, ProblemData, ProblemInfo, ProblemJob, ProblemMessage,
    ProblemStatus, ProblemStatusCode, ProblemStatusMaybeWithAnswer, ProblemType, SubmitOutcome,
};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::resources::{decode, into_elements};
use crate::transport::{HttpTransport, Transport};

/// Maximum number of problem IDs accepted per identifier-list query.
///
/// Exceeding this is a client-side contract violation; the request is
/// refused before any network call.
pub const MAX_BATCH_IDS: usize = 1000;

/// Optional filters for [`Problems::list_problems`].
#[derive(Debug, Clone, Default)]
pub struct ProblemFilter {
    id: Option<String>,
    label: Option<String>,
    max_results: Option<usize>,
    status: Option<ProblemStatusCode>,
    solver: Option<String>,
}

impl ProblemFilter {
    /// An empty filter, matching every visible problem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by problem ID (comma-separated for several).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Filter by label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Limit the number of returned statuses.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Filter by lifecycle state.
    pub fn with_status(mut self, status: ProblemStatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Filter by solver ID.
    pub fn with_solver(mut self, solver: impl Into<String>) -> Self {
        self.solver = Some(solver.into());
        self
    }

    /// Render the filter as query parameters.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(ref id) = self.id {
            query.push(("id".to_string(), id.clone()));
        }
        if let Some(ref label) = self.label {
            query.push(("label".to_string(), label.clone()));
        }
        if let Some(max_results) = self.max_results {
            query.push(("max_results".to_string(), max_results.to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.to_string()));
        }
        if let Some(ref solver) = self.solver {
            query.push(("solver".to_string(), solver.clone()));
        }
        query
    }
}

/// Classify one element of a batch response.
///
/// The success and error variants share no tag; the only discriminator is
/// whether the object carries a `status` key. This is the single point
/// where that untyped check happens.
fn classify_element<S, E, O>(
    raw: Value,
    success: impl FnOnce(S) -> O,
    failure: impl FnOnce(E) -> O,
    context: &'static str,
) -> ApiResult<O>
where
    S: DeserializeOwned,
    E: DeserializeOwned,
{
    if raw.get("status").is_some() {
        Ok(success(decode(raw, context)?))
    } else {
        Ok(failure(decode(raw, context)?))
    }
}

/// Client for the `problems/` resource.
#[derive(Debug)]
pub struct Problems<T: Transport = HttpTransport> {
    transport: T,
}

impl Problems<HttpTransport> {
    /// Build a problems resource over an authenticated HTTP transport.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        Ok(Self {
            transport: HttpTransport::new(config, "problems/")?,
        })
    }
}

impl<T: Transport> Problems<T> {
    /// Build a problems resource over an injected transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    // ─── Read operations ────────────────────────────────────────────

    // Content-Type: application/vnd.quench.sapi.problems+json; version=2.1.0
    /// List problems matching a filter.
    ///
    /// An empty result is a valid answer, not an error.
    #[instrument(skip(self, filter))]
    pub async fn list_problems(&self, filter: &ProblemFilter) -> ApiResult<Vec<ProblemStatus>> {
        let raw = self.transport.get("", &filter.to_query()).await?;
        decode(raw, "problem status list")
    }

    // Content-Type: application/vnd.quench.sapi.problem+json; version=2.1.0
    /// Retrieve one problem's short status, plus the answer if one is
    /// already available.
    #[instrument(skip(self))]
    pub async fn get_problem(&self, problem_id: &str) -> ApiResult<ProblemStatusMaybeWithAnswer> {
        let raw = self.transport.get(problem_id, &[]).await?;
        decode(raw, "problem status with answer")
    }

    // Content-Type: application/vnd.quench.sapi.problems+json; version=2.1.0
    /// Retrieve the short status of a single problem.
    #[instrument(skip(self))]
    pub async fn get_problem_status(&self, problem_id: &str) -> ApiResult<ProblemStatus> {
        let filter = ProblemFilter::new().with_id(problem_id);
        let raw = self.transport.get("", &filter.to_query()).await?;
        let statuses: Vec<ProblemStatus> = decode(raw, "problem status list")?;
        statuses
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(problem_id.to_string()))
    }

    // Content-Type: application/vnd.quench.sapi.problems+json; version=2.1.0
    /// Retrieve short statuses for a list of problems.
    ///
    /// At most [`MAX_BATCH_IDS`] IDs per call. The service does not promise
    /// that result order matches input order; associate results with
    /// requests by the returned `id` field, not by position.
    #[instrument(skip(self, problem_ids))]
    pub async fn get_problem_statuses(
        &self,
        problem_ids: &[impl AsRef<str>],
    ) -> ApiResult<Vec<ProblemStatus>> {
        if problem_ids.len() > MAX_BATCH_IDS {
            return Err(ApiError::Validation(format!(
                "number of problem ids is limited to {MAX_BATCH_IDS}"
            )));
        }

        let joined = problem_ids
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(",");
        let filter = ProblemFilter::new().with_id(joined);
        let raw = self.transport.get("", &filter.to_query()).await?;
        decode(raw, "problem status list")
    }

    // Content-Type: application/vnd.quench.sapi.problem-data+json; version=2.1.0
    /// Retrieve the complete problem record, including submitted data and
    /// params.
    #[instrument(skip(self))]
    pub async fn get_problem_info(&self, problem_id: &str) -> ApiResult<ProblemInfo> {
        let raw = self.transport.get(&format!("{problem_id}/info"), &[]).await?;
        decode(raw, "problem info")
    }

    // Content-Type: application/vnd.quench.sapi.problem-answer+json; version=2.1.0
    /// Retrieve a problem's answer.
    ///
    /// The wire shape nests the answer one level inside an
    /// `{"answer": {...}}` envelope, which is unwrapped here.
    #[instrument(skip(self))]
    pub async fn get_problem_answer(&self, problem_id: &str) -> ApiResult<ProblemAnswer> {
        let mut raw = self
            .transport
            .get(&format!("{problem_id}/answer"), &[])
            .await?;
        let answer = raw
            .as_object_mut()
            .and_then(|envelope| envelope.remove("answer"))
            .ok_or_else(|| {
                ApiError::decoding("problem answer envelope", "missing `answer` key")
            })?;
        decode(answer, "problem answer")
    }

    // Content-Type: application/vnd.quench.sapi.problem-message+json; version=2.1.0
    /// Retrieve the messages attached to a problem.
    #[instrument(skip(self))]
    pub async fn get_problem_messages(
        &self,
        problem_id: &str,
    ) -> ApiResult<Vec<ProblemMessage>> {
        let raw = self
            .transport
            .get(&format!("{problem_id}/messages"), &[])
            .await?;
        decode(raw, "problem message list")
    }

    // ─── Submission ─────────────────────────────────────────────────

    // Content-Type: application/vnd.quench.sapi.problems+json; version=2.1.0
    /// Blocking submit of exactly one problem.
    ///
    /// The service holds the request open until the problem resolves or an
    /// undisclosed time limit passes, then answers with the final status
    /// and the answer if one was produced in time. One round trip, no
    /// internal retry; a timeout surfaces as a transport error.
    #[instrument(skip(self, data, params))]
    pub async fn submit_problem(
        &self,
        data: &ProblemData,
        params: &Value,
        solver: &str,
        problem_type: ProblemType,
        label: Option<&str>,
    ) -> ApiResult<ProblemStatusMaybeWithAnswer> {
        let body = json!({
            "data": data,
            "params": params,
            "solver": solver,
            "type": problem_type,
            "label": label,
        });
        let raw = self.transport.post_json("", &body).await?;
        decode(raw, "problem status with answer")
    }

    // Content-Type: application/vnd.quench.sapi.problems+json; version=2.1.0
    /// Asynchronous batch submit, returning one outcome per job.
    ///
    /// Each job is serialized independently and the pieces concatenated
    /// into one JSON array, so enum-valued fields keep their exact
    /// per-item encoding. The response mixes accepted and rejected
    /// elements; see the module docs for the classification rule.
    #[instrument(skip(self, jobs))]
    pub async fn submit_problems(&self, jobs: &[ProblemJob]) -> ApiResult<Vec<SubmitOutcome>> {
        let pieces = jobs
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?;
        let body = format!("[{}]", pieces.join(","));

        let raw = self.transport.post_raw("", body).await?;
        into_elements(raw, "batch submit response")?
            .into_iter()
            .map(|element| {
                classify_element(
                    element,
                    SubmitOutcome::Accepted,
                    SubmitOutcome::Rejected,
                    "batch submit element",
                )
            })
            .collect()
    }

    // ─── Cancellation ───────────────────────────────────────────────

    // Content-Type: application/vnd.quench.sapi.problem+json; version=2.1.0
    /// Request cancellation of one problem.
    ///
    /// Cancellation is advisory: the returned status may already be
    /// terminal if the problem finished first.
    #[instrument(skip(self))]
    pub async fn cancel_problem(&self, problem_id: &str) -> ApiResult<ProblemStatus> {
        let raw = self
            .transport
            .delete(&format!("{problem_id}/"), None)
            .await?;
        decode(raw, "problem status")
    }

    // Content-Type: application/vnd.quench.sapi.problems+json; version=2.1.0
    /// Batch cancellation, returning one outcome per ID, in request order.
    #[instrument(skip(self, problem_ids))]
    pub async fn cancel_problems(
        &self,
        problem_ids: &[impl AsRef<str>],
    ) -> ApiResult<Vec<CancelOutcome>> {
        let ids: Vec<&str> = problem_ids.iter().map(AsRef::as_ref).collect();
        let body = serde_json::to_value(&ids)?;

        let raw = self.transport.delete("", Some(&body)).await?;
        into_elements(raw, "batch cancel response")?
            .into_iter()
            .map(|element| {
                classify_element(
                    element,
                    CancelOutcome::Cancelled,
                    CancelOutcome::Failed,
                    "batch cancel element",
                )
            })
            .collect()
    }
}
