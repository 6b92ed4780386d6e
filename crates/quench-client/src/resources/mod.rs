//! Typed SAPI resources.
//!
//! Each resource owns a [`Transport`](crate::transport::Transport) scoped to
//! its base path and exposes the operations of that path as typed methods.
//! Every operation is one stateless round trip; decoding failures become
//! [`ApiError::Decoding`] rather than surfacing as raw serde errors.

mod problems;
mod solvers;

pub use problems::{MAX_BATCH_IDS, ProblemFilter, Problems};
pub use solvers::Solvers;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Decode a JSON body into a typed record, naming the shape on failure.
pub(crate) fn decode<T: DeserializeOwned>(raw: Value, context: &'static str) -> ApiResult<T> {
    serde_json::from_value(raw).map_err(|e| ApiError::decoding(context, e.to_string()))
}

/// Split a JSON body into array elements, or fail with a decoding error.
pub(crate) fn into_elements(raw: Value, context: &'static str) -> ApiResult<Vec<Value>> {
    match raw {
        Value::Array(items) => Ok(items),
        other => Err(ApiError::decoding(
            context,
            format!("expected a JSON array, got {other}"),
        )),
    }
}
