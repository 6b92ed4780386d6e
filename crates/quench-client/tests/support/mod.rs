//! Shared test double: a scripted, call-recording transport.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use quench_client::{ApiError, ApiResult, Transport};

/// One request observed by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub params: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Transport double that replays scripted responses in order and records
/// every call it sees.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<ApiResult<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON response.
    pub fn respond_with(self, response: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queue a request-level failure.
    pub fn fail_with(self, err: ApiError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    /// Every call observed so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls observed so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(
        &self,
        method: &'static str,
        path: &str,
        params: &[(String, String)],
        body: Option<String>,
    ) {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            params: params.to_vec(),
            body,
        });
    }

    fn next_response(&self) -> ApiResult<Value> {
        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(ApiError::Api {
                status: 599,
                message: "mock transport: no scripted response left".into(),
            })
        })
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str, params: &[(String, String)]) -> ApiResult<Value> {
        self.record("GET", path, params, None);
        self.next_response()
    }

    async fn post_json(&self, path: &str, body: &Value) -> ApiResult<Value> {
        self.record("POST", path, &[], Some(body.to_string()));
        self.next_response()
    }

    async fn post_raw(&self, path: &str, body: String) -> ApiResult<Value> {
        self.record("POST", path, &[], Some(body));
        self.next_response()
    }

    async fn delete(&self, path: &str, body: Option<&Value>) -> ApiResult<Value> {
        self.record("DELETE", path, &[], body.map(Value::to_string));
        self.next_response()
    }
}

/// A short status record as the service would return it.
pub fn status_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "status": status,
        "solver": "qpu_topaz_1",
        "type": "ising",
        "submitted_on": "2026-03-01T12:00:00Z"
    })
}

/// A per-element batch error as the service would return it.
pub fn element_error_json(code: i32, msg: &str) -> Value {
    json!({"error_code": code, "error_msg": msg})
}
