//! Scenario tests for the problems resource, driven through a scripted
//! transport double.

mod support;

use std::sync::Arc;

use serde_json::json;

use quench_client::{ApiError, MAX_BATCH_IDS, ProblemFilter, Problems};
use quench_types::{
    ProblemData, ProblemJob, ProblemStatusCode, ProblemType, SubmitOutcome,
};

use support::{MockTransport, element_error_json, status_json};

fn ising_job(label: &str) -> ProblemJob {
    ProblemJob::new(
        ProblemData::qp("bGlu", "cXVhZA=="),
        json!({"num_reads": 100}),
        "qpu_topaz_1",
        ProblemType::Ising,
    )
    .with_label(label)
}

#[tokio::test]
async fn batch_status_cap_rejected_before_any_network_call() {
    let mock = Arc::new(MockTransport::new());
    let problems = Problems::with_transport(mock.clone());

    let ids: Vec<String> = (0..=MAX_BATCH_IDS).map(|i| format!("p{i}")).collect();
    let err = problems.get_problem_statuses(&ids).await.unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert!(err.to_string().contains("1000"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn batch_statuses_join_ids_into_one_filter_value() {
    let mock = Arc::new(
        MockTransport::new().respond_with(json!([
            status_json("p2", "COMPLETED"),
            status_json("p1", "PENDING"),
        ])),
    );
    let problems = Problems::with_transport(mock.clone());

    let statuses = problems.get_problem_statuses(&["p1", "p2"]).await.unwrap();

    let call = &mock.calls()[0];
    assert_eq!(call.method, "GET");
    assert_eq!(call.params, vec![("id".to_string(), "p1,p2".to_string())]);

    // Server order is not input order; associate by id, not position.
    assert_eq!(statuses.len(), 2);
    let p1 = statuses.iter().find(|s| s.id == "p1").unwrap();
    assert_eq!(p1.status, ProblemStatusCode::Pending);
}

#[tokio::test]
async fn mixed_submit_returns_one_outcome_per_job_in_order() {
    let mock = Arc::new(
        MockTransport::new().respond_with(json!([
            status_json("p-accepted", "PENDING"),
            element_error_json(400, "solver offline"),
        ])),
    );
    let problems = Problems::with_transport(mock.clone());

    let jobs = vec![ising_job("job_a"), ising_job("job_b")];
    let outcomes = problems.submit_problems(&jobs).await.unwrap();

    assert_eq!(outcomes.len(), 2);
    match &outcomes[0] {
        SubmitOutcome::Accepted(status) => assert_eq!(status.id, "p-accepted"),
        other => panic!("expected acceptance, got {other:?}"),
    }
    match &outcomes[1] {
        SubmitOutcome::Rejected(err) => {
            assert_eq!(err.error_code, 400);
            assert_eq!(err.error_msg, "solver offline");
        }
        other => panic!("expected rejection, got {other:?}"),
    }

    // The request body is one JSON array with each job encoded in place.
    let body = mock.calls()[0].body.clone().unwrap();
    let sent: serde_json::Value = serde_json::from_str(&body).unwrap();
    let sent = sent.as_array().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0]["label"], "job_a");
    assert_eq!(sent[1]["label"], "job_b");
    assert_eq!(sent[0]["type"], "ising");
}

#[tokio::test]
async fn cancel_batch_mixed_preserves_count_and_order() {
    let mock = Arc::new(
        MockTransport::new().respond_with(json!([
            status_json("p1", "CANCELLED"),
            element_error_json(404, "no such problem"),
            status_json("p3", "COMPLETED"),
        ])),
    );
    let problems = Problems::with_transport(mock.clone());

    let outcomes = problems
        .cancel_problems(&["p1", "missing", "p3"])
        .await
        .unwrap();

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].is_cancelled());
    assert!(!outcomes[1].is_cancelled());
    // Cancellation is advisory: an already-terminal status is a success.
    assert_eq!(
        outcomes[2].status().unwrap().status,
        ProblemStatusCode::Completed
    );

    // Request body is the plain id array.
    let body = mock.calls()[0].body.clone().unwrap();
    assert_eq!(body, r#"["p1","missing","p3"]"#);
}

#[tokio::test]
async fn answer_is_unwrapped_from_envelope() {
    let mock = Arc::new(MockTransport::new().respond_with(json!({
        "answer": {
            "format": "qp",
            "num_variables": 8,
            "energies": "AQID"
        }
    })));
    let problems = Problems::with_transport(mock.clone());

    let answer = problems.get_problem_answer("p1").await.unwrap();

    assert_eq!(answer.format, "qp");
    assert_eq!(answer.num_variables, Some(8));
    assert_eq!(mock.calls()[0].path, "p1/answer");
}

#[tokio::test]
async fn answer_without_envelope_is_a_decoding_error() {
    let mock = Arc::new(
        MockTransport::new().respond_with(json!({"format": "qp"})),
    );
    let problems = Problems::with_transport(mock);

    let err = problems.get_problem_answer("p1").await.unwrap_err();
    assert!(matches!(err, ApiError::Decoding { .. }));
}

#[tokio::test]
async fn listing_with_no_matches_is_empty_not_an_error() {
    let mock = Arc::new(MockTransport::new().respond_with(json!([])));
    let problems = Problems::with_transport(mock.clone());

    let filter = ProblemFilter::new().with_status(ProblemStatusCode::Pending);
    let statuses = problems.list_problems(&filter).await.unwrap();

    assert!(statuses.is_empty());
    let call = &mock.calls()[0];
    assert_eq!(call.params, vec![("status".to_string(), "PENDING".to_string())]);
}

#[tokio::test]
async fn single_status_lookup_with_no_match_is_not_found() {
    let mock = Arc::new(MockTransport::new().respond_with(json!([])));
    let problems = Problems::with_transport(mock);

    let err = problems.get_problem_status("unknown-id").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(id) if id == "unknown-id"));
}

#[tokio::test]
async fn single_status_lookup_takes_first_match() {
    let mock = Arc::new(
        MockTransport::new().respond_with(json!([status_json("p1", "IN_PROGRESS")])),
    );
    let problems = Problems::with_transport(mock.clone());

    let status = problems.get_problem_status("p1").await.unwrap();
    assert_eq!(status.id, "p1");
    assert_eq!(
        mock.calls()[0].params,
        vec![("id".to_string(), "p1".to_string())]
    );
}

#[tokio::test]
async fn unknown_problem_surfaces_as_not_found() {
    let mock = Arc::new(
        MockTransport::new().fail_with(ApiError::NotFound("unknown-id".into())),
    );
    let problems = Problems::with_transport(mock);

    let err = problems.get_problem("unknown-id").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn blocking_submit_returns_status_with_answer() {
    let mut response = status_json("p-blocking", "COMPLETED");
    response["answer"] = json!({"format": "qp", "solutions": "AAAA"});
    let mock = Arc::new(MockTransport::new().respond_with(response));
    let problems = Problems::with_transport(mock.clone());

    let result = problems
        .submit_problem(
            &ProblemData::qp("bGlu", "cXVhZA=="),
            &json!({"num_reads": 100}),
            "qpu_topaz_1",
            ProblemType::Ising,
            Some("blocking run"),
        )
        .await
        .unwrap();

    assert_eq!(result.id, "p-blocking");
    assert_eq!(result.status, ProblemStatusCode::Completed);
    assert!(result.answer.is_some());

    let body: serde_json::Value =
        serde_json::from_str(mock.calls()[0].body.as_ref().unwrap()).unwrap();
    assert_eq!(body["solver"], "qpu_topaz_1");
    assert_eq!(body["type"], "ising");
    assert_eq!(body["label"], "blocking run");
    assert_eq!(body["data"]["format"], "qp");
}

#[tokio::test]
async fn submit_then_fetch_round_trip_matches_id() {
    let mock = Arc::new(
        MockTransport::new()
            .respond_with(json!([status_json("p-rt", "PENDING")]))
            .respond_with(json!([status_json("p-rt", "COMPLETED")])),
    );
    let problems = Problems::with_transport(mock);

    let outcomes = problems.submit_problems(&[ising_job("rt")]).await.unwrap();
    let submitted_id = outcomes[0].status().unwrap().id.clone();

    let status = problems.get_problem_status(&submitted_id).await.unwrap();
    assert_eq!(status.id, submitted_id);
}

#[tokio::test]
async fn cancel_problem_issues_delete_on_problem_path() {
    let mock = Arc::new(
        MockTransport::new().respond_with(status_json("p1", "CANCELLED")),
    );
    let problems = Problems::with_transport(mock.clone());

    let status = problems.cancel_problem("p1").await.unwrap();
    assert_eq!(status.status, ProblemStatusCode::Cancelled);

    let call = &mock.calls()[0];
    assert_eq!(call.method, "DELETE");
    assert_eq!(call.path, "p1/");
    assert!(call.body.is_none());
}

#[tokio::test]
async fn problem_info_and_messages_decode() {
    let mock = Arc::new(
        MockTransport::new()
            .respond_with(json!({
                "id": "p1",
                "data": {"format": "qp", "lin": "bGlu", "quad": "cXVhZA=="},
                "params": {"num_reads": 50},
                "metadata": {
                    "solver": "qpu_topaz_1",
                    "type": "ising",
                    "status": "COMPLETED"
                }
            }))
            .respond_with(json!([{"message": "chain strength adjusted", "severity": "INFO"}])),
    );
    let problems = Problems::with_transport(mock.clone());

    let info = problems.get_problem_info("p1").await.unwrap();
    assert_eq!(info.metadata.solver, "qpu_topaz_1");
    assert_eq!(mock.calls()[0].path, "p1/info");

    let messages = problems.get_problem_messages("p1").await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].severity.as_deref(), Some("INFO"));
    assert_eq!(mock.calls()[1].path, "p1/messages");
}

#[tokio::test]
async fn non_array_batch_response_is_a_decoding_error() {
    let mock = Arc::new(
        MockTransport::new().respond_with(json!({"unexpected": "object"})),
    );
    let problems = Problems::with_transport(mock);

    let err = problems
        .submit_problems(&[ising_job("x")])
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decoding { .. }));
}
