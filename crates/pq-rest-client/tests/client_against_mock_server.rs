// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use pq_client_api::{ClientApiError, JobQueueApi};
use pq_domain_types::{TaskStatus, TaskType};
use pq_mock_server::{new_task, MockQueueServer};
use pq_rest_api_contract::JobResponse;
use pq_rest_client::{ClientConfig, QueueClient, RestClientError};
use reqwest::StatusCode;
use serde_json::json;

async fn setup() -> (MockQueueServer, QueueClient) {
    let server = MockQueueServer::spawn().await.unwrap();
    let client = QueueClient::from_url(&server.base_url()).unwrap();
    (server, client)
}

#[tokio::test]
async fn test_list_empty_queue() {
    let (server, client) = setup().await;
    assert!(client.list_jobs().await.unwrap().is_empty());

    let requests = server.state().requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/jobs");
    assert_eq!(requests[0].query, None);
}

#[tokio::test]
async fn test_enqueue_sends_canonical_type() {
    let (server, client) = setup().await;
    let response = client.enqueue_job("hello", "sms").await.unwrap();

    let requests = server.state().requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/enqueue");
    assert_eq!(
        requests[0].body,
        Some(json!({"payload": "hello", "t_type": "SMS"}))
    );

    let message = response.message().expect("enqueue is acknowledged with a message");
    assert!(message.ends_with("(Payload: hello, Type: SMS) enqueued!"));

    let jobs = server.state().jobs().await;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].task_type, "SMS");
    assert_eq!(jobs[0].status, "QUEUED");
}

#[tokio::test]
async fn test_every_key_reaches_backend_as_canonical_name() {
    let (server, client) = setup().await;
    let cases = [
        ("data-cleanup", "DATACLEANUP"),
        ("takes-long", "TAKESLONG"),
        ("fail-absolute", "FAILABS"),
    ];
    for (key, canonical) in cases {
        client.enqueue_job("p", key).await.unwrap();
        let last = server.state().requests().await.pop().unwrap();
        assert_eq!(last.body.unwrap()["t_type"], canonical);
    }
}

#[tokio::test]
async fn test_unknown_type_makes_no_request() {
    let (server, client) = setup().await;
    let err = client.enqueue_job("hello", "urgent").await.unwrap_err();
    assert_eq!(err.to_string(), "Unknown task type 'urgent'.");
    assert_eq!(server.state().request_count().await, 0);
}

#[tokio::test]
async fn test_delete_missing_job() {
    let (server, client) = setup().await;
    let err = client.delete_job("abc123").await.unwrap_err();

    assert!(err.to_string().contains("abc123"));
    assert_eq!(err.to_string(), "Failed to delete job (ID: abc123).");
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(
        err.detail(),
        Some("Job abc123 not found. Could not be deleted.")
    );
    assert_eq!(server.state().request_count().await, 1);
}

#[tokio::test]
async fn test_get_job_returns_fields_verbatim() {
    let (server, client) = setup().await;
    let mut seeded = new_task("quarterly", TaskType::Report);
    seeded.status = "SOMETHING_NEW".to_string();
    seeded.created_at = "2024-01-02T03:04:05+02:00".to_string();
    seeded.extra.insert("worker".to_string(), json!("w-7"));
    seeded.extra.insert("attempts".to_string(), json!(3));
    server.state().seed(seeded.clone()).await;

    let fetched = client.get_job(&seeded.id).await.unwrap();
    assert_eq!(fetched, seeded);
    assert_eq!(fetched.parsed_status(), None);
    assert_eq!(fetched.parsed_type(), Some(TaskType::Report));
}

#[tokio::test]
async fn test_get_missing_job() {
    let (_server, client) = setup().await;
    let err = client.get_job("nope").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to return data for specific job (ID: nope)."
    );
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_id_is_a_single_path_segment() {
    let (server, client) = setup().await;
    let _ = client.get_job("a/b?c").await;

    let requests = server.state().requests().await;
    assert_eq!(requests[0].path, "/api/jobs/a%2Fb%3Fc");
    assert_eq!(requests[0].query, None);
}

#[tokio::test]
async fn test_retry_failed_job() {
    let (server, client) = setup().await;
    let failed = server
        .state()
        .seed_job("nightly", TaskType::DataCleanup, TaskStatus::Failed)
        .await;

    let response = client.retry_job(&failed.id).await.unwrap();
    let retried = response.as_task().unwrap();
    assert_ne!(retried.id, failed.id);
    assert_eq!(retried.payload, "nightly");
    assert_eq!(retried.task_type, "DATACLEANUP");
    assert_eq!(retried.status, "QUEUED");

    let requests = server.state().requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, format!("/api/jobs/{}/retry", failed.id));
}

#[tokio::test]
async fn test_retry_rejects_job_that_has_not_failed() {
    let (server, client) = setup().await;
    let queued = server
        .state()
        .seed_job("p", TaskType::Email, TaskStatus::Queued)
        .await;

    let err = client.retry_job(&queued.id).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Failed to retry job (ID: {}).", queued.id));
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn test_clear_queue() {
    let (server, client) = setup().await;
    client.enqueue_job("a", "email").await.unwrap();
    client.enqueue_job("b", "newsletter").await.unwrap();

    let response = client.clear_queue().await.unwrap();
    assert_eq!(response.message(), Some("All jobs in the queue cleared!"));
    assert!(client.list_jobs().await.unwrap().is_empty());
    assert!(server.state().jobs().await.is_empty());
}

#[tokio::test]
async fn test_delete_acknowledgement_is_passed_through() {
    let (server, client) = setup().await;
    let task = server.state().enqueue("p", TaskType::Sms).await;

    let response = client.delete_job(&task.id).await.unwrap();
    assert!(matches!(response, JobResponse::Message(_)));
    assert_eq!(response.message(), Some(format!("Job {} deleted!", task.id).as_str()));
}

#[tokio::test]
async fn test_list_with_status_filter() {
    let (server, client) = setup().await;
    let state = server.state();
    state.seed_job("a", TaskType::Email, TaskStatus::Completed).await;
    let failed = state.seed_job("b", TaskType::Fail, TaskStatus::Failed).await;
    state.seed_job("c", TaskType::Sms, TaskStatus::Queued).await;

    let jobs = client
        .list_jobs_with_status(Some(TaskStatus::Failed))
        .await
        .unwrap();
    assert_eq!(jobs, vec![failed]);

    let all = client.list_jobs().await.unwrap();
    let payloads: Vec<&str> = all.iter().map(|t| t.payload.as_str()).collect();
    assert_eq!(payloads, ["a", "b", "c"]);

    let requests = state.requests().await;
    assert_eq!(requests[0].query.as_deref(), Some("status=FAILED"));
}

#[tokio::test]
async fn test_forced_failures_name_the_operation() {
    let (server, client) = setup().await;
    server
        .state()
        .force_status(Some(StatusCode::INTERNAL_SERVER_ERROR))
        .await;

    let errors = vec![
        client.list_jobs().await.unwrap_err(),
        client.get_job("j1").await.unwrap_err(),
        client.enqueue_job("hello", "report").await.unwrap_err(),
        client.delete_job("j2").await.unwrap_err(),
        client.retry_job("j3").await.unwrap_err(),
        client.clear_queue().await.unwrap_err(),
        client.health().await.unwrap_err(),
    ];
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        [
            "Failed to return data for all jobs.",
            "Failed to return data for specific job (ID: j1).",
            "Failed to enqueue new job (payload: hello, type: REPORT).",
            "Failed to delete job (ID: j2).",
            "Failed to retry job (ID: j3).",
            "Failed to clear the queue.",
            "Failed to reach the queue service.",
        ]
    );
    for err in &errors {
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.detail(), Some("Injected failure"));
    }
    assert_eq!(server.state().request_count().await, errors.len());
}

#[tokio::test]
async fn test_health() {
    let (_server, client) = setup().await;
    assert_eq!(client.health().await.unwrap(), json!({"message": "Hello World"}));
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
    let server = MockQueueServer::spawn().await.unwrap();
    let config = ClientConfig::new(&format!("{}///", server.base_url())).unwrap();
    let client = QueueClient::new(config).unwrap();

    client.list_jobs().await.unwrap();
    assert_eq!(server.state().requests().await[0].path, "/api/jobs");
}

#[tokio::test]
async fn test_trait_maps_errors() {
    let (server, client) = setup().await;
    let api: &dyn JobQueueApi = &client;

    let err = api.enqueue_job("hello", "urgent").await.unwrap_err();
    assert!(matches!(
        err,
        ClientApiError::UnknownTaskType(ref m) if m == "Unknown task type 'urgent'."
    ));

    let err = api.delete_job("abc123").await.unwrap_err();
    assert!(matches!(
        err,
        ClientApiError::Server(ref m) if m == "Failed to delete job (ID: abc123)."
    ));

    api.enqueue_job("hello", "email").await.unwrap();
    let id = server.state().jobs().await[0].id.clone();
    assert_eq!(api.get_job(&id).await.unwrap().payload, "hello");
    assert_eq!(server.state().request_count().await, 3);
}

#[tokio::test]
async fn test_unserved_prefix_is_a_remote_error() {
    let server = MockQueueServer::spawn().await.unwrap();
    let client = QueueClient::from_url(&format!("{}/v2", server.base_url())).unwrap();

    let err = client.list_jobs().await.unwrap_err();
    assert!(matches!(err, RestClientError::Remote { .. }));
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}
