//! Integration tests for résumé forwarding
//!
//! Each test starts a throwaway axum server on an ephemeral port that plays
//! the professionals API, then points an [`UploadClient`] at it.

use axum::{
    extract::Multipart,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use upload_service::{UploadClient, UploadConfig, UploadError, UploadFile};

const UPLOAD_ROUTE: &str = "/professionals/hv/upload";

/// Serves `router` on 127.0.0.1 and returns its base URL
async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base_url: &str) -> UploadClient {
    UploadClient::new(&UploadConfig::default().with_api_url(base_url)).unwrap()
}

fn sample_file() -> UploadFile {
    UploadFile::new(
        "hoja-de-vida.pdf",
        Some("application/pdf".to_string()),
        b"%PDF-1.7 sample".to_vec(),
    )
}

async fn echo_upload(mut multipart: Multipart) -> impl IntoResponse {
    let mut received = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.unwrap();
        received.push(json!({
            "field": name,
            "fileName": file_name,
            "contentType": content_type,
            "size": bytes.len(),
        }));
    }

    (StatusCode::CREATED, Json(json!({ "id": 42, "received": received })))
}

#[tokio::test]
async fn forwards_file_as_multipart_and_returns_payload() {
    let base = spawn_upstream(Router::new().route(UPLOAD_ROUTE, post(echo_upload))).await;
    let client = client_for(&base);

    let result = client.upload(sample_file()).await;

    assert!(result.ok, "unexpected failure: {:?}", result.error);
    assert!(result.error.is_none());
    let data = result.data.unwrap();
    assert_eq!(data["id"], 42);
    assert_eq!(data["received"][0]["field"], "file");
    assert_eq!(data["received"][0]["fileName"], "hoja-de-vida.pdf");
    assert_eq!(data["received"][0]["contentType"], "application/pdf");
    assert_eq!(data["received"][0]["size"], 15);
}

#[tokio::test]
async fn base_url_with_trailing_slash_reaches_the_same_route() {
    let base = spawn_upstream(Router::new().route(UPLOAD_ROUTE, post(echo_upload))).await;
    let client = client_for(&format!("{base}/"));

    let result = client.upload(sample_file()).await;
    assert!(result.ok);
}

#[tokio::test]
async fn text_payload_is_passed_through_as_string() {
    let router = Router::new().route(UPLOAD_ROUTE, post(|| async { "recibido" }));
    let base = spawn_upstream(router).await;

    let result = client_for(&base).upload(sample_file()).await;

    assert!(result.ok);
    assert_eq!(result.data, Some(Value::String("recibido".to_string())));
}

#[tokio::test]
async fn json_rejection_surfaces_api_message() {
    let router = Router::new().route(
        UPLOAD_ROUTE,
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "message": "Formato de archivo no permitido" })),
            )
        }),
    );
    let base = spawn_upstream(router).await;
    let client = client_for(&base);

    let result = client.upload(sample_file()).await;
    assert!(!result.ok);
    assert!(result.data.is_none());
    assert_eq!(result.error.as_deref(), Some("Formato de archivo no permitido"));

    match client.try_upload(sample_file()).await {
        Err(UploadError::Rejected { status, .. }) => assert_eq!(status, 422),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn text_rejection_falls_back_to_status_line() {
    let router = Router::new().route(
        UPLOAD_ROUTE,
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "mantenimiento") }),
    );
    let base = spawn_upstream(router).await;

    let result = client_for(&base).upload(sample_file()).await;

    assert!(!result.ok);
    assert_eq!(result.error.as_deref(), Some("Error 503: Service Unavailable"));
}

#[tokio::test]
async fn json_rejection_without_message_falls_back_to_status_line() {
    let router = Router::new().route(
        UPLOAD_ROUTE,
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "code": "E42" }))) }),
    );
    let base = spawn_upstream(router).await;

    let result = client_for(&base).upload(sample_file()).await;
    assert_eq!(result.error.as_deref(), Some("Error 500: Internal Server Error"));
}

#[tokio::test]
async fn unknown_route_is_a_rejection() {
    let base = spawn_upstream(Router::new()).await;

    let result = client_for(&base).upload(sample_file()).await;
    assert_eq!(result.error.as_deref(), Some("Error 404: Not Found"));
}

#[tokio::test]
async fn connection_failure_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{addr}"));
    let outcome = client.try_upload(sample_file()).await;

    match outcome {
        Err(UploadError::Network(message)) => assert!(!message.is_empty()),
        other => panic!("expected network error, got {other:?}"),
    }

    let result = client.upload(sample_file()).await;
    assert!(!result.ok);
    assert!(result.error.is_some());
}

#[tokio::test]
async fn invalid_content_type_is_rejected_before_sending() {
    let client = client_for("http://127.0.0.1:9");
    let file = UploadFile::new("cv.pdf", Some("not a mime".to_string()), Vec::new());

    let outcome = client.try_upload(file).await;
    assert!(matches!(outcome, Err(UploadError::InvalidFile(_))));
}
