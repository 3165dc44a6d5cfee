use std::io::Write;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use segispro_server::{create_app, routes::paths, SegisproServer, ServerConfig};

fn test_app(config: ServerConfig) -> Router {
    let server = SegisproServer::new(config).expect("Failed to create test server");
    create_app(server)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .map(|v| v.to_str().unwrap().to_string());

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    (status, cache_control, json)
}

fn validate_uri(query: &str) -> String {
    format!("{}{}", paths::certificates::VALIDATE_FULL, query)
}

#[tokio::test]
async fn test_empty_uuid_is_missing_input() {
    let app = test_app(ServerConfig::default());

    let (status, cache_control, body) = get(app, &validate_uri("?uuid=")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(cache_control.is_none());
    assert_eq!(
        body,
        serde_json::json!({
            "success": false,
            "error": "Debe proporcionar un código UUID para validar"
        })
    );
}

#[tokio::test]
async fn test_absent_uuid_is_missing_input() {
    let app = test_app(ServerConfig::default());

    let (status, _, body) = get(app, paths::certificates::VALIDATE_FULL).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Debe proporcionar un código UUID para validar");
}

#[tokio::test]
async fn test_malformed_uuid_is_rejected() {
    let app = test_app(ServerConfig::default());

    let (status, cache_control, body) = get(app, &validate_uri("?uuid=not-a-uuid")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(cache_control.is_none());
    assert_eq!(
        body,
        serde_json::json!({
            "success": false,
            "error": "El formato del código UUID no es válido"
        })
    );
}

#[tokio::test]
async fn test_whitespace_only_uuid_is_malformed() {
    let app = test_app(ServerConfig::default());

    let (status, _, body) = get(app, &validate_uri("?uuid=%20%20%20")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "El formato del código UUID no es válido");
}

#[tokio::test]
async fn test_unknown_uuid_is_not_found() {
    let app = test_app(ServerConfig::default());

    let (status, cache_control, body) =
        get(app, &validate_uri("?uuid=ffffffff-ffff-ffff-ffff-ffffffffffff")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(cache_control.is_none());
    assert_eq!(
        body,
        serde_json::json!({
            "success": false,
            "error": "No se encontró ningún certificado con este código"
        })
    );
}

#[tokio::test]
async fn test_uppercase_uuid_finds_certificate() {
    let app = test_app(ServerConfig::default());

    let (status, cache_control, body) =
        get(app, &validate_uri("?uuid=A1B2C3D4-E5F6-7890-ABCD-EF1234567890")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("public, max-age=300"));
    assert_eq!(body["success"], true);

    let certificate = &body["certificado"];
    assert_eq!(certificate["id"], "a1b2c3d4-e5f6-7890-abcd-ef1234567890");
    assert_eq!(certificate["certificateCode"], "CERT-2024-001-AUD");
    assert_eq!(certificate["courseName"], "Auditor Interno ISO 9001:2015");
    assert_eq!(certificate["holderName"], "Juan Carlos Pérez Rodríguez");
    assert_eq!(certificate.as_object().unwrap().len(), 11);
}

#[tokio::test]
async fn test_surrounding_whitespace_is_ignored() {
    let app = test_app(ServerConfig::default());

    let (status, _, body) = get(
        app,
        &validate_uri("?uuid=%20b2c3d4e5-f6a7-8901-bcde-f12345678901%20"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["certificado"]["holderName"], "Ana María Gómez Torres");
}

#[tokio::test]
async fn test_repeated_uuid_uses_first_value() {
    let app = test_app(ServerConfig::default());

    let (status, _, body) = get(
        app,
        &validate_uri("?uuid=a1b2c3d4-e5f6-7890-abcd-ef1234567890&uuid=not-a-uuid"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["certificado"]["certificateCode"], "CERT-2024-001-AUD");
}

#[tokio::test]
async fn test_cache_max_age_is_configurable() {
    let app = test_app(ServerConfig {
        certificate_cache_max_age: 60,
        ..ServerConfig::default()
    });

    let (status, cache_control, _) =
        get(app, &validate_uri("?uuid=a1b2c3d4-e5f6-7890-abcd-ef1234567890")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("public, max-age=60"));
}

#[tokio::test]
async fn test_certificates_file_replaces_built_in_set() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{
            "id": "0F0E0D0C-0B0A-0908-0706-050403020100",
            "holderName": "Laura Restrepo",
            "holderIdentification": "43.210.987",
            "serviceCategory": "formacion",
            "courseName": "Trabajo Seguro en Alturas",
            "issueDate": "2 de febrero de 2025",
            "expiryDate": "2 de febrero de 2026",
            "durationLabel": "8 horas",
            "instructorName": "Ing. Pedro Salazar",
            "notes": "",
            "certificateCode": "CERT-2025-900-TSA"
        }}]"#
    )
    .unwrap();

    let config = ServerConfig {
        certificates_file: Some(file.path().to_path_buf()),
        ..ServerConfig::default()
    };

    let (status, _, body) = get(
        test_app(config.clone()),
        &validate_uri("?uuid=0f0e0d0c-0b0a-0908-0706-050403020100"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["certificado"]["certificateCode"], "CERT-2025-900-TSA");

    // Built-in records are not merged in
    let (status, _, _) = get(
        test_app(config),
        &validate_uri("?uuid=a1b2c3d4-e5f6-7890-abcd-ef1234567890"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let app = test_app(ServerConfig::default());

    let request = Request::builder()
        .uri(validate_uri("?uuid=ffffffff-ffff-ffff-ffff-ffffffffffff"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
