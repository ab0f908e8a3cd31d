//! Wire-level tests against an in-process fake backend.

mod common;

use common::{CONCORDANT_BODY, Canned, FakeBackend};
use laudo_client::{ApiConfig, AuditClient, AuditError};
use laudo_core::{AuditRequest, NOT_INFORMED, ReportFile, TextAuditRequest};
use pretty_assertions::assert_eq;

fn client_for(backend: &FakeBackend) -> AuditClient {
    AuditClient::new(ApiConfig::new(format!("{}/", backend.url))).expect("client builds")
}

fn request() -> AuditRequest {
    AuditRequest::new(
        ReportFile::new("oficial.pdf", b"%PDF-1.4 oficial".to_vec()),
        ReportFile::new("auditor.pdf", b"%PDF-1.4 auditor".to_vec()),
    )
}

#[tokio::test]
async fn create_audit_posts_multipart_form() {
    let backend = FakeBackend::start(vec![Canned::json(200, CONCORDANT_BODY)]);
    let client = client_for(&backend);

    let result = client
        .create_audit(
            &request()
                .with_patient_name("Maria Souza")
                .with_exam_type("Tomografia de tórax")
                .with_exam_date("2024-11-05"),
        )
        .await
        .expect("audit succeeds");
    assert_eq!(result.classification, "CONCORDANT");

    let captured = backend.finish();
    assert_eq!(captured.len(), 1);
    let req = &captured[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.url, "/api/audits");
    assert!(
        req.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("multipart/form-data"))
    );

    let parts = req.multipart_parts();
    let names: Vec<&str> = parts.iter().map(|(n, _, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec!["official_pdf", "auditor_pdf", "patient_name", "exam_type", "exam_date"]
    );
    assert_eq!(parts[0].1.as_deref(), Some("oficial.pdf"));
    assert_eq!(parts[0].2, b"%PDF-1.4 oficial".to_vec());
    assert_eq!(parts[1].1.as_deref(), Some("auditor.pdf"));
    assert_eq!(req.field("patient_name").as_deref(), Some("Maria Souza"));
    assert_eq!(req.field("exam_type").as_deref(), Some("Tomografia de tórax"));
    assert_eq!(req.field("exam_date").as_deref(), Some("2024-11-05"));
}

#[tokio::test]
async fn empty_metadata_is_defaulted_and_exam_date_omitted() {
    let backend = FakeBackend::start(vec![Canned::json(200, CONCORDANT_BODY)]);
    let client = client_for(&backend);

    client.create_audit(&request()).await.expect("audit succeeds");

    let captured = backend.finish();
    let req = &captured[0];
    assert_eq!(req.field("patient_name").as_deref(), Some(NOT_INFORMED));
    assert_eq!(req.field("exam_type").as_deref(), Some(NOT_INFORMED));
    assert_eq!(req.field("exam_date"), None);
}

#[tokio::test]
async fn unprocessable_entity_surfaces_detail() {
    let backend = FakeBackend::start(vec![Canned::json(422, r#"{"detail": "invalid PDF"}"#)]);
    let client = client_for(&backend);

    let err = client.create_audit(&request()).await.unwrap_err();
    assert!(matches!(err, AuditError::Api { status: 422, .. }));
    assert_eq!(err.user_message(), "invalid PDF");
    backend.finish();
}

#[tokio::test]
async fn server_error_with_empty_body_uses_fallback() {
    let backend = FakeBackend::start(vec![Canned::empty(500)]);
    let client = client_for(&backend);

    let err = client.create_audit(&request()).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message(), "Erro ao processar auditoria");
    backend.finish();
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let backend = FakeBackend::start(vec![Canned::json(200, r#"{"success": true}"#)]);
    let client = client_for(&backend);

    let err = client.create_audit(&request()).await.unwrap_err();
    assert!(matches!(err, AuditError::Decode(_)));
    assert!(err.user_message().contains("classification"));
    backend.finish();
}

#[tokio::test]
async fn text_audit_posts_json() {
    let backend = FakeBackend::start(vec![Canned::json(200, CONCORDANT_BODY)]);
    let client = client_for(&backend);

    let request = TextAuditRequest::new(
        "Fígado de dimensões normais.",
        "Fígado normodimensionado.",
        "",
        "Ultrassom",
        "",
    );
    client.create_text_audit(&request).await.expect("audit succeeds");

    let captured = backend.finish();
    let req = &captured[0];
    assert_eq!(req.url, "/api/audits/text");
    let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
    assert_eq!(body["patient_name"], NOT_INFORMED);
    assert_eq!(body["exam_type"], "Ultrassom");
    assert!(body.get("exam_date").is_none());
}

#[tokio::test]
async fn list_audits_passes_paging() {
    let backend = FakeBackend::start(vec![Canned::json(
        200,
        r#"{"audits": [{"id": "r1", "patient_name": "Ana", "classification": "DISCORDÂNCIA",
                        "created_at": "2024-11-05T10:30:00"}], "count": 1}"#,
    )]);
    let client = client_for(&backend);

    let list = client.list_audits(10, 20).await.expect("list succeeds");
    assert_eq!(list.count, 1);
    assert_eq!(list.audits[0].id, "r1");
    assert!(list.audits[0].created_at_utc().is_some());

    let captured = backend.finish();
    assert_eq!(captured[0].method, "GET");
    assert_eq!(captured[0].url, "/api/audits?limit=10&offset=20");
}

#[tokio::test]
async fn get_audit_encodes_id_and_maps_not_found() {
    let backend = FakeBackend::start(vec![Canned::json(
        404,
        r#"{"detail": "Auditoria não encontrada"}"#,
    )]);
    let client = client_for(&backend);

    let err = client.get_audit("a b/c").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.user_message(), "Auditoria não encontrada");

    let captured = backend.finish();
    assert_eq!(captured[0].url, "/api/audits/a%20b%2Fc");
}

#[tokio::test]
async fn download_report_returns_raw_bytes() {
    let backend = FakeBackend::start(vec![Canned::pdf(b"%PDF-1.7 report")]);
    let client = client_for(&backend);

    let bytes = client.download_report("r1").await.expect("download succeeds");
    assert_eq!(bytes, b"%PDF-1.7 report".to_vec());

    let captured = backend.finish();
    assert_eq!(captured[0].url, "/api/audits/r1/report");
}

#[tokio::test]
async fn health_and_service_info() {
    let backend = FakeBackend::start(vec![
        Canned::json(200, r#"{"status": "healthy"}"#),
        Canned::json(
            200,
            r#"{"status": "online", "service": "LaudoSync API", "version": "1.0.0"}"#,
        ),
    ]);
    let client = client_for(&backend);

    assert!(client.health().await.unwrap().is_healthy());
    let info = client.service_info().await.unwrap();
    assert_eq!(info.service, "LaudoSync API");

    let captured = backend.finish();
    let urls: Vec<&str> = captured.iter().map(|c| c.url.as_str()).collect();
    assert_eq!(urls, vec!["/health", "/"]);
}
