//! Full-stack tests: memory stores, comparison service, and router wired
//! together the same way the server binary wires them.

use std::io::Write;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use bytes::Bytes;
use chrono::Utc;
use tower::ServiceExt;
use uuid::Uuid;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use templatehub_api::{build_router, AppState};
use templatehub_compare::CompareService;
use templatehub_core::config::AppConfig;
use templatehub_entity::{
    Template, TemplateMetadata, TemplateStatus, TemplateVersion, VersionFile, VersionMetadata,
};
use templatehub_store::{MemoryBlobStore, MemoryTemplateStore};

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

fn docx(paragraphs: &[&str]) -> Bytes {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let opts = SimpleFileOptions::default();
    zip.start_file("[Content_Types].xml", opts).unwrap();
    zip.write_all(b"<Types/>").unwrap();
    zip.start_file("word/document.xml", opts).unwrap();
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    zip.write_all(format!("<w:document><w:body>{body}</w:body></w:document>").as_bytes())
        .unwrap();
    Bytes::from(zip.finish().unwrap().into_inner())
}

struct Stack {
    app: Router,
    template_id: Uuid,
    v1: Uuid,
    v2: Uuid,
}

fn build_stack(file_name: &str, mime_type: &str, blob_a: Bytes, blob_b: Bytes) -> Stack {
    let templates = Arc::new(MemoryTemplateStore::new());
    let blobs = Arc::new(MemoryBlobStore::new());

    let template_id = Uuid::new_v4();
    templates.insert_template(Template {
        id: template_id,
        name: "Policy".to_string(),
        description: "Company policy".to_string(),
        category: "Policies".to_string(),
        department: "Operations".to_string(),
        tags: vec![],
        metadata: TemplateMetadata {
            author: "system".to_string(),
            status: TemplateStatus::Approved,
            version: 2,
            last_modified: Utc::now(),
        },
    });

    let v1 = Uuid::new_v4();
    let v2 = Uuid::new_v4();
    for (id, number, blob) in [(v1, 1, blob_a), (v2, 2, blob_b)] {
        let storage_key = format!("policy/v{number}");
        let size = blob.len() as i64;
        let checksum = blobs.put(storage_key.clone(), blob);
        templates.insert_version(TemplateVersion {
            id,
            template_id,
            version_number: number,
            changes: format!("Revision {number}"),
            file: VersionFile {
                original_name: file_name.to_string(),
                mime_type: mime_type.to_string(),
                size_bytes: size,
                checksum,
                storage_key,
            },
            metadata: VersionMetadata {
                author: "ops".to_string(),
                status: TemplateStatus::Approved,
                created_at: Utc::now(),
            },
        });
    }

    let compare = Arc::new(CompareService::new(templates.clone(), blobs.clone()));
    let app = build_router(AppState {
        config: Arc::new(AppConfig::default()),
        compare,
    });

    Stack {
        app,
        template_id,
        v1,
        v2,
    }
}

async fn compare(stack: Stack) -> (StatusCode, serde_json::Value) {
    let uri = format!(
        "/api/templates/{}/versions/compare/{}/{}",
        stack.template_id, stack.v1, stack.v2
    );
    let response = stack
        .app
        .oneshot(Request::get(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn docx_versions_are_diffed_as_extracted_text() {
    let stack = build_stack(
        "policy.docx",
        DOCX_MIME,
        docx(&["Leave Policy", "Employees accrue twenty days per year."]),
        docx(&["Leave Policy", "Employees accrue twenty five days per year."]),
    );
    let (status, body) = compare(stack).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contentDiff"]["contentChanged"], true);
    assert_eq!(body["contentDiff"]["isTextRepresentable"], true);
    assert_eq!(body["contentDiff"]["sourceKind"], "office");

    let segments = body["contentDiff"]["segments"].as_array().unwrap();
    let joined = |keep: &str| -> String {
        segments
            .iter()
            .filter(|s| s["kind"] == "equal" || s["kind"] == keep)
            .map(|s| s["text"].as_str().unwrap())
            .collect()
    };
    assert_eq!(
        joined("delete"),
        "Leave Policy Employees accrue twenty days per year."
    );
    assert_eq!(
        joined("insert"),
        "Leave Policy Employees accrue twenty five days per year."
    );
}

#[tokio::test]
async fn identical_docx_uploads_short_circuit_on_checksum() {
    let blob = docx(&["Same content"]);
    let stack = build_stack("policy.docx", DOCX_MIME, blob.clone(), blob);
    let (status, body) = compare(stack).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contentDiff"]["contentChanged"], false);
    assert!(body["contentDiff"]["segments"].is_null());
    // Version metadata still differs.
    assert_eq!(body["summary"]["hasAnyChange"], true);
    assert_eq!(body["summary"]["contentChanged"], false);
}

#[tokio::test]
async fn unknown_binary_formats_fall_back_to_checksum_comparison() {
    let stack = build_stack(
        "diagram.bin",
        "application/octet-stream",
        Bytes::from_static(&[0u8, 1, 2, 3]),
        Bytes::from_static(&[9u8, 8, 7, 6]),
    );
    let (status, body) = compare(stack).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contentDiff"]["contentChanged"], true);
    assert_eq!(body["contentDiff"]["isTextRepresentable"], false);
    assert!(body["contentDiff"]["sourceKind"].is_null());
    assert!(body["contentDiff"]["segments"].is_null());
}
