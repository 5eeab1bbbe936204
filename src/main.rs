//! TemplateHub Server — document template version comparison backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

use templatehub_api::AppState;
use templatehub_compare::CompareService;
use templatehub_core::config::AppConfig;
use templatehub_core::error::AppError;
use templatehub_entity::{
    Template, TemplateMetadata, TemplateStatus, TemplateVersion, VersionFile, VersionMetadata,
};
use templatehub_store::{MemoryBlobStore, MemoryTemplateStore};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("TEMPLATEHUB_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TemplateHub v{}", env!("CARGO_PKG_VERSION"));

    let templates = Arc::new(MemoryTemplateStore::new());
    let blobs = Arc::new(MemoryBlobStore::new());
    seed_demo_data(&templates, &blobs);

    let compare = Arc::new(CompareService::new(templates.clone(), blobs.clone()));

    let state = AppState {
        config: Arc::new(config.clone()),
        compare,
    };
    let app = templatehub_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("TemplateHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("TemplateHub server shut down gracefully");
    Ok(())
}

/// Seed one template with two text versions so the comparison endpoint is
/// exercisable out of the box. Ids are logged at startup.
fn seed_demo_data(templates: &MemoryTemplateStore, blobs: &MemoryBlobStore) {
    let template_id = Uuid::new_v4();
    templates.insert_template(Template {
        id: template_id,
        name: "Employment Contract".to_string(),
        description: "Standard employment contract template".to_string(),
        category: "Contracts".to_string(),
        department: "HR".to_string(),
        tags: vec!["hr".to_string(), "contract".to_string()],
        metadata: TemplateMetadata {
            author: "system".to_string(),
            status: TemplateStatus::Approved,
            version: 2,
            last_modified: Utc::now(),
        },
    });

    let body_v1 = "EMPLOYMENT CONTRACT\n\nThis agreement is made between the Employer and the Employee.\nThe probation period is three months.\n";
    let body_v2 = "EMPLOYMENT CONTRACT\n\nThis agreement is made between the Employer and the Employee.\nThe probation period is six months.\nEither party may terminate with thirty days notice.\n";

    let mut version_ids = Vec::new();
    for (number, changes, status, body) in [
        (1, "Initial draft", TemplateStatus::Draft, body_v1),
        (2, "Extended probation, added termination clause", TemplateStatus::Approved, body_v2),
    ] {
        let version_id = Uuid::new_v4();
        let storage_key = format!("demo/{template_id}/v{number}");
        let checksum = blobs.put(storage_key.clone(), Bytes::from_static(body.as_bytes()));
        templates.insert_version(TemplateVersion {
            id: version_id,
            template_id,
            version_number: number,
            changes: changes.to_string(),
            file: VersionFile {
                original_name: "employment-contract.txt".to_string(),
                mime_type: "text/plain".to_string(),
                size_bytes: body.len() as i64,
                checksum,
                storage_key,
            },
            metadata: VersionMetadata {
                author: "hr-team".to_string(),
                status,
                created_at: Utc::now(),
            },
        });
        version_ids.push(version_id);
    }

    tracing::info!(
        %template_id,
        version_a = %version_ids[0],
        version_b = %version_ids[1],
        "Demo template seeded; try GET /api/templates/{{id}}/versions/compare/{{a}}/{{b}}"
    );
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
