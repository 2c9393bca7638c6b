use std::sync::Arc;

use shoplite_api::state::{AppState, CatalogStore};
use shoplite_audit::AuditLog;
use shoplite_catalog::{Catalog, ProfileBook};

#[tokio::main]
async fn main() {
    shoplite_observability::init();

    let addr = std::env::var("SHOPLITE_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let audit_path =
        std::env::var("SHOPLITE_AUDIT_LOG").unwrap_or_else(|_| "app_log.txt".to_string());

    let state = Arc::new(AppState {
        store: CatalogStore::new(load_bootstrap_catalog()),
        profiles: load_profiles(),
        audit: AuditLog::new(audit_path),
    });
    let app = shoplite_api::app::build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

/// Profiles are static configuration: an optional JSON file, with compiled-in
/// defaults as the fallback.
fn load_profiles() -> ProfileBook {
    let Ok(path) = std::env::var("SHOPLITE_PROFILES_FILE") else {
        return ProfileBook::builtin();
    };
    match read_profiles(&path) {
        Ok(book) => {
            tracing::info!(path, "loaded profiles file");
            book
        }
        Err(e) => {
            tracing::warn!(path, error = %e, "could not load profiles file; using built-ins");
            ProfileBook::builtin()
        }
    }
}

fn read_profiles(path: &str) -> anyhow::Result<ProfileBook> {
    let text = std::fs::read_to_string(path)?;
    Ok(ProfileBook::from_json(&text)?)
}

/// Optional bootstrap catalog. A missing or invalid file starts the service
/// with an empty catalog; the first successful upload populates it.
fn load_bootstrap_catalog() -> Catalog {
    let Ok(path) = std::env::var("SHOPLITE_CATALOG_FILE") else {
        return Catalog::default();
    };
    match read_catalog(&path) {
        Ok(catalog) => {
            tracing::info!(path, count = catalog.len(), "loaded bootstrap catalog");
            catalog
        }
        Err(e) => {
            tracing::warn!(path, error = %e, "could not load bootstrap catalog; starting empty");
            Catalog::default()
        }
    }
}

fn read_catalog(path: &str) -> anyhow::Result<Catalog> {
    let text = std::fs::read_to_string(path)?;
    Ok(shoplite_catalog::ingest(&text)?)
}
