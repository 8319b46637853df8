// Public routes (docs, version)
use crate::app::AppState;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::api_docs;
use crate::version;

pub fn create_public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/version", get(get_version))
        .route("/api-docs/openapi.json", get(openapi_json))
}

async fn root() -> &'static str {
    "ec2-inventory-api"
}

async fn get_version() -> Json<version::VersionInfo> {
    Json(version::get_version_info())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(api_docs::ApiDoc::openapi())
}
