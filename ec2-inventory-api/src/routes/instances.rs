// Instance inventory routes
use crate::app::AppState;
use crate::handlers::instances;
use axum::routing::any;
use axum::Router;
use std::sync::Arc;

/// Every method goes to the handler, which answers OPTIONS itself and
/// treats everything else as a listing.
pub fn create_instance_routes() -> Router<Arc<AppState>> {
    Router::new().route("/instances", any(instances::list_instances))
}
