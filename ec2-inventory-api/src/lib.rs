// Library entry point for tests and external usage

pub mod api_docs;
pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod lambda;
pub mod provider_manager;
pub mod response;
pub mod routes;
pub mod version;

// Re-export commonly used types
pub use app::AppState;
pub use config::InventoryConfig;
pub use handlers::instances::{InboundRequest, RequestHandler};
pub use response::OutboundResponse;
