use std::sync::Arc;

use crate::handlers::instances::RequestHandler;

pub struct AppState {
    pub handler: Arc<RequestHandler>,
}

impl AppState {
    pub fn new(handler: Arc<RequestHandler>) -> Arc<Self> {
        Arc::new(Self { handler })
    }
}
