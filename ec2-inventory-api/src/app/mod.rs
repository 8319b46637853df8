// Application state shared by the HTTP routes
pub mod state;

pub use state::AppState;
