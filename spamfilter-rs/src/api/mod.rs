//! REST API for the classification service

pub mod handlers;
pub mod server;

pub use handlers::{ApiResponse, AppState, ClassifyResponse};
pub use server::ApiServer;
