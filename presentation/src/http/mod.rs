//! HTTP API surface
//!
//! Exposes the classify-then-answer pipeline over axum. The transport layer
//! owns status-code mapping; the pipeline itself knows nothing about HTTP.

pub mod routes;
pub mod server;

pub use routes::{ErrorDetail, QuestionRequest, QuestionResponse};
pub use server::AppState;
