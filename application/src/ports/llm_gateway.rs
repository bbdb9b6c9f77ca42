//! LLM Gateway port
//!
//! Defines the interface for invoking the hosted language model.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when invoking the language model
///
/// Every variant is an invocation fault; "the model answered something
/// unexpected" is not represented here — interpreting the reply belongs to
/// the use cases.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Gateway for language-model completions
///
/// This port defines how the application layer reaches the hosted model.
/// Implementations (adapters) live in the infrastructure layer. A single
/// instance outlives individual requests, holds no per-request state, and
/// must be safe for concurrent use.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a fully rendered prompt and return the model's raw reply.
    ///
    /// A single best-effort attempt: no retry, and no timeout beyond what
    /// the underlying client enforces.
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError>;
}
