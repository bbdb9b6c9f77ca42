//! HTTP server wiring

use crate::http::routes;
use axum::Router;
use consulta_application::AnswerQuestionUseCase;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub answer_question: AnswerQuestionUseCase,
}

impl AppState {
    pub fn new(answer_question: AnswerQuestionUseCase) -> Self {
        Self { answer_question }
    }
}

/// Build the router with all API routes
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::root_routes())
        .merge(routes::question_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until the process is stopped
pub async fn run(state: AppState, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app(state)).await
}
