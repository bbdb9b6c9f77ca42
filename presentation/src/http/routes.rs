//! API routes for the question endpoint

use crate::http::server::AppState;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use consulta_application::AnswerQuestionError;
use consulta_domain::Question;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

/// Request body for `POST /preguntar`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub pregunta: String,
}

/// Response body for a successfully answered question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub pregunta: String,
    pub tipo: String,
    pub respuesta: String,
}

/// Error body: a single human-readable detail field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

pub fn root_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(root))
}

pub fn question_routes() -> Router<AppStateArc> {
    Router::new().route("/preguntar", post(preguntar))
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Bienvenidos a la API de Clasificación y Respuesta de Preguntas"
    }))
}

/// Classify the question and answer it with the matching persona.
///
/// An unclassifiable question is a client-side 400, not a server fault;
/// gateway faults surface as 502 so callers can tell the two apart.
async fn preguntar(
    State(state): State<AppStateArc>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>, (StatusCode, Json<ErrorDetail>)> {
    info!("Received question: {}", request.pregunta);

    let question = Question::try_new(request.pregunta).ok_or_else(|| {
        reject(
            StatusCode::UNPROCESSABLE_ENTITY,
            "La pregunta no puede estar vacía.",
        )
    })?;

    match state.answer_question.execute(question).await {
        Ok(consultation) => Ok(Json(QuestionResponse {
            pregunta: consultation.question.content().to_string(),
            tipo: consultation.category.label().to_string(),
            respuesta: consultation.answer.content().to_string(),
        })),
        Err(AnswerQuestionError::Unclassifiable) => Err(reject(
            StatusCode::BAD_REQUEST,
            "No se pudo clasificar la pregunta.",
        )),
        Err(e) => {
            error!("Pipeline failed: {}", e);
            Err(reject(
                StatusCode::BAD_GATEWAY,
                "El modelo no está disponible en este momento.",
            ))
        }
    }
}

fn reject(status: StatusCode, detail: &str) -> (StatusCode, Json<ErrorDetail>) {
    (
        status,
        Json(ErrorDetail {
            detail: detail.to_string(),
        }),
    )
}
