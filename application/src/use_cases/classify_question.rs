//! Classify Question use case.
//!
//! First stage of the pipeline: ask the model which category a question
//! belongs to, then normalize and validate the raw reply against the closed
//! category set.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use consulta_domain::{
    Category, ClassificationOutcome, QUESTION_SLOT, Question, TemplateError,
    classification_template, truncate,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during classification.
///
/// An unmatched model reply is NOT an error — it is
/// [`ClassificationOutcome::Unclassified`]. Only invocation faults and
/// malformed templates reach this type, so callers can never mistake a
/// fault for a legitimate "no matching category".
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

/// Use case for classifying a question into a category.
///
/// Renders the fixed classification prompt, invokes the gateway once (no
/// retry, no internal timeout), and maps the reply onto the closed category
/// set via [`Category::from_label`].
pub struct ClassifyQuestionUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl ClassifyQuestionUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        question: &Question,
    ) -> Result<ClassificationOutcome, ClassifyError> {
        let prompt =
            classification_template().render(&[(QUESTION_SLOT, question.content())])?;

        let raw = self.gateway.complete(&prompt).await?;
        debug!("Classifier reply: {}", truncate(raw.trim(), 100));

        match Category::from_label(&raw) {
            Some(category) => {
                info!("Question classified as '{}'", category);
                Ok(ClassificationOutcome::Classified(category))
            }
            None => {
                info!("Question matched no known category");
                Ok(ClassificationOutcome::Unclassified)
            }
        }
    }
}
