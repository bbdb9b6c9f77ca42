//! Answer Question use case.
//!
//! Orchestrates the pipeline: classify fully first, and only on a valid
//! category generate the expert answer. Unclassified questions and
//! invocation faults are distinct terminal outcomes, and neither reaches
//! the generation stage. Transitions are one-way — no retry loop, no
//! re-classification.

use crate::use_cases::classify_question::{ClassifyError, ClassifyQuestionUseCase};
use crate::use_cases::generate_answer::{GenerateAnswerUseCase, GenerateError};
use consulta_domain::{ClassificationOutcome, Consultation, Question, truncate};
use thiserror::Error;
use tracing::{info, warn};

/// Terminal failure states of the pipeline.
///
/// [`Unclassifiable`](AnswerQuestionError::Unclassifiable) is a legitimate
/// outcome (the model answered, nothing matched); the other two carry the
/// underlying fault so callers can distinguish "not classifiable" from "the
/// model could not be reached".
#[derive(Error, Debug)]
pub enum AnswerQuestionError {
    /// The model's reply matched none of the known categories.
    #[error("Question could not be classified")]
    Unclassifiable,

    /// The classification invocation itself failed.
    #[error("Classification failed: {0}")]
    Classification(#[source] ClassifyError),

    /// Generation failed after a successful classification.
    #[error("Answer generation failed: {0}")]
    Generation(#[source] GenerateError),
}

/// Use case for the full classify-then-answer pipeline.
pub struct AnswerQuestionUseCase {
    classifier: ClassifyQuestionUseCase,
    generator: GenerateAnswerUseCase,
}

impl AnswerQuestionUseCase {
    pub fn new(classifier: ClassifyQuestionUseCase, generator: GenerateAnswerUseCase) -> Self {
        Self {
            classifier,
            generator,
        }
    }

    pub async fn execute(&self, question: Question) -> Result<Consultation, AnswerQuestionError> {
        info!("Answering question: {}", truncate(question.content(), 100));

        let outcome = self
            .classifier
            .execute(&question)
            .await
            .map_err(AnswerQuestionError::Classification)?;

        let category = match outcome {
            ClassificationOutcome::Classified(category) => category,
            ClassificationOutcome::Unclassified => {
                warn!("Question could not be classified; skipping generation");
                return Err(AnswerQuestionError::Unclassifiable);
            }
        };

        let answer = self
            .generator
            .execute(&question, category)
            .await
            .map_err(AnswerQuestionError::Generation)?;

        Ok(Consultation::new(question, category, answer))
    }
}
