//! Consultation result record

use crate::core::answer::Answer;
use crate::core::category::Category;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// A completed consultation: the question, its category, and the expert
/// answer (Value Object)
///
/// Created per request and discarded after the response is produced;
/// nothing persists across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    /// The original question
    pub question: Question,
    /// The category the question was assigned to
    pub category: Category,
    /// The persona-generated answer
    pub answer: Answer,
}

impl Consultation {
    pub fn new(question: Question, category: Category, answer: Answer) -> Self {
        Self {
            question,
            category,
            answer,
        }
    }
}
