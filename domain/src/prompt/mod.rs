//! Prompt domain
//!
//! Structured templates with declared substitution slots, and the registry
//! mapping each category to its persona template.

mod registry;
mod template;

pub use registry::{PromptRegistry, QUESTION_SLOT, classification_template};
pub use template::{PromptTemplate, TemplateError};
