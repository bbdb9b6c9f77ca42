//! Use cases for the classify-then-answer pipeline.
//!
//! - [`classify_question`] — assign a question to a subject-matter category
//! - [`generate_answer`] — answer with the category's persona template
//! - [`answer_question`] — orchestrate the two stages

pub mod answer_question;
pub mod classify_question;
pub mod generate_answer;
