//! Structured prompt template with declared substitution slots

use thiserror::Error;

/// Errors raised when building or rendering a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("declared slot '{0}' has no {{{0}}} placeholder in the template text")]
    SlotNotInText(String),

    #[error("no value supplied for slot '{0}'")]
    MissingValue(String),
}

/// An immutable prompt text with named `{slot}` placeholders (Value Object)
///
/// Slots are declared up front: construction fails if a declared slot has no
/// placeholder in the text, and rendering fails if a declared slot is given
/// no value. Template text is domain content, not logic; substituted values
/// are inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
    slots: Vec<String>,
}

impl PromptTemplate {
    /// Create a template, validating that every declared slot appears in the
    /// text.
    pub fn new(
        text: impl Into<String>,
        slots: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, TemplateError> {
        let text = text.into();
        let slots: Vec<String> = slots.into_iter().map(Into::into).collect();
        for slot in &slots {
            if !text.contains(&placeholder(slot)) {
                return Err(TemplateError::SlotNotInText(slot.clone()));
            }
        }
        Ok(Self { text, slots })
    }

    /// The raw template text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The declared slot names
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }

    /// Substitute every declared slot with its value.
    ///
    /// Fails fast with [`TemplateError::MissingValue`] when a declared slot
    /// has no entry in `values`; extra entries are ignored.
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String, TemplateError> {
        let mut rendered = self.text.clone();
        for slot in &self.slots {
            let value = values
                .iter()
                .find(|(name, _)| *name == slot.as_str())
                .map(|(_, value)| *value)
                .ok_or_else(|| TemplateError::MissingValue(slot.clone()))?;
            rendered = rendered.replace(&placeholder(slot), value);
        }
        Ok(rendered)
    }
}

fn placeholder(slot: &str) -> String {
    format!("{{{}}}", slot)
}
