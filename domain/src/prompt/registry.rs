//! Prompt registry: the classification prompt and one persona template per
//! category.
//!
//! Template text is configuration data in Spanish, carried verbatim into the
//! model request. Each persona instructs the model to answer the embedded
//! question clearly and concisely in exactly two sentences.

use super::template::PromptTemplate;
use crate::core::category::Category;
use std::collections::HashMap;

/// Slot name every template in this module declares
pub const QUESTION_SLOT: &str = "question";

const LEGAL_PERSONA: &str = "Eres un abogado especializado en derecho civil y comercial. \
A continuación, se te proporcionará una pregunta legal. \
Responde únicamente a esta pregunta de manera clara y concisa en dos frases:\n\
Pregunta: {question}\n\
Respuesta:";

const ACCOUNTING_PERSONA: &str = "Eres un contador con experiencia en impuestos y finanzas. \
A continuación, se te proporcionará una pregunta contable. \
Responde únicamente a esta pregunta de manera clara y concisa en dos frases:\n\
Pregunta: {question}\n\
Respuesta:";

const MEDICAL_PERSONA: &str = "Eres un médico profesional con años de experiencia. \
A continuación, se te proporcionará una pregunta médica. \
Responde únicamente a esta pregunta de manera clara y concisa en dos frases:\n\
Pregunta: {question}\n\
Respuesta:";

/// The fixed classification prompt.
///
/// Lists every canonical label with its description so the valid set in the
/// prompt always matches [`Category::ALL`].
pub fn classification_template() -> PromptTemplate {
    let labels = Category::ALL.map(|c| c.label()).join(", ");
    let descriptions = Category::ALL
        .map(|c| format!("- {}: {}.", c.label(), c.description()))
        .join("\n");
    let text = format!(
        "Clasifica la siguiente pregunta en una de las siguientes categorías temáticas: {labels}.\n\
         Las categorías son:\n\
         {descriptions}\n\
         Responde únicamente con una de estas categorías sin ninguna explicación adicional.\n\
         \n\
         Pregunta: '{{question}}'\n\
         La categoría a la que pertenece esta pregunta es:"
    );
    PromptTemplate::new(text, [QUESTION_SLOT]).expect("builtin template declares its slot")
}

/// Read-only mapping from category to its persona template
///
/// [`PromptRegistry::default`] carries exactly one entry per valid category;
/// [`PromptRegistry::from_templates`] accepts an arbitrary mapping so a
/// missing entry can be exercised. The registry holds no other state and is
/// safe to share across concurrent requests.
#[derive(Debug, Clone)]
pub struct PromptRegistry {
    templates: HashMap<Category, PromptTemplate>,
}

impl PromptRegistry {
    /// Build a registry from an explicit mapping
    pub fn from_templates(templates: HashMap<Category, PromptTemplate>) -> Self {
        Self { templates }
    }

    /// Look up the persona template for a category
    pub fn template_for(&self, category: Category) -> Option<&PromptTemplate> {
        self.templates.get(&category)
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for PromptRegistry {
    /// The standard registry: one persona template per valid category
    fn default() -> Self {
        let mut templates = HashMap::new();
        templates.insert(Category::Legal, persona(LEGAL_PERSONA));
        templates.insert(Category::Accounting, persona(ACCOUNTING_PERSONA));
        templates.insert(Category::Medical, persona(MEDICAL_PERSONA));
        Self { templates }
    }
}

fn persona(text: &str) -> PromptTemplate {
    PromptTemplate::new(text, [QUESTION_SLOT]).expect("builtin template declares its slot")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_covers_every_category() {
        let registry = PromptRegistry::default();
        assert_eq!(registry.len(), 3);
        for category in Category::ALL {
            let template = registry.template_for(category).unwrap();
            let rendered = template
                .render(&[(QUESTION_SLOT, "¿Qué debo hacer?")])
                .unwrap();
            assert!(rendered.contains("¿Qué debo hacer?"));
            assert!(rendered.contains("dos frases"));
        }
    }

    #[test]
    fn test_persona_texts_differ_per_category() {
        let registry = PromptRegistry::default();
        let legal = registry.template_for(Category::Legal).unwrap();
        let medical = registry.template_for(Category::Medical).unwrap();
        assert!(legal.text().contains("abogado"));
        assert!(medical.text().contains("médico"));
        assert_ne!(legal.text(), medical.text());
    }

    #[test]
    fn test_classification_template_lists_all_labels() {
        let rendered = classification_template()
            .render(&[(QUESTION_SLOT, "¿Cómo se calcula el IVA?")])
            .unwrap();
        for category in Category::ALL {
            assert!(rendered.contains(category.label()));
        }
        assert!(rendered.contains("'¿Cómo se calcula el IVA?'"));
        assert!(rendered.contains("sin ninguna explicación adicional"));
    }

    #[test]
    fn test_empty_registry_has_no_templates() {
        let registry = PromptRegistry::from_templates(HashMap::new());
        assert!(registry.is_empty());
        assert!(registry.template_for(Category::Legal).is_none());
    }
}
