//! Category value object and classification outcome

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Subject-matter categories a question can be assigned to (Value Object)
///
/// The set is closed: a model reply that matches none of the canonical
/// labels produces [`ClassificationOutcome::Unclassified`], never a fourth
/// category. Canonical labels are the Spanish ones the classifier prompt
/// lists and the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Laws, rights, judicial processes
    Legal,
    /// Accounting, taxes, finance
    Accounting,
    /// Medicine, health, symptoms
    Medical,
}

/// Lexical normalization applied before membership is checked.
///
/// The classifier answers in Spanish and occasionally uses the masculine
/// form for the medical category. This is the only mapping; it is not a
/// general synonym mechanism.
const SYNONYMS: &[(&str, &str)] = &[("médico", "médica")];

impl Category {
    /// All valid categories, in the order the classifier prompt lists them
    pub const ALL: [Category; 3] = [Category::Legal, Category::Accounting, Category::Medical];

    /// Canonical Spanish label used in prompts and over the wire
    pub fn label(&self) -> &'static str {
        match self {
            Category::Legal => "legal",
            Category::Accounting => "contable",
            Category::Medical => "médica",
        }
    }

    /// One-line Spanish description used by the classifier prompt
    pub fn description(&self) -> &'static str {
        match self {
            Category::Legal => "cuestiones relacionadas con leyes, derechos o procesos judiciales",
            Category::Accounting => {
                "cuestiones relacionadas con contabilidad, impuestos o finanzas"
            }
            Category::Medical => "cuestiones relacionadas con medicina, salud o síntomas",
        }
    }

    /// Normalize a raw model reply and match it against the canonical labels.
    ///
    /// Strips surrounding whitespace and quote characters, lower-cases, and
    /// applies the synonym table. Returns `None` when nothing matches; a
    /// malformed reply is never an error here.
    pub fn from_label(raw: &str) -> Option<Category> {
        let normalized = raw
            .trim()
            .trim_matches(|c| c == '\'' || c == '"')
            .to_lowercase();
        let normalized = SYNONYMS
            .iter()
            .find(|(variant, _)| *variant == normalized)
            .map_or(normalized.as_str(), |(_, canonical)| canonical);
        Category::ALL.into_iter().find(|c| c.label() == normalized)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Category::from_label(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown category: '{}'", s)))
    }
}

/// Result of the classification stage.
///
/// Invocation faults are not represented here; they travel on the error
/// channel of the classify operation, so a failed model call can never be
/// mistaken for a legitimate "no matching category".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationOutcome {
    /// The model reply matched a canonical label
    Classified(Category),
    /// Valid invocation, but the reply matched no known category
    Unclassified,
}

impl ClassificationOutcome {
    /// The category, if one was assigned
    pub fn category(&self) -> Option<Category> {
        match self {
            ClassificationOutcome::Classified(category) => Some(*category),
            ClassificationOutcome::Unclassified => None,
        }
    }

    pub fn is_classified(&self) -> bool {
        matches!(self, ClassificationOutcome::Classified(_))
    }
}
