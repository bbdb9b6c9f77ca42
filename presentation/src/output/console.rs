//! Console output formatter for consultation results

use colored::Colorize;
use consulta_domain::Consultation;

/// Formats consultation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Human-readable text output
    pub fn format(consultation: &Consultation) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Pregunta:".cyan().bold(),
            consultation.question
        ));
        output.push_str(&format!(
            "{} {}\n\n",
            "Categoría:".cyan().bold(),
            consultation.category.label().yellow().bold()
        ));
        output.push_str(&format!("{}\n", consultation.answer));

        output
    }

    /// JSON output, matching the HTTP API's response shape
    pub fn format_json(consultation: &Consultation) -> String {
        serde_json::to_string_pretty(&serde_json::json!({
            "pregunta": consultation.question.content(),
            "tipo": consultation.category.label(),
            "respuesta": consultation.answer.content(),
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }
}
