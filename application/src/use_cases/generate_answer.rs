//! Generate Answer use case.
//!
//! Second stage of the pipeline: look up the persona template for a
//! classified category and produce the expert answer.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use consulta_domain::{
    Answer, Category, PromptRegistry, QUESTION_SLOT, Question, TemplateError,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during answer generation.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// No persona template is registered for the category. The gateway is
    /// never invoked on this path.
    #[error("No template available for category '{0}'")]
    NoTemplate(Category),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// The model replied with blank text.
    #[error("Model returned an empty answer")]
    EmptyAnswer,
}

/// Use case for generating an expert answer to a classified question.
///
/// The registry lookup happens before anything else; a category without a
/// template fails fast without touching the gateway. On success the raw
/// reply is trimmed into an [`Answer`].
pub struct GenerateAnswerUseCase {
    gateway: Arc<dyn LlmGateway>,
    registry: PromptRegistry,
}

impl GenerateAnswerUseCase {
    /// Create with the standard persona registry.
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self::with_registry(gateway, PromptRegistry::default())
    }

    /// Create with an explicit registry.
    pub fn with_registry(gateway: Arc<dyn LlmGateway>, registry: PromptRegistry) -> Self {
        Self { gateway, registry }
    }

    pub async fn execute(
        &self,
        question: &Question,
        category: Category,
    ) -> Result<Answer, GenerateError> {
        let template = self
            .registry
            .template_for(category)
            .ok_or(GenerateError::NoTemplate(category))?;

        let prompt = template.render(&[(QUESTION_SLOT, question.content())])?;
        debug!("Answering with the '{}' persona", category);

        let raw = self.gateway.complete(&prompt).await?;
        let answer = Answer::try_new(raw).ok_or(GenerateError::EmptyAnswer)?;

        info!(
            "Generated a {} byte answer for '{}'",
            answer.content().len(),
            category
        );
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockGateway {
        fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                replies: Mutex::new(VecDeque::from(replies)),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }

        fn last_prompt(&self) -> String {
            self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::RequestFailed("no more replies".to_string())))
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_every_category_yields_trimmed_answer() {
        for category in Category::ALL {
            let gateway = Arc::new(MockGateway::new(vec![Ok(
                "  Primera frase. Segunda frase.  \n".to_string(),
            )]));
            let use_case = GenerateAnswerUseCase::new(gateway);

            let answer = use_case
                .execute(&Question::new("¿Qué debo hacer?"), category)
                .await
                .unwrap();

            assert_eq!(answer.content(), "Primera frase. Segunda frase.");
        }
    }

    #[tokio::test]
    async fn test_prompt_uses_persona_template() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("Respuesta.".to_string())]));
        let use_case = GenerateAnswerUseCase::new(gateway.clone());

        use_case
            .execute(&Question::new("¿Cómo se calcula el IVA?"), Category::Accounting)
            .await
            .unwrap();

        let prompt = gateway.last_prompt();
        assert!(prompt.contains("contador"));
        assert!(prompt.contains("¿Cómo se calcula el IVA?"));
    }

    #[tokio::test]
    async fn test_missing_template_fails_without_invoking_gateway() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("nunca usado".to_string())]));
        let registry = PromptRegistry::from_templates(HashMap::new());
        let use_case = GenerateAnswerUseCase::with_registry(gateway.clone(), registry);

        let err = use_case
            .execute(&Question::new("¿Qué debo hacer?"), Category::Legal)
            .await
            .unwrap_err();

        assert!(matches!(err, GenerateError::NoTemplate(Category::Legal)));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_gateway_fault_is_contained_as_error_data() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::RateLimited(
            "429".to_string(),
        ))]));
        let use_case = GenerateAnswerUseCase::new(gateway);

        let err = use_case
            .execute(&Question::new("¿Qué debo hacer?"), Category::Medical)
            .await
            .unwrap_err();

        assert!(matches!(err, GenerateError::Gateway(GatewayError::RateLimited(_))));
    }

    #[tokio::test]
    async fn test_blank_reply_is_empty_answer_error() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("   \n".to_string())]));
        let use_case = GenerateAnswerUseCase::new(gateway);

        let err = use_case
            .execute(&Question::new("¿Qué debo hacer?"), Category::Legal)
            .await
            .unwrap_err();

        assert!(matches!(err, GenerateError::EmptyAnswer));
    }
}
