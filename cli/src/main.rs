//! CLI entrypoint for consulta
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use consulta_application::{
    AnswerQuestionError, AnswerQuestionUseCase, ClassifyQuestionUseCase, GenerateAnswerUseCase,
};
use consulta_domain::Question;
use consulta_infrastructure::{ConfigLoader, GroqLlmGateway};
use consulta_presentation::{Cli, ConsoleFormatter, OutputFormat, http};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };

    // === Dependency Injection ===
    // Create the infrastructure adapter (Groq gateway), shared by both stages
    let gateway = Arc::new(GroqLlmGateway::new(&config.provider)?);
    let classifier = ClassifyQuestionUseCase::new(gateway.clone());
    let generator = GenerateAnswerUseCase::new(gateway);
    let use_case = AnswerQuestionUseCase::new(classifier, generator);

    // Server mode
    if cli.serve {
        info!("Starting consulta API server");
        let state = http::AppState::new(use_case);
        http::server::run(state, &config.server.bind_addr()).await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --serve for the HTTP API."),
    };

    let Some(question) = Question::try_new(question) else {
        bail!("Question cannot be empty.");
    };

    match use_case.execute(question).await {
        Ok(consultation) => {
            let output = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format(&consultation),
                OutputFormat::Json => ConsoleFormatter::format_json(&consultation),
            };
            println!("{}", output);
            Ok(())
        }
        Err(AnswerQuestionError::Unclassifiable) => {
            bail!("No se pudo clasificar la pregunta.")
        }
        Err(e) => Err(e.into()),
    }
}
