//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot consultations
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON record with question, category, and answer
    Json,
}

/// CLI arguments for consulta
#[derive(Parser, Debug)]
#[command(name = "consulta")]
#[command(author, version, about = "Classify a question and answer it with an expert persona")]
#[command(long_about = r#"
Consulta assigns a free-text question to one of three subject-matter
categories (legal, contable, médica) using a language model, then answers
it with a category-specific professional persona. Questions outside those
categories are reported as not classifiable.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./consulta.toml     Project-level config
3. ~/.config/consulta/config.toml   Global config

The Groq API key is read from the environment variable named by
[provider].api_key_env (GROQ_API_KEY by default).

Example:
  consulta "¿Cómo se calcula el IVA?"
  consulta --output json "¿Cuáles son los derechos de un trabajador?"
  consulta --serve
"#)]
pub struct Cli {
    /// The question to classify and answer (not required with --serve)
    pub question: Option<String>,

    /// Start the HTTP API server instead of answering a single question
    #[arg(long)]
    pub serve: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
