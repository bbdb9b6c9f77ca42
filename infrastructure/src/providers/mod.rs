//! Provider adapters implementing the LLM gateway port

mod groq;

pub use groq::GroqLlmGateway;
