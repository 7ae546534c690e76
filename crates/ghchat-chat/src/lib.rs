//! Conversation management for ghchat
//!
//! This crate provides the model registry, the append-only
//! conversation state, and the single-request submission path against
//! the inference endpoint.

pub mod registry;
pub mod session;

pub use registry::ModelRegistry;
pub use session::{ChatSession, TurnOutcome};

/// Default inference endpoint (GitHub Models, OpenAI-compatible)
pub const INFERENCE_API_URL: &str = "https://models.github.ai/inference/chat/completions";

/// Models seeded into a fresh registry
pub const DEFAULT_MODELS: [&str; 3] = [
    "openai/gpt-4o",
    "openai/gpt-4-turbo",
    "openai/gpt-3.5-turbo",
];
