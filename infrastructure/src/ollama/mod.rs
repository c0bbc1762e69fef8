//! Ollama adapter
//!
//! Chat completions back the [`LlmGateway`](triage_application::LlmGateway)
//! port; embeddings back the in-memory knowledge index.

pub mod client;
pub mod embedder;
pub mod error;
pub mod gateway;
pub mod types;
