//! Prompt templates for the model-backed pipeline stages.

pub mod template;

pub use template::PromptTemplate;
