//! Application-level configuration.
//!
//! - [`PipelineParams`] — model timeout, retrieval depth and cache lifetime

pub mod pipeline_params;

pub use pipeline_params::PipelineParams;
