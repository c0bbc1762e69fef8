//! Progress notification port
//!
//! Defines the interface for reporting progress during a pipeline run.

use triage_domain::PipelineStage;

/// Callback for progress updates during a pipeline run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: PipelineStage);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: PipelineStage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: PipelineStage) {}
    fn on_stage_complete(&self, _stage: PipelineStage) {}
}
