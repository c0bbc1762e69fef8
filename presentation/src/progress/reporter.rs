//! Progress reporting for pipeline execution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use triage_application::ProgressNotifier;
use triage_domain::PipelineStage;

/// Reports pipeline stages with a spinner on stderr
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Whether the run ends after this stage.
    fn is_final(stage: PipelineStage) -> bool {
        matches!(
            stage,
            PipelineStage::AnsweredFromKb | PipelineStage::GeneratedTicketDetails
        )
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: PipelineStage) {
        self.bar.set_prefix(stage.display_name());
        self.bar.set_message("...");
    }

    fn on_stage_complete(&self, stage: PipelineStage) {
        self.bar
            .println(format!("{} {}", "v".green(), stage.display_name()));
        if Self::is_final(stage) {
            self.bar.finish_and_clear();
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: PipelineStage) {
        eprintln!("{} {}", "->".cyan(), stage.display_name().bold());
    }

    fn on_stage_complete(&self, _stage: PipelineStage) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_stages() {
        assert!(ProgressReporter::is_final(PipelineStage::AnsweredFromKb));
        assert!(ProgressReporter::is_final(PipelineStage::GeneratedTicketDetails));
        assert!(!ProgressReporter::is_final(PipelineStage::SearchedKb));
    }

    #[test]
    fn test_reporter_finishes_on_final_stage() {
        let reporter = ProgressReporter::new();
        reporter.bar.set_draw_target(indicatif::ProgressDrawTarget::hidden());
        reporter.on_stage_start(PipelineStage::Classified);
        reporter.on_stage_complete(PipelineStage::Classified);
        assert!(!reporter.bar.is_finished());
        reporter.on_stage_start(PipelineStage::AnsweredFromKb);
        reporter.on_stage_complete(PipelineStage::AnsweredFromKb);
        assert!(reporter.bar.is_finished());
    }
}
