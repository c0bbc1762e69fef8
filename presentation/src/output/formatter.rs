//! Output formatter trait

use triage_application::HandledInquiry;
use triage_domain::OutputFormat;

/// Trait for formatting handled inquiries
pub trait OutputFormatter {
    /// Format the complete result
    fn format(&self, inquiry: &HandledInquiry) -> String;

    /// Format as JSON
    fn format_json(&self, inquiry: &HandledInquiry) -> String;

    /// Format the answer or ticket summary only
    fn format_brief(&self, inquiry: &HandledInquiry) -> String;

    /// Dispatch on the configured [`OutputFormat`]
    fn render(&self, inquiry: &HandledInquiry, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(inquiry),
            OutputFormat::Brief => self.format_brief(inquiry),
            OutputFormat::Json => self.format_json(inquiry),
        }
    }
}
