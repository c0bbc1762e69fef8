//! Port for persisting processed inquiries.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port keeps one machine-readable
//! record per inquiry for reporting.

use triage_domain::InquiryRecord;

/// Port for recording processed inquiries.
///
/// The `record` method is synchronous and non-fallible so persistence
/// problems never disturb the pipeline; implementations log and move on.
pub trait InquiryRecorder: Send + Sync {
    fn record(&self, record: &InquiryRecord);
}

/// No-op implementation for tests and when recording is disabled.
pub struct NoInquiryRecorder;

impl InquiryRecorder for NoInquiryRecorder {
    fn record(&self, _record: &InquiryRecord) {}
}
