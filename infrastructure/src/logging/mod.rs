//! Logging infrastructure — persisted inquiry records.
//!
//! Provides [`JsonlInquiryRecorder`], an append-only JSONL writer that
//! implements the [`InquiryRecorder`](triage_application::InquiryRecorder)
//! port, and [`read_records`] for reporting over the same file.

mod jsonl_recorder;

pub use jsonl_recorder::{JsonlInquiryRecorder, RecordLogError, read_records};
