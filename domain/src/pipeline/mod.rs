//! Pipeline outputs.
//!
//! - [`result::PipelineResult`] — the single object handed to transport and persistence
//! - [`record::InquiryRecord`] — the flattened, persisted form of one processed inquiry
//! - [`stats::InquiryStats`] — aggregate counts over records

pub mod record;
pub mod result;
pub mod stats;

pub use record::InquiryRecord;
pub use result::{PipelineAction, PipelineResult, PipelineStage, Resolution};
pub use stats::{InquiryStats, ReportPeriod};
