//! Support ticket drafts.

pub mod draft;

pub use draft::{Priority, SUMMARY_MAX_CHARS, TicketDraft};
