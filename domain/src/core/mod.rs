//! Core domain concepts shared across all subdomains.
//!
//! - [`inquiry::InquiryRequest`] — a validated support question with its origin
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod inquiry;
