//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod classify_inquiry;
pub mod handle_inquiry;
pub mod process_inquiry;
pub mod retrieve_knowledge;
pub mod route_inquiry;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod test_support;
