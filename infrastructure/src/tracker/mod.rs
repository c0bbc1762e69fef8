//! Ticket tracker adapters

mod jira;

pub use jira::JiraTicketTracker;
