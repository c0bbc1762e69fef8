//! Ticket draft synthesis.
//!
//! A [`TicketDraft`] is the pre-submission shape of a support ticket. It is
//! composed deterministically from the request, its classification and the
//! routed team; submission belongs to a ticket tracker adapter.

use crate::classification::{Classification, Urgency};
use crate::core::inquiry::InquiryRequest;
use crate::routing::Team;
use crate::util::ellipsize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum summary length in characters.
pub const SUMMARY_MAX_CHARS: usize = 100;

const NOT_SPECIFIED: &str = "Not specified";

/// Tracker priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Map urgency to priority; unrecognized urgency maps to `Medium`.
    pub fn from_urgency(urgency: &Urgency) -> Self {
        match urgency {
            Urgency::Low => Priority::Low,
            Urgency::Medium => Priority::Medium,
            Urgency::High => Priority::High,
            Urgency::Critical => Priority::Critical,
            Urgency::Unrecognized(_) => Priority::Medium,
        }
    }

    /// Name as the tracker expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDraft {
    pub summary: String,
    pub description: String,
    pub labels: Vec<String>,
    pub team: Team,
    pub priority: Priority,
}

impl TicketDraft {
    /// Compose the draft for a request routed to `team`.
    pub fn compose(request: &InquiryRequest, classification: &Classification, team: Team) -> Self {
        Self {
            summary: Self::summarize(request.question()),
            description: Self::describe(request, classification, team),
            labels: vec![
                team.to_string(),
                classification.category.clone(),
                classification.urgency.to_string(),
                "automated".to_string(),
                "infrastructure".to_string(),
            ],
            team,
            priority: Priority::from_urgency(&classification.urgency),
        }
    }

    /// Questions longer than [`SUMMARY_MAX_CHARS`] keep their first 97
    /// characters plus `...`; shorter ones are used verbatim.
    pub fn summarize(question: &str) -> String {
        ellipsize(question, SUMMARY_MAX_CHARS)
    }

    fn describe(request: &InquiryRequest, classification: &Classification, team: Team) -> String {
        format!(
            "Infrastructure Inquiry

**Question:**
{question}

**Details:**
- Environment: {environment}
- Deadline: {deadline}
- Urgency: {urgency}
- Category: {category}

**Assigned Team:** {team}

This ticket was automatically created by the Infrastructure Bot.
",
            question = request.question(),
            environment = request.environment().unwrap_or(NOT_SPECIFIED),
            deadline = request.deadline().unwrap_or(NOT_SPECIFIED),
            urgency = classification.urgency,
            category = classification.category,
            team = team,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(question: &str) -> InquiryRequest {
        InquiryRequest::new(question, "U1", "C1").unwrap()
    }

    #[test]
    fn test_summary_truncation() {
        let long = "x".repeat(150);
        let summary = TicketDraft::summarize(&long);
        assert_eq!(summary.chars().count(), 100);
        assert!(summary.ends_with("..."));
        assert_eq!(&summary[..97], &long[..97]);

        let short = "y".repeat(90);
        assert_eq!(TicketDraft::summarize(&short), short);
    }

    #[test]
    fn test_compose_labels_and_priority() {
        let classification = Classification::new(Urgency::High, "database", true);
        let draft = TicketDraft::compose(&request("postgres is down"), &classification, Team::Database);
        assert_eq!(
            draft.labels,
            ["database", "database", "high", "automated", "infrastructure"]
        );
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(draft.team, Team::Database);
        assert_eq!(draft.summary, "postgres is down");
    }

    #[test]
    fn test_description_defaults() {
        let draft = TicketDraft::compose(
            &request("dns broken"),
            &Classification::fallback(),
            Team::Network,
        );
        assert!(draft.description.contains("- Environment: Not specified"));
        assert!(draft.description.contains("- Deadline: Not specified"));
        assert!(draft.description.contains("- Urgency: medium"));
        assert!(draft.description.contains("- Category: other"));
        assert!(draft.description.contains("**Assigned Team:** network"));
    }

    #[test]
    fn test_description_embeds_request_details() {
        let req = request("cert expired")
            .with_environment(Some("prod".to_string()))
            .with_deadline(Some("Friday".to_string()));
        let draft = TicketDraft::compose(&req, &Classification::fallback(), Team::Security);
        assert!(draft.description.contains("**Question:**\ncert expired"));
        assert!(draft.description.contains("- Environment: prod"));
        assert!(draft.description.contains("- Deadline: Friday"));
    }

    #[test]
    fn test_priority_mapping() {
        assert_eq!(Priority::from_urgency(&Urgency::Low), Priority::Low);
        assert_eq!(Priority::from_urgency(&Urgency::Critical), Priority::Critical);
        assert_eq!(
            Priority::from_urgency(&Urgency::Unrecognized("asap".to_string())),
            Priority::Medium
        );
    }

    #[test]
    fn test_unrecognized_urgency_kept_in_labels() {
        let classification = Classification::new(Urgency::parse("asap"), "other", true);
        let draft = TicketDraft::compose(&request("help"), &classification, Team::Platform);
        assert_eq!(draft.labels[2], "asap");
        assert_eq!(draft.priority, Priority::Medium);
    }
}
