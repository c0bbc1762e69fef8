//! Classifier response parsing.
//!
//! The classifier model is asked for three labeled lines:
//!
//! ```text
//! URGENCY: <low|medium|high|critical>
//! CATEGORY: <category>
//! NEEDS_TICKET: <yes|no>
//! ```
//!
//! Parsing is deliberately lenient. Each line is split on its first colon, the
//! key is lower-cased with `_` turned into spaces, and fields are matched by
//! substring, so order and casing do not matter. A repeated key silently
//! overwrites the earlier value (last one wins); there is no validation layer.

use super::entities::{Classification, DEFAULT_CATEGORY, Urgency};

/// Parse a classifier response.
///
/// Returns `None` when no line carries a recognizable key, so the caller can
/// treat the response as malformed. Fields missing from an otherwise valid
/// response take their [`Classification::fallback`] values.
///
/// # Examples
///
/// ```
/// use triage_domain::classification::{parse_classification, Urgency};
///
/// let c = parse_classification("URGENCY: high\nCATEGORY: database\nNEEDS_TICKET: yes").unwrap();
/// assert_eq!(c.urgency, Urgency::High);
/// assert_eq!(c.category, "database");
/// assert!(c.needs_ticket);
/// ```
pub fn parse_classification(response: &str) -> Option<Classification> {
    let mut urgency: Option<Urgency> = None;
    let mut category: Option<String> = None;
    let mut needs_ticket: Option<bool> = None;

    for line in response.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase().replace('_', " ");
        let value = value.trim().to_lowercase();

        if key.contains("urgency") {
            urgency = Some(Urgency::parse(&value));
        } else if key.contains("category") {
            category = Some(value);
        } else if key.contains("needs") || key.contains("ticket") {
            needs_ticket = Some(value == "yes");
        }
    }

    if urgency.is_none() && category.is_none() && needs_ticket.is_none() {
        return None;
    }

    let fallback = Classification::fallback();
    Some(Classification {
        urgency: urgency.unwrap_or(fallback.urgency),
        category: category
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        needs_ticket: needs_ticket.unwrap_or(fallback.needs_ticket),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_response() {
        let c = parse_classification("URGENCY: high\nCATEGORY: database\nNEEDS_TICKET: yes")
            .unwrap();
        assert_eq!(c, Classification::new(Urgency::High, "database", true));
    }

    #[test]
    fn test_order_and_case_independent() {
        let c = parse_classification("needs_ticket: No\ncategory: Network\nUrgency: LOW").unwrap();
        assert_eq!(c.urgency, Urgency::Low);
        assert_eq!(c.category, "network");
        assert!(!c.needs_ticket);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let c = parse_classification("URGENCY: low\nCATEGORY: k8s\nURGENCY: critical").unwrap();
        assert_eq!(c.urgency, Urgency::Critical);
    }

    #[test]
    fn test_value_split_on_first_colon_only() {
        let c = parse_classification("CATEGORY: db: replication\nURGENCY: high").unwrap();
        assert_eq!(c.category, "db: replication");
    }

    #[test]
    fn test_needs_ticket_requires_exact_yes() {
        let c = parse_classification("NEEDS_TICKET: yes please").unwrap();
        assert!(!c.needs_ticket);
        let c = parse_classification("NEEDS_TICKET:  YES ").unwrap();
        assert!(c.needs_ticket);
    }

    #[test]
    fn test_surrounding_chatter_ignored() {
        let response = "Sure, here is the classification.\n\nURGENCY: medium\nCATEGORY: monitoring\nNEEDS_TICKET: no\nThanks";
        let c = parse_classification(response).unwrap();
        assert_eq!(c, Classification::new(Urgency::Medium, "monitoring", false));
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let c = parse_classification("URGENCY: critical").unwrap();
        assert_eq!(c.urgency, Urgency::Critical);
        assert_eq!(c.category, "other");
        assert!(c.needs_ticket);
    }

    #[test]
    fn test_no_recognizable_keys_is_none() {
        assert!(parse_classification("I cannot classify this.").is_none());
        assert!(parse_classification("").is_none());
    }
}
