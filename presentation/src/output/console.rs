//! Console output formatter for pipeline results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use triage_application::{HandledInquiry, TicketStatus, TicketSubmission};
use triage_domain::util::ellipsize;
use triage_domain::{InquiryRecord, InquiryStats, PipelineResult, Resolution, TicketDraft};

/// Formats pipeline results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result
    pub fn format(inquiry: &HandledInquiry) -> String {
        let result = &inquiry.result;
        let mut output = String::new();

        output.push_str(&Self::header("Inquiry Triage"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            result.request.question()
        ));
        if let Some(environment) = result.request.environment() {
            output.push_str(&format!("{} {}\n", "Environment:".cyan().bold(), environment));
        }
        if let Some(deadline) = result.request.deadline() {
            output.push_str(&format!("{} {}\n", "Deadline:".cyan().bold(), deadline));
        }

        // Classification
        output.push_str(&Self::section_header("Classification"));
        let c = &result.classification;
        output.push_str(&format!(
            "  Urgency: {}\n  Category: {}\n  Needs ticket: {}\n",
            Self::urgency_colored(c.urgency.as_str()),
            c.category,
            if c.needs_ticket { "yes" } else { "no" }
        ));

        // Knowledge base
        output.push_str(&Self::section_header("Knowledge Base"));
        let k = &result.knowledge;
        output.push_str(&format!("  Confidence: {}\n", k.confidence));
        if let Some(error) = &k.error {
            output.push_str(&format!("  {} {}\n", "Error:".red(), error));
        }
        if let Some(source) = &k.source {
            output.push_str(&format!(
                "  Best match: {} ({}, distance {:.3})\n",
                source.question, source.team, source.distance
            ));
        }

        match &result.resolution {
            Resolution::AnswerFromKb { answer, .. } => {
                output.push_str(&Self::section_header("Answer"));
                output.push_str(&format!("\n{}\n", answer));
            }
            Resolution::CreateTicket { routing, ticket } => {
                output.push_str(&Self::section_header("Routing"));
                output.push_str(&format!(
                    "  Team: {}\n  Method: {} ({} confidence)\n  Reason: {}\n",
                    routing.team.to_string().yellow().bold(),
                    routing.method,
                    routing.confidence,
                    routing.reason
                ));

                output.push_str(&Self::section_header("Ticket"));
                output.push_str(&Self::format_ticket(ticket));
            }
        }

        if let Some(submission) = &inquiry.submission {
            output.push('\n');
            output.push_str(&Self::format_submission(submission, result));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Steps:".dimmed(),
            result
                .steps
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(" → ")
                .dimmed()
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(inquiry: &HandledInquiry) -> String {
        serde_json::to_string_pretty(inquiry).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the answer or ticket summary only (concise output)
    pub fn format_brief(inquiry: &HandledInquiry) -> String {
        let result = &inquiry.result;
        let mut output = match &result.resolution {
            Resolution::AnswerFromKb { answer, .. } => {
                format!("{}\n{}\n", "Answer from knowledge base:".green().bold(), answer)
            }
            Resolution::CreateTicket { routing, ticket } => format!(
                "{} {} [{}] {}\n",
                "Ticket for".yellow().bold(),
                routing.team.to_string().yellow().bold(),
                ticket.priority,
                ticket.summary
            ),
        };

        if let Some(submission) = &inquiry.submission {
            output.push_str(&Self::format_submission(submission, result));
        }
        output
    }

    pub fn format_ticket(ticket: &TicketDraft) -> String {
        format!(
            "  Summary: {}\n  Priority: {}\n  Labels: {}\n\n{}\n",
            ticket.summary.bold(),
            ticket.priority,
            ticket.labels.join(", "),
            Self::indent(ticket.description.trim_end(), "  ")
        )
    }

    fn format_submission(submission: &TicketSubmission, result: &PipelineResult) -> String {
        match submission {
            TicketSubmission::Created(receipt) => format!(
                "{} {}\n  {}\n",
                "Ticket created:".green().bold(),
                receipt.id,
                receipt.url
            ),
            TicketSubmission::Disabled => {
                let (team, priority, summary) = result
                    .ticket()
                    .map(|t| (t.team.to_string(), t.priority.to_string(), t.summary.clone()))
                    .unwrap_or_default();
                format!(
                    "{}\n  Would have created ticket:\n  - Summary: {}\n  - Team: {}\n  - Priority: {}\n",
                    "Ticket tracker is not configured.".yellow(),
                    summary,
                    team,
                    priority
                )
            }
            TicketSubmission::Failed { error } => {
                format!("{} {}\n", "Ticket submission failed:".red().bold(), error)
            }
        }
    }

    /// One line per batch item
    pub fn format_batch_line(index: usize, inquiry: &HandledInquiry) -> String {
        let result = &inquiry.result;
        let outcome = match &result.resolution {
            Resolution::AnswerFromKb { .. } => "answered".green().to_string(),
            Resolution::CreateTicket { routing, .. } => {
                format!("{} {}", "ticket →".yellow(), routing.team)
            }
        };
        format!(
            "{:>3}. [{}] {} ({})",
            index + 1,
            outcome,
            result.request.question(),
            result.classification.urgency
        )
    }

    pub fn format_stats(stats: &InquiryStats, period: &str) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!("Inquiry Metrics ({})", period)));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Total inquiries:".cyan().bold(), stats.total));
        output.push_str(&format!(
            "  Resolved from knowledge base: {} ({:.1}%)\n",
            stats.resolved_from_kb,
            stats.kb_resolution_rate()
        ));
        output.push_str(&format!(
            "  Needed team action: {}\n  Tickets submitted: {}\n",
            stats.needs_team_action, stats.tickets_submitted
        ));
        if let (Some(first), Some(latest)) = (stats.first_at, stats.latest_at) {
            output.push_str(&format!(
                "  First inquiry: {}\n  Latest inquiry: {}\n",
                first.format("%Y-%m-%d %H:%M"),
                latest.format("%Y-%m-%d %H:%M")
            ));
        }

        for (title, distribution) in [
            ("By team", &stats.by_team),
            ("By category", &stats.by_category),
            ("By urgency", &stats.by_urgency),
        ] {
            if distribution.is_empty() {
                continue;
            }
            output.push_str(&Self::section_header(title));
            for (name, count) in InquiryStats::most_common(distribution) {
                output.push_str(&format!("  {:<16} {}\n", name, count));
            }
        }

        if !stats.by_requester.is_empty() {
            output.push_str(&Self::section_header("Most active requesters"));
            for (name, count) in InquiryStats::most_common(&stats.by_requester)
                .into_iter()
                .take(5)
            {
                output.push_str(&format!("  {:<16} {} inquiries\n", name, count));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Newest inquiries, one block each
    pub fn format_recent(records: &[&InquiryRecord]) -> String {
        let mut output = Self::section_header(&format!("Recent {} inquiries", records.len()));
        if records.is_empty() {
            output.push_str("  No inquiries yet\n");
            return output;
        }

        for (i, record) in records.iter().enumerate() {
            let outcome = if record.resolved_from_kb {
                "answered".green()
            } else {
                "ticket".yellow()
            };
            output.push_str(&format!(
                "{:>3}. [{}] {}\n     {}\n     Team: {} | Category: {} | Environment: {}\n",
                i + 1,
                outcome,
                record.timestamp.format("%Y-%m-%d %H:%M"),
                ellipsize(&record.question, 80),
                record.assigned_team.as_deref().unwrap_or("N/A"),
                record.category,
                record.environment.as_deref().unwrap_or("N/A"),
            ));
        }
        output
    }

    pub fn format_ticket_status(status: &TicketStatus) -> String {
        format!(
            "{} {}\n  Status: {}\n  Assignee: {}\n",
            "Ticket:".cyan().bold(),
            status.id,
            status.status.bold(),
            status.assignee.as_deref().unwrap_or("Unassigned")
        )
    }

    fn urgency_colored(urgency: &str) -> String {
        match urgency {
            "critical" => urgency.red().bold().to_string(),
            "high" => urgency.red().to_string(),
            "medium" => urgency.yellow().to_string(),
            _ => urgency.to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, inquiry: &HandledInquiry) -> String {
        Self::format(inquiry)
    }

    fn format_json(&self, inquiry: &HandledInquiry) -> String {
        Self::format_json(inquiry)
    }

    fn format_brief(&self, inquiry: &HandledInquiry) -> String {
        Self::format_brief(inquiry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use triage_application::TicketReceipt;
    use triage_domain::{
        Classification, InquiryRecord, InquiryRequest, KnowledgeAnswer, KnowledgeEntry,
        KnowledgeMatch, OutputFormat, PipelineStage, RoutingDecision, Team, Urgency,
    };

    fn ticket_inquiry(submission: Option<TicketSubmission>) -> HandledInquiry {
        let request = InquiryRequest::new("our postgres is down in prod", "U1", "C1").unwrap();
        let classification = Classification::new(Urgency::Critical, "database", true);
        let ticket = TicketDraft::compose(&request, &classification, Team::Database);
        let result = PipelineResult {
            received_at: Utc::now(),
            request,
            classification,
            knowledge: KnowledgeAnswer::no_candidates(),
            resolution: Resolution::CreateTicket {
                routing: RoutingDecision::keyword(Team::Database),
                ticket,
            },
            steps: vec![
                PipelineStage::Classified,
                PipelineStage::SearchedKb,
                PipelineStage::RoutedToTeam,
                PipelineStage::GeneratedTicketDetails,
            ],
            completed: true,
        };
        let record = InquiryRecord::from_result(&result);
        HandledInquiry {
            result,
            submission,
            record,
        }
    }

    fn answered_inquiry() -> HandledInquiry {
        let source = KnowledgeMatch::from_entry(
            KnowledgeEntry::new("kb-1", "How do I restart a pod?", "rollout restart", "platform"),
            0.1,
        );
        let result = PipelineResult {
            received_at: Utc::now(),
            request: InquiryRequest::new("How do I restart a pod?", "U1", "C1").unwrap(),
            classification: Classification::fallback(),
            knowledge: KnowledgeAnswer::answered("Run kubectl rollout restart.", vec![source.clone()]),
            resolution: Resolution::AnswerFromKb {
                answer: "Run kubectl rollout restart.".to_string(),
                source,
            },
            steps: vec![
                PipelineStage::Classified,
                PipelineStage::SearchedKb,
                PipelineStage::AnsweredFromKb,
            ],
            completed: true,
        };
        let record = InquiryRecord::from_result(&result);
        HandledInquiry {
            result,
            submission: None,
            record,
        }
    }

    #[test]
    fn test_full_ticket_output() {
        colored::control::set_override(false);
        let out = ConsoleFormatter::format(&ticket_inquiry(None));
        assert!(out.contains("Team: database"));
        assert!(out.contains("Priority: Critical"));
        assert!(out.contains("classified → searched_kb → routed_to_team"));
    }

    #[test]
    fn test_brief_answer_output() {
        colored::control::set_override(false);
        let out = ConsoleFormatter.render(&answered_inquiry(), OutputFormat::Brief);
        assert!(out.starts_with("Answer from knowledge base:"));
        assert!(out.contains("Run kubectl rollout restart."));
    }

    #[test]
    fn test_json_output_has_action() {
        let out = ConsoleFormatter::format_json(&ticket_inquiry(Some(TicketSubmission::Created(
            TicketReceipt {
                id: "INFRA-1".to_string(),
                url: "https://jira.example.com/browse/INFRA-1".to_string(),
            },
        ))));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["action"], "create_ticket");
        assert_eq!(value["completed"], true);
        assert_eq!(value["submission"]["status"], "created");
        assert_eq!(value["submission"]["id"], "INFRA-1");
    }

    #[test]
    fn test_disabled_submission_shows_dry_run() {
        colored::control::set_override(false);
        let out = ConsoleFormatter::format_brief(&ticket_inquiry(Some(TicketSubmission::Disabled)));
        assert!(out.contains("Would have created ticket"));
        assert!(out.contains("- Team: database"));
    }

    #[test]
    fn test_stats_output() {
        colored::control::set_override(false);
        let inquiry = ticket_inquiry(None);
        let stats = InquiryStats::collect([&inquiry.record], None);
        let out = ConsoleFormatter::format_stats(&stats, "all time");
        assert!(out.contains("Total inquiries: 1"));
        assert!(out.contains("Resolved from knowledge base: 0 (0.0%)"));
        assert!(out.contains("database"));
        assert!(out.contains("Most active requesters"));
        assert!(out.contains("U1               1 inquiries"));
        assert!(out.contains("First inquiry:"));
    }

    #[test]
    fn test_recent_output() {
        colored::control::set_override(false);
        let ticket = ticket_inquiry(None);
        let answered = answered_inquiry();
        let out = ConsoleFormatter::format_recent(&[&ticket.record, &answered.record]);
        assert!(out.contains("Recent 2 inquiries"));
        assert!(out.contains("  1. [ticket]"));
        assert!(out.contains("our postgres is down in prod"));
        assert!(out.contains("Team: database | Category: database"));
        assert!(out.contains("  2. [answered]"));
        assert!(out.contains("Team: N/A"));
    }

    #[test]
    fn test_recent_output_empty() {
        colored::control::set_override(false);
        assert!(ConsoleFormatter::format_recent(&[]).contains("No inquiries yet"));
    }
}
