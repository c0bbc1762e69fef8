//! Aggregate metrics over inquiry records.

use super::record::InquiryRecord;
use chrono::{DateTime, Datelike, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reporting window of a metrics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    /// Since 00:00 UTC today
    Today,
    /// The last seven days
    Week,
    /// Since day 1 of the current month, 00:00 UTC
    Month,
    All,
}

impl ReportPeriod {
    /// First instant included in the window, `None` for all time.
    pub fn since(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            ReportPeriod::Today => now.date_naive().and_hms_opt(0, 0, 0).map(|t| t.and_utc()),
            ReportPeriod::Week => Some(now - TimeDelta::days(7)),
            ReportPeriod::Month => now
                .date_naive()
                .with_day(1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|t| t.and_utc()),
            ReportPeriod::All => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportPeriod::Today => "today",
            ReportPeriod::Week => "last 7 days",
            ReportPeriod::Month => "this month",
            ReportPeriod::All => "all time",
        }
    }
}

/// Counts over a set of inquiry records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryStats {
    pub total: usize,
    pub resolved_from_kb: usize,
    pub needs_team_action: usize,
    pub tickets_submitted: usize,
    pub by_team: HashMap<String, usize>,
    pub by_category: HashMap<String, usize>,
    pub by_urgency: HashMap<String, usize>,
    pub by_requester: HashMap<String, usize>,
    pub first_at: Option<DateTime<Utc>>,
    pub latest_at: Option<DateTime<Utc>>,
}

impl InquiryStats {
    /// Aggregate records received at or after `since` (all records when `None`).
    pub fn collect<'a, I>(records: I, since: Option<DateTime<Utc>>) -> Self
    where
        I: IntoIterator<Item = &'a InquiryRecord>,
    {
        let mut stats = Self::default();
        for record in records {
            if since.is_some_and(|s| record.timestamp < s) {
                continue;
            }
            stats.total += 1;
            if record.resolved_from_kb {
                stats.resolved_from_kb += 1;
            } else {
                stats.needs_team_action += 1;
            }
            if record.ticket_id.is_some() {
                stats.tickets_submitted += 1;
            }
            if let Some(team) = &record.assigned_team {
                *stats.by_team.entry(team.clone()).or_default() += 1;
            }
            if !record.category.is_empty() {
                *stats.by_category.entry(record.category.clone()).or_default() += 1;
            }
            if !record.urgency.is_empty() {
                *stats.by_urgency.entry(record.urgency.clone()).or_default() += 1;
            }
            *stats
                .by_requester
                .entry(record.requester_id.clone())
                .or_default() += 1;
            let at = record.timestamp;
            stats.first_at = Some(stats.first_at.map_or(at, |t| t.min(at)));
            stats.latest_at = Some(stats.latest_at.map_or(at, |t| t.max(at)));
        }
        stats
    }

    /// Share of inquiries answered from the knowledge base, in percent.
    pub fn kb_resolution_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.resolved_from_kb as f64 * 100.0 / self.total as f64
    }

    /// Entries of a distribution sorted by count descending, then name.
    pub fn most_common(distribution: &HashMap<String, usize>) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = distribution.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        entries
    }

    /// The `limit` newest records, newest first.
    pub fn recent(records: &[InquiryRecord], limit: usize) -> Vec<&InquiryRecord> {
        let mut newest: Vec<_> = records.iter().collect();
        newest.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        newest.truncate(limit);
        newest
    }
}
