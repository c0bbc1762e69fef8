//! Handle Inquiry use case
//!
//! Wraps the pipeline with the surrounding application duties: optional ticket
//! submission to the tracker and persisting an [`InquiryRecord`].

use crate::ports::inquiry_recorder::{InquiryRecorder, NoInquiryRecorder};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::ticket_tracker::{DisabledTicketTracker, TicketReceipt, TicketTrackerPort};
use crate::use_cases::process_inquiry::ProcessInquiryUseCase;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use triage_domain::{InquiryRecord, InquiryRequest, PipelineResult};

/// What happened to the ticket draft after the pipeline produced one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TicketSubmission {
    Created(TicketReceipt),
    /// Submission was requested but no tracker is configured.
    Disabled,
    Failed { error: String },
}

/// Pipeline result plus submission outcome and the persisted record.
#[derive(Debug, Clone, Serialize)]
pub struct HandledInquiry {
    #[serde(flatten)]
    pub result: PipelineResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<TicketSubmission>,
    #[serde(skip)]
    pub record: InquiryRecord,
}

impl HandledInquiry {
    pub fn receipt(&self) -> Option<&TicketReceipt> {
        match &self.submission {
            Some(TicketSubmission::Created(receipt)) => Some(receipt),
            _ => None,
        }
    }
}

/// Use case for handling one inquiry end to end.
pub struct HandleInquiryUseCase {
    pipeline: ProcessInquiryUseCase,
    tracker: Arc<dyn TicketTrackerPort>,
    recorder: Arc<dyn InquiryRecorder>,
    submit_tickets: bool,
}

impl HandleInquiryUseCase {
    pub fn new(pipeline: ProcessInquiryUseCase) -> Self {
        Self {
            pipeline,
            tracker: Arc::new(DisabledTicketTracker),
            recorder: Arc::new(NoInquiryRecorder),
            submit_tickets: false,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_tracker(mut self, tracker: Arc<dyn TicketTrackerPort>) -> Self {
        self.tracker = tracker;
        self
    }

    pub fn with_recorder(mut self, recorder: Arc<dyn InquiryRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    /// Submit drafted tickets to the tracker.
    pub fn with_submission(mut self, submit: bool) -> Self {
        self.submit_tickets = submit;
        self
    }

    // ==================== Execution ====================

    pub async fn execute(&self, request: InquiryRequest) -> HandledInquiry {
        self.execute_with_progress(request, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        request: InquiryRequest,
        progress: &dyn ProgressNotifier,
    ) -> HandledInquiry {
        let result = self.pipeline.execute_with_progress(request, progress).await;
        let submission = self.submit(&result).await;

        let record = match &submission {
            Some(TicketSubmission::Created(receipt)) => {
                InquiryRecord::from_result(&result).with_ticket(&receipt.id, &receipt.url)
            }
            _ => InquiryRecord::from_result(&result),
        };
        self.recorder.record(&record);

        HandledInquiry {
            result,
            submission,
            record,
        }
    }

    async fn submit(&self, result: &PipelineResult) -> Option<TicketSubmission> {
        if !self.submit_tickets {
            return None;
        }
        let draft = result.ticket()?;

        if !self.tracker.is_enabled() {
            warn!("Ticket submission requested but no tracker is configured");
            return Some(TicketSubmission::Disabled);
        }

        Some(match self.tracker.create_ticket(draft).await {
            Ok(receipt) => {
                info!("Created ticket {}", receipt.id);
                TicketSubmission::Created(receipt)
            }
            Err(e) => {
                warn!("Ticket submission failed: {}", e);
                TicketSubmission::Failed {
                    error: e.to_string(),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineParams;
    use crate::ports::cache::NoCache;
    use crate::ports::ticket_tracker::{TicketStatus, TrackerError};
    use crate::use_cases::test_support::{MockGateway, MockSearch, hit};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use triage_domain::{TeamKeywords, TicketDraft};

    struct MockTracker {
        result: Result<TicketReceipt, TrackerError>,
        drafts: Mutex<Vec<TicketDraft>>,
    }

    impl MockTracker {
        fn accepting() -> Self {
            Self {
                result: Ok(TicketReceipt {
                    id: "INFRA-42".to_string(),
                    url: "https://jira.example.com/browse/INFRA-42".to_string(),
                }),
                drafts: Mutex::new(Vec::new()),
            }
        }

        fn rejecting() -> Self {
            Self {
                result: Err(TrackerError::Rejected {
                    status: 400,
                    body: "bad project".to_string(),
                }),
                drafts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TicketTrackerPort for MockTracker {
        fn is_enabled(&self) -> bool {
            true
        }

        async fn create_ticket(&self, draft: &TicketDraft) -> Result<TicketReceipt, TrackerError> {
            self.drafts.lock().unwrap().push(draft.clone());
            self.result.clone()
        }

        async fn ticket_status(&self, _ticket_id: &str) -> Result<TicketStatus, TrackerError> {
            Err(TrackerError::NotConfigured)
        }
    }

    #[derive(Default)]
    struct MemoryRecorder {
        records: Mutex<Vec<InquiryRecord>>,
    }

    impl InquiryRecorder for MemoryRecorder {
        fn record(&self, record: &InquiryRecord) {
            self.records.lock().unwrap().push(record.clone());
        }
    }

    fn pipeline(search: MockSearch, responses: &[&str]) -> ProcessInquiryUseCase {
        ProcessInquiryUseCase::new(
            Arc::new(MockGateway::with_responses(responses.iter().copied())),
            Arc::new(search),
            Arc::new(NoCache),
            TeamKeywords::default(),
            PipelineParams::default(),
        )
    }

    fn ticket_pipeline() -> ProcessInquiryUseCase {
        pipeline(
            MockSearch::empty(),
            &["URGENCY: high\nCATEGORY: database\nNEEDS_TICKET: yes"],
        )
    }

    fn request() -> InquiryRequest {
        InquiryRequest::new("our postgres is down in prod", "U1", "C1").unwrap()
    }

    #[tokio::test]
    async fn test_submits_and_records_ticket() {
        let tracker = Arc::new(MockTracker::accepting());
        let recorder = Arc::new(MemoryRecorder::default());
        let uc = HandleInquiryUseCase::new(ticket_pipeline())
            .with_tracker(tracker.clone())
            .with_recorder(recorder.clone())
            .with_submission(true);

        let handled = uc.execute(request()).await;

        assert_eq!(handled.receipt().unwrap().id, "INFRA-42");
        assert_eq!(tracker.drafts.lock().unwrap().len(), 1);

        let records = recorder.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ticket_id.as_deref(), Some("INFRA-42"));
        assert_eq!(records[0].assigned_team.as_deref(), Some("database"));
    }

    #[tokio::test]
    async fn test_no_submission_unless_requested() {
        let tracker = Arc::new(MockTracker::accepting());
        let uc = HandleInquiryUseCase::new(ticket_pipeline()).with_tracker(tracker.clone());

        let handled = uc.execute(request()).await;
        assert!(handled.submission.is_none());
        assert!(tracker.drafts.lock().unwrap().is_empty());
        assert!(handled.record.ticket_id.is_none());
    }

    #[tokio::test]
    async fn test_disabled_tracker() {
        let uc = HandleInquiryUseCase::new(ticket_pipeline()).with_submission(true);
        let handled = uc.execute(request()).await;
        assert_eq!(handled.submission, Some(TicketSubmission::Disabled));
    }

    #[tokio::test]
    async fn test_rejected_submission_is_reported() {
        let uc = HandleInquiryUseCase::new(ticket_pipeline())
            .with_tracker(Arc::new(MockTracker::rejecting()))
            .with_submission(true);

        let handled = uc.execute(request()).await;
        match handled.submission {
            Some(TicketSubmission::Failed { error }) => assert!(error.contains("bad project")),
            other => panic!("unexpected submission: {:?}", other),
        }
        assert!(handled.result.completed);
    }

    #[tokio::test]
    async fn test_answered_inquiry_is_not_submitted() {
        let tracker = Arc::new(MockTracker::accepting());
        let recorder = Arc::new(MemoryRecorder::default());
        let uc = HandleInquiryUseCase::new(pipeline(
            MockSearch::with_hits(vec![hit("kb-1", "How do I restart a pod?", "platform", 0.1)]),
            &["URGENCY: low\nCATEGORY: kubernetes\nNEEDS_TICKET: no", "Restart it."],
        ))
        .with_tracker(tracker.clone())
        .with_recorder(recorder.clone())
        .with_submission(true);

        let handled = uc
            .execute(InquiryRequest::new("How do I restart a pod?", "U1", "C1").unwrap())
            .await;

        assert!(handled.submission.is_none());
        assert!(tracker.drafts.lock().unwrap().is_empty());
        assert!(recorder.records.lock().unwrap()[0].resolved_from_kb);
    }
}
