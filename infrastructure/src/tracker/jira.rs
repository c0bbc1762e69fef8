//! Jira REST adapter for the [`TicketTrackerPort`].
//!
//! Uses the v2 issue API with basic auth (account email + API token).

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};
use triage_application::{TicketReceipt, TicketStatus, TicketTrackerPort, TrackerError};
use triage_domain::TicketDraft;

/// Request timeout for every Jira call.
const JIRA_TIMEOUT: Duration = Duration::from_secs(10);

/// Issue type used for drafted tickets.
const ISSUE_TYPE: &str = "Task";

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    key: String,
}

#[derive(Debug, Deserialize)]
struct IssueResponse {
    key: String,
    fields: IssueFields,
}

#[derive(Debug, Deserialize)]
struct IssueFields {
    status: NamedField,
    #[serde(default)]
    assignee: Option<Assignee>,
}

#[derive(Debug, Deserialize)]
struct NamedField {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Assignee {
    display_name: String,
}

/// Jira Cloud / Server ticket tracker
pub struct JiraTicketTracker {
    client: reqwest::Client,
    base_url: String,
    email: String,
    token: String,
    project_key: String,
}

impl JiraTicketTracker {
    pub fn new(
        base_url: impl Into<String>,
        email: impl Into<String>,
        token: impl Into<String>,
        project_key: impl Into<String>,
    ) -> Result<Self, TrackerError> {
        let client = reqwest::Client::builder()
            .timeout(JIRA_TIMEOUT)
            .build()
            .map_err(|e| TrackerError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            email: email.into(),
            token: token.into(),
            project_key: project_key.into(),
        })
    }

    /// Browser URL of an issue.
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base_url, key)
    }

    fn issue_payload(&self, draft: &TicketDraft) -> serde_json::Value {
        serde_json::json!({
            "fields": {
                "project": { "key": self.project_key },
                "summary": draft.summary,
                "description": draft.description,
                "issuetype": { "name": ISSUE_TYPE },
                "priority": { "name": draft.priority.as_str() },
                "labels": draft.labels,
            }
        })
    }

    async fn rejected(response: reqwest::Response) -> TrackerError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        TrackerError::Rejected { status, body }
    }
}

#[async_trait]
impl TicketTrackerPort for JiraTicketTracker {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn create_ticket(&self, draft: &TicketDraft) -> Result<TicketReceipt, TrackerError> {
        let url = format!("{}/rest/api/2/issue", self.base_url);
        debug!("Creating Jira issue in {}", self.project_key);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.email, Some(&self.token))
            .json(&self.issue_payload(draft))
            .send()
            .await
            .map_err(|e| TrackerError::RequestFailed(e.to_string()))?;

        if response.status() != reqwest::StatusCode::CREATED {
            return Err(Self::rejected(response).await);
        }

        let created: CreatedIssue = response
            .json()
            .await
            .map_err(|e| TrackerError::InvalidResponse(e.to_string()))?;

        info!("Created Jira issue {}", created.key);
        Ok(TicketReceipt {
            url: self.browse_url(&created.key),
            id: created.key,
        })
    }

    async fn ticket_status(&self, ticket_id: &str) -> Result<TicketStatus, TrackerError> {
        let url = format!("{}/rest/api/2/issue/{}", self.base_url, ticket_id);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.email, Some(&self.token))
            .send()
            .await
            .map_err(|e| TrackerError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejected(response).await);
        }

        let issue: IssueResponse = response
            .json()
            .await
            .map_err(|e| TrackerError::InvalidResponse(e.to_string()))?;

        Ok(TicketStatus {
            id: issue.key,
            status: issue.fields.status.name,
            assignee: issue.fields.assignee.map(|a| a.display_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_domain::{Classification, InquiryRequest, Team, Urgency};
    use wiremock::matchers::{body_partial_json, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tracker(server: &MockServer) -> JiraTicketTracker {
        JiraTicketTracker::new(server.uri(), "bot@example.com", "token", "INFRA").unwrap()
    }

    fn draft() -> TicketDraft {
        let request = InquiryRequest::new("our postgres is down in prod", "U1", "C1").unwrap();
        let classification = Classification::new(Urgency::High, "database", true);
        TicketDraft::compose(&request, &classification, Team::Database)
    }

    #[tokio::test]
    async fn test_create_ticket() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/api/2/issue"))
            .and(header_exists("authorization"))
            .and(body_partial_json(serde_json::json!({
                "fields": {
                    "project": {"key": "INFRA"},
                    "summary": "our postgres is down in prod",
                    "issuetype": {"name": "Task"},
                    "priority": {"name": "High"}
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "10001",
                "key": "INFRA-7",
                "self": "https://jira.example.com/rest/api/2/issue/10001"
            })))
            .mount(&server)
            .await;

        let receipt = tracker(&server).create_ticket(&draft()).await.unwrap();
        assert_eq!(receipt.id, "INFRA-7");
        assert_eq!(receipt.url, format!("{}/browse/INFRA-7", server.uri()));
    }

    #[tokio::test]
    async fn test_create_ticket_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/api/2/issue"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"errors":{"project":"invalid"}}"#),
            )
            .mount(&server)
            .await;

        let err = tracker(&server).create_ticket(&draft()).await.unwrap_err();
        match err {
            TrackerError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("project"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ticket_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/INFRA-7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "key": "INFRA-7",
                "fields": {
                    "status": {"name": "In Progress"},
                    "assignee": {"displayName": "Dana Ops"}
                }
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/INFRA-8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "key": "INFRA-8",
                "fields": {"status": {"name": "Open"}, "assignee": null}
            })))
            .mount(&server)
            .await;

        let tracker = tracker(&server);
        let status = tracker.ticket_status("INFRA-7").await.unwrap();
        assert_eq!(status.status, "In Progress");
        assert_eq!(status.assignee.as_deref(), Some("Dana Ops"));

        let unassigned = tracker.ticket_status("INFRA-8").await.unwrap();
        assert_eq!(unassigned.assignee, None);
    }

    #[tokio::test]
    async fn test_unknown_ticket() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/INFRA-404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = tracker(&server).ticket_status("INFRA-404").await.unwrap_err();
        assert!(matches!(err, TrackerError::Rejected { status: 404, .. }));
    }
}
