//! Scripted port doubles shared by the use case tests.

use crate::ports::cache::{CacheError, CachePort};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::semantic_search::{SearchError, SearchHit, SemanticSearch};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use triage_domain::KnowledgeEntry;

// ==================== Gateway ====================

pub(crate) struct MockGateway {
    responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    prompts: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl MockGateway {
    pub(crate) fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::scripted(responses.into_iter().map(|r| Ok(r.into())).collect())
    }

    pub(crate) fn failing(error: GatewayError) -> Self {
        Self::scripted(vec![Err(error)])
    }

    pub(crate) fn scripted(responses: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            prompts: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn complete(&self, _system_prompt: &str, prompt: &str) -> Result<String, GatewayError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }
}

// ==================== Search ====================

pub(crate) struct MockSearch {
    hits: Result<Vec<SearchHit>, SearchError>,
    calls: AtomicUsize,
}

impl MockSearch {
    pub(crate) fn with_hits(hits: Vec<SearchHit>) -> Self {
        Self {
            hits: Ok(hits),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::with_hits(Vec::new())
    }

    pub(crate) fn failing() -> Self {
        Self {
            hits: Err(SearchError::Unavailable("index offline".to_string())),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SemanticSearch for MockSearch {
    async fn search(&self, _query: &str, k: usize) -> Result<Vec<SearchHit>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.hits
            .clone()
            .map(|hits| hits.into_iter().take(k).collect())
    }

    async fn entry_count(&self) -> Result<usize, SearchError> {
        self.hits.as_ref().map(Vec::len).map_err(Clone::clone)
    }
}

pub(crate) fn hit(id: &str, question: &str, team: &str, distance: f64) -> SearchHit {
    SearchHit::new(
        KnowledgeEntry::new(id, question, format!("answer for {}", question), team)
            .with_tags(["infra"]),
        distance,
    )
}

// ==================== Cache ====================

/// Cache with a manually advanced clock, so expiry can be tested without sleeping.
pub(crate) struct MockCache {
    entries: Mutex<HashMap<String, (Value, Duration)>>,
    now: Mutex<Duration>,
    fail_reads: bool,
    sets: AtomicUsize,
}

impl MockCache {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            now: Mutex::new(Duration::ZERO),
            fail_reads: false,
            sets: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::new()
        }
    }

    pub(crate) fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }

    pub(crate) fn insert_raw(&self, key: &str, value: Value) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value, Duration::MAX));
    }

    pub(crate) fn set_count(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CachePort for MockCache {
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        if self.fail_reads {
            return Err(CacheError::Unavailable("connection refused".to_string()));
        }
        let now = *self.now.lock().unwrap();
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(key)
            .filter(|(_, expires_at)| now < *expires_at)
            .map(|(value, _)| value.clone()))
    }

    async fn set(&self, key: &str, value: Value, ttl: Duration) -> bool {
        self.sets.fetch_add(1, Ordering::SeqCst);
        let expires_at = *self.now.lock().unwrap() + ttl;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value, expires_at));
        true
    }
}
