//! Knowledge base entities.

use super::relevance::RelevanceTier;
use serde::{Deserialize, Serialize};

/// A curated question/answer pair owned by a team.
///
/// This is the on-disk shape of one `knowledge_base.json` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    #[serde(default)]
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl KnowledgeEntry {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            team: team.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Text that gets embedded for similarity search.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.question, self.answer)
    }
}

/// A knowledge entry scored against a query.
///
/// `relevance` is fixed when the match is created and travels with it
/// (including through the cache).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeMatch {
    #[serde(default)]
    pub entry_id: String,
    pub question: String,
    pub answer: String,
    pub team: String,
    pub tags: Vec<String>,
    pub distance: f64,
    pub relevance: RelevanceTier,
}

impl KnowledgeMatch {
    /// Score an entry, deriving the tier from the distance.
    pub fn from_entry(entry: KnowledgeEntry, distance: f64) -> Self {
        Self {
            entry_id: entry.id,
            question: entry.question,
            answer: entry.answer,
            team: entry.team,
            tags: entry.tags,
            distance,
            relevance: RelevanceTier::from_distance(distance),
        }
    }

    /// Format for inclusion in a synthesis prompt (1-based `position`).
    pub fn to_prompt_block(&self, position: usize) -> String {
        format!(
            "Result {}:\nQuestion: {}\nAnswer: {}\nTeam: {}\nTags: {}",
            position,
            self.question,
            self.answer,
            self.team,
            self.tags.join(", ")
        )
    }
}

/// Sort matches best-first (ascending distance).
pub fn sort_by_distance(matches: &mut [KnowledgeMatch]) {
    matches.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
