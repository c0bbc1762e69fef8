//! Prompt templates for classification, answer synthesis and routing

use crate::knowledge::KnowledgeMatch;
use crate::routing::Team;

/// Templates for generating prompts at each model-backed stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the inquiry classifier
    pub fn classifier_system() -> &'static str {
        "You are an inquiry classifier for infrastructure support."
    }

    /// User prompt asking for the three labeled classification lines
    pub fn classifier_prompt(question: &str) -> String {
        format!(
            r#"Classify this infrastructure inquiry:

Question: {}

Determine:
1. Urgency: low, medium, high, critical
2. Category: kubernetes, database, network, security, deployment, monitoring, other
3. Needs ticket: yes or no (yes if complex/no knowledge base answer likely)

Respond in this exact format:
URGENCY: <level>
CATEGORY: <category>
NEEDS_TICKET: <yes/no>"#,
            question
        )
    }

    /// System prompt for knowledge-base answer synthesis
    pub fn knowledge_system() -> &'static str {
        r#"You are an infrastructure support assistant answering from a curated knowledge base.
Only use the provided search results. Be concise and practical, and include exact commands when the results contain them.
If the results do not answer the question, say so plainly instead of guessing."#
    }

    /// User prompt with the gated knowledge-base matches
    pub fn knowledge_prompt(question: &str, matches: &[KnowledgeMatch]) -> String {
        format!(
            r#"User question: {}

Knowledge base search results:
{}

Based on the search results, provide a clear and helpful answer. If the results are not relevant or no good match exists, clearly state that."#,
            question,
            Self::format_matches(matches)
        )
    }

    /// Render matches as numbered result blocks
    pub fn format_matches(matches: &[KnowledgeMatch]) -> String {
        matches
            .iter()
            .enumerate()
            .map(|(i, m)| m.to_prompt_block(i + 1))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// System prompt for the routing fallback
    pub fn router_system() -> &'static str {
        r#"You route infrastructure support requests to the single team best placed to handle them.
Answer with one team name from the list you are given, followed by a one-sentence reason."#
    }

    /// User prompt listing the available teams
    pub fn router_prompt(question: &str, category: &str) -> String {
        let category = if category.trim().is_empty() {
            "general"
        } else {
            category
        };

        let mut prompt = format!(
            r#"Analyze this infrastructure inquiry and determine which team should handle it:

Question: {}
Category: {}

Available teams:
"#,
            question, category
        );

        for team in Team::ALL {
            prompt.push_str(&format!("- {}: {}\n", team, team.description()));
        }

        prompt.push_str(
            "\nRespond with ONLY the team name (one word) and a brief reason (one sentence).",
        );
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeEntry;

    #[test]
    fn test_classifier_prompt_contains_question() {
        let prompt = PromptTemplate::classifier_prompt("Is DNS down?");
        assert!(prompt.contains("Question: Is DNS down?"));
        assert!(prompt.contains("NEEDS_TICKET: <yes/no>"));
    }

    #[test]
    fn test_router_prompt_lists_all_teams() {
        let prompt = PromptTemplate::router_prompt("VPN flaps", "");
        assert!(prompt.contains("Category: general"));
        for team in Team::ALL {
            assert!(prompt.contains(&format!("- {}:", team)));
        }
    }

    #[test]
    fn test_knowledge_prompt_numbers_results() {
        let matches = vec![
            KnowledgeMatch::from_entry(KnowledgeEntry::new("1", "Q1", "A1", "platform"), 0.1),
            KnowledgeMatch::from_entry(KnowledgeEntry::new("2", "Q2", "A2", "devops"), 0.2),
        ];
        let prompt = PromptTemplate::knowledge_prompt("help", &matches);
        assert!(prompt.contains("Result 1:\nQuestion: Q1"));
        assert!(prompt.contains("Result 2:\nQuestion: Q2"));
    }
}
