use std::collections::HashMap;

use async_trait::async_trait;
use once_cell::sync::Lazy;

use super::rng::RandomSource;
use super::{StrategyError, Suggestion, SuggestionRequest, SuggestionStrategy};

pub const KNOWLEDGE_TYPE: &str = "generative_prompt";

#[derive(Debug, Clone, Copy)]
pub struct KnowledgeEntry {
    pub statement: &'static str,
    pub question: &'static str,
}

static KNOWLEDGE: Lazy<HashMap<&'static str, KnowledgeEntry>> = Lazy::new(|| {
    let entry = |statement, question| KnowledgeEntry {
        statement,
        question,
    };
    HashMap::from([
        (
            "project",
            entry(
                "Big projects can feel overwhelming when everything seems to matter at once.",
                "What is the smallest piece of it you could finish next?",
            ),
        ),
        (
            "work",
            entry(
                "Work has taken up a lot of space in your thoughts lately.",
                "What would a good-enough day at work look like?",
            ),
        ),
        (
            "deadline",
            entry(
                "Deadlines can make every hour feel borrowed.",
                "Which parts of this deadline are truly fixed, and which could bend?",
            ),
        ),
        (
            "sleep",
            entry(
                "Poor sleep makes everything else harder to carry.",
                "What usually helps you wind down, even a little?",
            ),
        ),
        (
            "manager",
            entry(
                "Friction with a manager can follow you home.",
                "What do you wish your manager understood about your situation?",
            ),
        ),
        (
            "meeting",
            entry(
                "Meetings can drain energy you need for everything else.",
                "Which of these meetings could you prepare for differently, or skip?",
            ),
        ),
        (
            "money",
            entry(
                "Money worries have a way of colouring every decision.",
                "What is one money question you could get a clear answer to this week?",
            ),
        ),
        (
            "family",
            entry(
                "Family ties can hold both comfort and strain.",
                "What boundary or conversation might ease things a little?",
            ),
        ),
        (
            "exam",
            entry(
                "Exams can make it feel like everything rides on a single day.",
                "How would you study if you trusted that one result does not define you?",
            ),
        ),
        (
            "health",
            entry(
                "Health worries can be exhausting to hold alone.",
                "Who could you share this with, or what information would settle your mind?",
            ),
        ),
    ])
});

pub fn lookup(topic: &str) -> Option<KnowledgeEntry> {
    KNOWLEDGE.get(topic.trim().to_lowercase().as_str()).copied()
}

/// Curated statement and question for well-known topics
#[derive(Debug, Clone, Copy, Default)]
pub struct KnowledgeBaseStrategy;

#[async_trait]
impl SuggestionStrategy for KnowledgeBaseStrategy {
    fn name(&self) -> &'static str {
        "knowledge_base"
    }

    async fn suggest(
        &self,
        request: &SuggestionRequest<'_>,
        _rng: &mut dyn RandomSource,
    ) -> Result<Suggestion, StrategyError> {
        let topic = &request.detected.topic;
        let entry = lookup(topic).ok_or(StrategyError::NoMatch)?;
        Ok(Suggestion {
            topic: topic.clone(),
            text: format!("{} {}", entry.statement, entry.question),
            kind: KNOWLEDGE_TYPE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(lookup("Project").is_some());
        assert!(lookup("sleep").is_some());
        assert!(lookup("garden").is_none());
    }
}
