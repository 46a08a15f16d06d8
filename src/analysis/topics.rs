use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;
use crate::nlp::{Analysis, EntityLabel, LinguisticAnalyzer, Pos};

/// Entity labels that become topic keys. Dates, numbers and places other
/// than GPEs are left out to keep the key space small.
const TOPIC_LABELS: [EntityLabel; 3] = [EntityLabel::Person, EntityLabel::Org, EntityLabel::Gpe];

/// Reduces an entry to its lower-cased topic keys
#[derive(Clone)]
pub struct TopicExtractor {
    analyzer: Arc<dyn LinguisticAnalyzer>,
}

impl TopicExtractor {
    pub fn new(analyzer: Arc<dyn LinguisticAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Distinct topic keys in first-seen order: chunk roots, then entities.
    pub fn extract(&self, text: &str) -> Result<Vec<String>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let analysis = self.analyzer.analyze(text)?;
        Ok(topics_from(&analysis))
    }
}

pub fn topics_from(analysis: &Analysis) -> Vec<String> {
    let roots = analysis
        .noun_chunks
        .iter()
        .filter(|chunk| chunk.word_count > 1 || chunk.root_pos != Pos::Pron)
        .map(|chunk| chunk.root_text.to_lowercase());
    let entities = analysis
        .entities
        .iter()
        .filter(|ent| TOPIC_LABELS.contains(&ent.label))
        .map(|ent| ent.text.to_lowercase());

    let mut seen = HashSet::new();
    roots
        .chain(entities)
        .filter(|key| !key.trim().is_empty())
        .filter(|key| seen.insert(key.clone()))
        .collect()
}
