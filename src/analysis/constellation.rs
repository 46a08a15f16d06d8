use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::Entry;
use crate::embeddings::Embedder;
use crate::error::{Result, ThoughtLoopsError};
use crate::nlp::SentimentScorer;

/// Per-entry visualisation features
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstellationRecord {
    pub id: Value,
    pub content: String,
    pub date: Value,
    pub vector: Vec<f32>,
    pub sentiment: f64,
}

/// Embeds and scores each entry independently of loop detection
#[derive(Clone)]
pub struct ConstellationBuilder {
    embedder: Arc<dyn Embedder>,
    scorer: Arc<dyn SentimentScorer>,
}

impl ConstellationBuilder {
    pub fn new(embedder: Arc<dyn Embedder>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { embedder, scorer }
    }

    /// One record per entry, in input order. The first failing entry fails
    /// the whole batch.
    pub async fn build(&self, entries: &[Entry]) -> Result<Vec<ConstellationRecord>> {
        let mut records = Vec::with_capacity(entries.len());
        for entry in entries {
            let vector = self.embedder.embed(&entry.content).await.map_err(|e| {
                ThoughtLoopsError::Embedding {
                    message: e.to_string(),
                }
            })?;
            let sentiment = self.scorer.compound(&entry.content)?;
            records.push(ConstellationRecord {
                id: entry.id.clone(),
                content: entry.content.clone(),
                date: entry.date.clone(),
                vector,
                sentiment,
            });
        }
        debug!(
            records = records.len(),
            provider = self.embedder.provider(),
            "built constellation features"
        );
        Ok(records)
    }
}
