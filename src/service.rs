//! Request parsing and orchestration of the loop and constellation pipelines

use std::sync::Arc;

use anyhow::Context;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::analysis::{
    ConstellationBuilder, ConstellationRecord, Entry, FeatureRedactor, LoopDetector,
    SentimentAggregator, TopicExtractor,
};
use crate::clients::{GeminiClient, GenerativeService};
use crate::compose::{LoopResponse, compose};
use crate::config::Config;
use crate::embeddings::{Embedder, create_embedder};
use crate::error::{Result, ThoughtLoopsError};
use crate::nlp::{HeuristicAnalyzer, LexiconSentiment, LinguisticAnalyzer, SentimentScorer};
use crate::suggest::{AiMode, RandomSource, SeededRandom, SuggestionRequest, SuggestionSelector};

/// Parsed body of a loop detection request
#[derive(Debug, Clone, PartialEq)]
pub struct LoopRequest {
    pub entries: Vec<Entry>,
    pub use_cloud: bool,
    pub mode: AiMode,
}

impl LoopRequest {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            use_cloud: false,
            mode: AiMode::Auto,
        }
    }

    /// `entries` is required; `useCloudAI` defaults to false and `aiMode` to auto.
    pub fn from_value(body: &Value) -> Result<Self> {
        let entries = parse_entries(body)?;
        let use_cloud = match body.get("useCloudAI") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(_) => return Err(ThoughtLoopsError::validation("'useCloudAI' must be a boolean")),
        };
        let mode = body
            .get("aiMode")
            .and_then(Value::as_str)
            .map_or(AiMode::Auto, AiMode::parse);
        Ok(Self {
            entries,
            use_cloud,
            mode,
        })
    }
}

/// Pull `entries` out of a request body. Each entry needs a string `content`;
/// `id` and `date` are optional and passed through.
pub fn parse_entries(body: &Value) -> Result<Vec<Entry>> {
    let Some(items) = body.get("entries").and_then(Value::as_array) else {
        return Err(ThoughtLoopsError::validation(
            "Request body must contain an 'entries' array",
        ));
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let Some(content) = item.get("content").and_then(Value::as_str) else {
                return Err(ThoughtLoopsError::validation(format!(
                    "entries[{}].content must be a string",
                    i
                )));
            };
            Ok(Entry {
                id: item.get("id").cloned().unwrap_or(Value::Null),
                content: content.to_string(),
                date: item.get("date").cloned().unwrap_or(Value::Null),
            })
        })
        .collect()
}

/// Long-lived handles shared by every request. Per-request state (the topic
/// aggregate, the random source) is created inside each call.
pub struct ThoughtLoopService {
    config: Arc<Config>,
    embedder: Arc<dyn Embedder>,
    aggregator: SentimentAggregator,
    detector: LoopDetector,
    redactor: FeatureRedactor,
    selector: SuggestionSelector,
    constellation: ConstellationBuilder,
}

impl ThoughtLoopService {
    pub fn new(
        config: Arc<Config>,
        analyzer: Arc<dyn LinguisticAnalyzer>,
        scorer: Arc<dyn SentimentScorer>,
        embedder: Arc<dyn Embedder>,
        generator: Option<Arc<dyn GenerativeService>>,
    ) -> Self {
        let aggregator =
            SentimentAggregator::new(TopicExtractor::new(analyzer.clone()), scorer.clone());
        Self {
            detector: LoopDetector::from_config(&config.analysis),
            redactor: FeatureRedactor::new(analyzer, config.analysis.max_keywords),
            selector: SuggestionSelector::from_config(&config, generator),
            constellation: ConstellationBuilder::new(embedder.clone(), scorer),
            aggregator,
            embedder,
            config,
        }
    }

    /// Default collaborators: heuristic analyzer, lexicon sentiment, the
    /// configured embedder and Gemini when a key is present.
    pub fn from_config(config: Arc<Config>) -> anyhow::Result<Self> {
        let embedder = create_embedder(&config).context("Failed to initialise embedder")?;
        let generator: Option<Arc<dyn GenerativeService>> = match &config.runtime.gemini_api_key {
            Some(key) => Some(Arc::new(
                GeminiClient::new(key.clone(), &config.cloud)
                    .context("Failed to initialise Gemini client")?,
            )),
            None => None,
        };
        Ok(Self::new(
            config,
            Arc::new(HeuristicAnalyzer::new()),
            Arc::new(LexiconSentiment::new()),
            embedder,
            generator,
        ))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn embedder(&self) -> &dyn Embedder {
        self.embedder.as_ref()
    }

    /// Detect a loop using the configured seed, or OS entropy without one
    pub async fn detect_loop(&self, request: &LoopRequest) -> Result<LoopResponse> {
        let mut rng = SeededRandom::new(self.config.runtime.rng_seed);
        self.detect_loop_with(request, &mut rng).await
    }

    pub async fn detect_loop_with(
        &self,
        request: &LoopRequest,
        rng: &mut dyn RandomSource,
    ) -> Result<LoopResponse> {
        let aggregate = self
            .aggregator
            .aggregate(request.entries.iter().map(|e| e.content.as_str()))?;
        let Some(detected) = self.detector.detect(&aggregate) else {
            info!(entries = request.entries.len(), "no thought loop detected");
            return Ok(LoopResponse::none());
        };

        let features = self.redactor.summarize(&detected.joined_text())?;
        debug!(keywords = ?features.keywords, "feature summary ready");

        let suggestion = self
            .selector
            .select(
                &SuggestionRequest {
                    detected: &detected,
                    features: &features,
                    mode: request.mode,
                    use_cloud: request.use_cloud,
                },
                rng,
            )
            .await;
        info!(
            entries = request.entries.len(),
            topic = %detected.topic,
            kind = %suggestion.kind,
            "thought loop suggestion composed"
        );
        Ok(compose(Some(suggestion)))
    }

    pub async fn constellation(&self, entries: &[Entry]) -> Result<Vec<ConstellationRecord>> {
        self.constellation.build(entries).await
    }

    /// Effective settings with credentials reduced to booleans
    pub fn info(&self) -> Value {
        let config = &self.config;
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "embedding": {
                "provider": self.embedder.provider(),
                "model": config.embedding.model,
                "dimensions": self.embedder.dimensions(),
            },
            "cloud": {
                "configured": self.selector.cloud_available(),
                "model": config.cloud.model,
                "timeout_ms": config.cloud.timeout_ms,
            },
            "analysis": {
                "loop_threshold": config.analysis.loop_threshold,
                "min_occurrences": config.analysis.min_occurrences,
                "max_keywords": config.analysis.max_keywords,
            },
            "suggestions": {
                "knowledge_base": config.suggestions.knowledge_base,
            },
            "server": {
                "bind": config.server.bind.to_string(),
                "request_timeout_ms": config.server.request_timeout_ms,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_non_array_entries_is_validation_error() {
        for body in [json!({}), json!({ "entries": "nope" }), json!([])] {
            let err = LoopRequest::from_value(&body).unwrap_err();
            assert!(matches!(err, ThoughtLoopsError::Validation { .. }));
        }
    }

    #[test]
    fn entry_without_string_content_is_rejected() {
        let err = parse_entries(&json!({ "entries": [{ "content": "ok" }, { "content": 4 }] }))
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: entries[1].content must be a string");
    }

    #[test]
    fn defaults_and_passthrough_fields() {
        let request = LoopRequest::from_value(&json!({
            "entries": [{ "id": 7, "content": "hello", "date": "2024-05-01", "mood": "meh" }]
        }))
        .unwrap();
        assert!(!request.use_cloud);
        assert_eq!(request.mode, AiMode::Auto);
        assert_eq!(request.entries[0].id, json!(7));
        assert_eq!(request.entries[0].date, json!("2024-05-01"));

        let bare = parse_entries(&json!({ "entries": [{ "content": "x" }] })).unwrap();
        assert_eq!(bare[0].id, Value::Null);
    }

    #[test]
    fn flags_are_read() {
        let request = LoopRequest::from_value(&json!({
            "entries": [],
            "useCloudAI": true,
            "aiMode": "emotional_exploration"
        }))
        .unwrap();
        assert!(request.use_cloud);
        assert_eq!(
            request.mode,
            AiMode::Category(crate::suggest::Category::EmotionalExploration)
        );
        assert!(LoopRequest::from_value(&json!({ "entries": [], "useCloudAI": "yes" })).is_err());
    }

    #[tokio::test]
    async fn empty_entries_detect_nothing() {
        let service = ThoughtLoopService::from_config(Arc::new(Config::default())).unwrap();
        let response = service.detect_loop(&LoopRequest::new(vec![])).await.unwrap();
        assert_eq!(response, LoopResponse::none());
        assert!(service.constellation(&[]).await.unwrap().is_empty());
    }

    #[test]
    fn info_hides_credentials() {
        let mut config = Config::default();
        config.runtime.gemini_api_key = Some("secret-key".into());
        let service = ThoughtLoopService::from_config(Arc::new(config)).unwrap();
        let info = service.info();
        assert_eq!(info["cloud"]["configured"], json!(true));
        assert!(!info.to_string().contains("secret-key"));
    }
}
