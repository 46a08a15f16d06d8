//! Suggestion strategies and the precedence that chooses between them.
//!
//! Order: remote generation (when requested and a credential exists), then
//! the curated knowledge base (when enabled), then local templates, which
//! always produce an answer. A failing step is logged and the next one runs;
//! nothing is retried.

pub mod cloud;
pub mod knowledge;
pub mod local;
pub mod rng;
pub mod templates;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::analysis::{DetectedLoop, FeatureSummary};
use crate::clients::{CloudError, GenerativeService};
use crate::config::Config;

pub use cloud::CloudStrategy;
pub use knowledge::KnowledgeBaseStrategy;
pub use local::LocalTemplateStrategy;
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
pub use templates::{AiMode, Category, TemplateBook};

/// Final suggestion with its provenance tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub topic: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("no suggestion for this topic")]
    NoMatch,
    #[error(transparent)]
    Remote(#[from] CloudError),
}

/// Everything a strategy may look at. Only `features` carries entry text,
/// and only in redacted form.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRequest<'a> {
    pub detected: &'a DetectedLoop,
    pub features: &'a FeatureSummary,
    pub mode: AiMode,
    pub use_cloud: bool,
}

#[async_trait]
pub trait SuggestionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn suggest(
        &self,
        request: &SuggestionRequest<'_>,
        rng: &mut dyn RandomSource,
    ) -> Result<Suggestion, StrategyError>;
}

pub struct SuggestionSelector {
    cloud: Option<CloudStrategy>,
    knowledge: Option<KnowledgeBaseStrategy>,
    local: LocalTemplateStrategy,
}

impl SuggestionSelector {
    pub fn new(
        cloud: Option<CloudStrategy>,
        knowledge: Option<KnowledgeBaseStrategy>,
        local: LocalTemplateStrategy,
    ) -> Self {
        Self {
            cloud,
            knowledge,
            local,
        }
    }

    /// Wire strategies from configuration. `service` is only kept when a
    /// credential is configured.
    pub fn from_config(config: &Config, service: Option<Arc<dyn GenerativeService>>) -> Self {
        let cloud = service
            .filter(|_| config.cloud_configured())
            .map(CloudStrategy::new);
        let knowledge = config
            .suggestions
            .knowledge_base
            .then_some(KnowledgeBaseStrategy);
        info!(
            cloud = cloud.is_some(),
            knowledge_base = knowledge.is_some(),
            "suggestion strategies ready"
        );
        Self::new(
            cloud,
            knowledge,
            LocalTemplateStrategy::new(TemplateBook::from_config(&config.suggestions)),
        )
    }

    pub fn cloud_available(&self) -> bool {
        self.cloud.is_some()
    }

    pub async fn select(
        &self,
        request: &SuggestionRequest<'_>,
        rng: &mut dyn RandomSource,
    ) -> Suggestion {
        if request.use_cloud {
            match &self.cloud {
                Some(cloud) => match cloud.suggest(request, rng).await {
                    Ok(suggestion) => return suggestion,
                    Err(e) => warn!("cloud suggestion failed, falling back: {}", e),
                },
                None => debug!("cloud requested but no credential configured"),
            }
        }

        if let Some(knowledge) = &self.knowledge {
            match knowledge.suggest(request, rng).await {
                Ok(suggestion) => return suggestion,
                Err(e) => debug!("{} strategy skipped: {}", knowledge.name(), e),
            }
        }

        self.local.compose(request, rng)
    }
}
