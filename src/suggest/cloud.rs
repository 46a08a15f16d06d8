use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::rng::RandomSource;
use super::templates::AiMode;
use super::{StrategyError, Suggestion, SuggestionRequest, SuggestionStrategy};
use crate::clients::{CloudError, GenerativeService};

pub const CLOUD_TYPE: &str = "cloud_prompt_gemini";

const AUTO_INSTRUCTION: &str = "Offer one gentle, open-ended reflective question. It may reframe the situation, explore the feelings involved, or suggest a small next step, whichever fits best.";

/// Remote generation from redacted features only
pub struct CloudStrategy {
    service: Arc<dyn GenerativeService>,
}

impl CloudStrategy {
    pub fn new(service: Arc<dyn GenerativeService>) -> Self {
        Self { service }
    }
}

/// Remote prompt built from the topic, the redacted text, keywords and the
/// mode instruction. Raw entry text never appears in it.
pub fn build_prompt(request: &SuggestionRequest<'_>) -> String {
    let instruction = match request.mode {
        AiMode::Category(category) => category.instruction(),
        AiMode::Auto => AUTO_INSTRUCTION,
    };
    let keywords = if request.features.keywords.is_empty() {
        "none".to_string()
    } else {
        request.features.keywords.join(", ")
    };
    format!(
        "You are a supportive journaling companion. The writer keeps returning to the topic \"{topic}\" with negative feelings.\n\
         Anonymised excerpts: \"{excerpt}\"\n\
         Keywords: {keywords}\n\
         {instruction} Reply with one or two sentences addressed to the writer, without diagnosing or giving medical advice.",
        topic = request.detected.topic,
        excerpt = request.features.redacted_text,
    )
}

#[async_trait]
impl SuggestionStrategy for CloudStrategy {
    fn name(&self) -> &'static str {
        "cloud"
    }

    async fn suggest(
        &self,
        request: &SuggestionRequest<'_>,
        _rng: &mut dyn RandomSource,
    ) -> Result<Suggestion, StrategyError> {
        let prompt = build_prompt(request);
        debug!(
            service = self.service.name(),
            prompt_chars = prompt.len(),
            "requesting remote suggestion"
        );
        let text = self.service.generate(&prompt).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(CloudError::EmptyResponse.into());
        }
        Ok(Suggestion {
            topic: request.detected.topic.clone(),
            text: text.to_string(),
            kind: CLOUD_TYPE.to_string(),
        })
    }
}
