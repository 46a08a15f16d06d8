use async_trait::async_trait;

use super::rng::RandomSource;
use super::templates::{AiMode, Category, TemplateBook, fill};
use super::{StrategyError, Suggestion, SuggestionRequest, SuggestionStrategy};

/// Categorised templates, always available
#[derive(Debug, Clone, Default)]
pub struct LocalTemplateStrategy {
    book: TemplateBook,
}

impl LocalTemplateStrategy {
    pub fn new(book: TemplateBook) -> Self {
        Self { book }
    }

    /// Requested category, or a uniform pick among all when the mode is `Auto`
    pub fn category_for(&self, mode: AiMode, rng: &mut dyn RandomSource) -> Category {
        match mode {
            AiMode::Category(category) => category,
            AiMode::Auto => Category::ALL[rng.pick(Category::ALL.len())],
        }
    }

    pub fn compose(&self, request: &SuggestionRequest<'_>, rng: &mut dyn RandomSource) -> Suggestion {
        let category = self.category_for(request.mode, rng);
        let topic = &request.detected.topic;
        let pool = self.book.pool(category);
        let (template, kind) = if pool.is_empty() {
            (self.book.fallback(category), category.fallback_type())
        } else {
            (pool[rng.pick(pool.len())].as_str(), category.local_type())
        };
        Suggestion {
            topic: topic.clone(),
            text: fill(template, topic),
            kind,
        }
    }
}

#[async_trait]
impl SuggestionStrategy for LocalTemplateStrategy {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn suggest(
        &self,
        request: &SuggestionRequest<'_>,
        rng: &mut dyn RandomSource,
    ) -> Result<Suggestion, StrategyError> {
        Ok(self.compose(request, rng))
    }
}
