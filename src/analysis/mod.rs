//! Loop detection pipeline: topics, aggregation, detection, redaction, and
//! the independent constellation feature path.

pub mod aggregate;
pub mod constellation;
pub mod detector;
pub mod redact;
pub mod topics;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use aggregate::{SentimentAggregator, TopicAggregate, TopicStats};
pub use constellation::{ConstellationBuilder, ConstellationRecord};
pub use detector::{DetectedLoop, LoopDetector};
pub use redact::{FeatureRedactor, FeatureSummary};
pub use topics::TopicExtractor;

/// One journal entry as supplied by the caller. `id` and `date` are opaque
/// and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: Value,
    pub content: String,
    #[serde(default)]
    pub date: Value,
}

impl Entry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Value::Null,
            content: content.into(),
            date: Value::Null,
        }
    }
}
