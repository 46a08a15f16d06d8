use serde::Serialize;
use tracing::debug;

use super::aggregate::TopicAggregate;
use crate::config::AnalysisConfig;

/// Mean sentiment a topic must fall below to count as a loop
pub const LOOP_THRESHOLD: f64 = -0.25;
/// Entries a topic must appear in to count as recurring
pub const MIN_OCCURRENCES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedLoop {
    pub topic: String,
    pub scores: Vec<f64>,
    pub source_texts: Vec<String>,
}

impl DetectedLoop {
    /// Contributing texts joined with single spaces, in aggregation order
    pub fn joined_text(&self) -> String {
        self.source_texts.join(" ")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LoopDetector {
    threshold: f64,
    min_occurrences: usize,
}

impl Default for LoopDetector {
    fn default() -> Self {
        Self {
            threshold: LOOP_THRESHOLD,
            min_occurrences: MIN_OCCURRENCES,
        }
    }
}

impl LoopDetector {
    pub fn new(threshold: f64, min_occurrences: usize) -> Self {
        Self {
            threshold,
            min_occurrences,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.loop_threshold, config.min_occurrences)
    }

    /// First topic, in aggregate order, that recurs enough and is negative
    /// enough. Later qualifying topics are never inspected.
    pub fn detect(&self, aggregate: &TopicAggregate) -> Option<DetectedLoop> {
        let found = aggregate.iter().find(|stats| {
            stats.scores.len() >= self.min_occurrences
                && stats.mean().is_some_and(|m| m < self.threshold)
        })?;
        debug!(
            topic = %found.topic,
            occurrences = found.scores.len(),
            "thought loop detected"
        );
        Some(DetectedLoop {
            topic: found.topic.clone(),
            scores: found.scores.clone(),
            source_texts: found.texts.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate_of(topics: &[(&str, &[f64])]) -> TopicAggregate {
        let mut agg = TopicAggregate::new();
        for (topic, scores) in topics {
            for (i, score) in scores.iter().enumerate() {
                agg.record(topic, *score, &format!("{topic} entry {i}"));
            }
        }
        agg
    }

    fn detect(scores: &[f64]) -> Option<DetectedLoop> {
        LoopDetector::default().detect(&aggregate_of(&[("work", scores)]))
    }

    #[test]
    fn fewer_than_three_occurrences_never_loop() {
        assert!(detect(&[-0.9, -0.8]).is_none());
        assert!(detect(&[]).is_none());
    }

    #[test]
    fn qualifying_means_are_detected() {
        for scores in [
            &[-0.4, -0.5, -0.3][..],
            &[-0.1, -0.5, -0.9][..],
            &[0.1, -0.5, -0.9][..],
        ] {
            let found = detect(scores).expect("loop expected");
            assert_eq!(found.topic, "work");
            assert_eq!(found.scores, scores.to_vec());
        }
    }

    #[test]
    fn positive_mean_is_not_a_loop() {
        assert!(detect(&[0.5, -0.1, -0.2]).is_none());
    }

    #[test]
    fn mean_equal_to_threshold_is_not_a_loop() {
        assert!(detect(&[-0.25, -0.25, -0.25]).is_none());
    }

    #[test]
    fn first_qualifying_topic_wins_over_more_severe_later_one() {
        let agg = aggregate_of(&[
            ("sleep", &[-0.3, -0.3, -0.3][..]),
            ("work", &[-0.9, -0.9, -0.9, -0.9][..]),
        ]);
        let found = LoopDetector::default().detect(&agg).unwrap();
        assert_eq!(found.topic, "sleep");
        assert_eq!(found.source_texts.len(), 3);
        assert_eq!(
            found.joined_text(),
            "sleep entry 0 sleep entry 1 sleep entry 2"
        );
    }

    #[test]
    fn serializes_camel_case() {
        let found = detect(&[-0.4, -0.5, -0.3]).unwrap();
        let json = serde_json::to_value(&found).unwrap();
        assert!(json.get("sourceTexts").is_some());
    }
}
