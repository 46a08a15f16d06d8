use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::topics::TopicExtractor;
use crate::error::Result;
use crate::nlp::SentimentScorer;

/// Scores and source texts collected for one topic key
#[derive(Debug, Clone, PartialEq)]
pub struct TopicStats {
    pub topic: String,
    pub scores: Vec<f64>,
    pub texts: Vec<String>,
}

impl TopicStats {
    pub fn mean(&self) -> Option<f64> {
        if self.scores.is_empty() {
            None
        } else {
            Some(self.scores.iter().sum::<f64>() / self.scores.len() as f64)
        }
    }
}

/// Topic key → stats, iterated in first-seen order
#[derive(Debug, Clone, Default)]
pub struct TopicAggregate {
    topics: Vec<TopicStats>,
    index: HashMap<String, usize>,
}

impl TopicAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, topic: &str, score: f64, text: &str) {
        let slot = match self.index.get(topic) {
            Some(&i) => i,
            None => {
                self.topics.push(TopicStats {
                    topic: topic.to_string(),
                    scores: Vec::new(),
                    texts: Vec::new(),
                });
                self.index.insert(topic.to_string(), self.topics.len() - 1);
                self.topics.len() - 1
            }
        };
        let stats = &mut self.topics[slot];
        stats.scores.push(score);
        stats.texts.push(text.to_string());
    }

    pub fn get(&self, topic: &str) -> Option<&TopicStats> {
        self.index.get(topic).map(|&i| &self.topics[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopicStats> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

/// Builds a `TopicAggregate` from entry texts.
///
/// Each entry is scored once as a whole and that score is attributed to every
/// topic found in it.
#[derive(Clone)]
pub struct SentimentAggregator {
    extractor: TopicExtractor,
    scorer: Arc<dyn SentimentScorer>,
}

impl SentimentAggregator {
    pub fn new(extractor: TopicExtractor, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { extractor, scorer }
    }

    pub fn aggregate<'a, I>(&self, texts: I) -> Result<TopicAggregate>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut aggregate = TopicAggregate::new();
        let mut entries = 0usize;
        for text in texts {
            entries += 1;
            let topics = self.extractor.extract(text)?;
            if topics.is_empty() {
                continue;
            }
            let score = self.scorer.compound(text)?;
            for topic in &topics {
                aggregate.record(topic, score, text);
            }
        }
        debug!(entries, topics = aggregate.len(), "aggregated topic sentiment");
        Ok(aggregate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{HeuristicAnalyzer, LexiconSentiment};

    struct FixedScore(f64);

    impl SentimentScorer for FixedScore {
        fn compound(&self, _text: &str) -> Result<f64> {
            Ok(self.0)
        }
    }

    fn aggregator(scorer: Arc<dyn SentimentScorer>) -> SentimentAggregator {
        SentimentAggregator::new(
            TopicExtractor::new(Arc::new(HeuristicAnalyzer::new())),
            scorer,
        )
    }

    #[test]
    fn record_keeps_first_seen_order() {
        let mut agg = TopicAggregate::new();
        agg.record("work", -0.5, "a");
        agg.record("sleep", -0.2, "b");
        agg.record("work", -0.1, "c");
        let order: Vec<&str> = agg.iter().map(|s| s.topic.as_str()).collect();
        assert_eq!(order, vec!["work", "sleep"]);
        let work = agg.get("work").unwrap();
        assert_eq!(work.scores, vec![-0.5, -0.1]);
        assert_eq!(work.texts, vec!["a", "c"]);
        assert!((work.mean().unwrap() + 0.3).abs() < 1e-9);
    }

    #[test]
    fn entry_score_is_shared_by_all_its_topics() {
        let agg = aggregator(Arc::new(FixedScore(-0.6)))
            .aggregate(["The project deadline ruined my weekend."])
            .unwrap();
        assert!(agg.len() >= 2);
        for stats in agg.iter() {
            assert_eq!(stats.scores, vec![-0.6]);
        }
    }

    #[test]
    fn topic_counts_once_per_entry() {
        let agg = aggregator(Arc::new(LexiconSentiment::new()))
            .aggregate([
                "The project is a mess and the project is late.",
                "I worry about the project.",
            ])
            .unwrap();
        assert_eq!(agg.get("project").map(|s| s.scores.len()), Some(2));
    }

    #[test]
    fn empty_input_gives_empty_aggregate() {
        let agg = aggregator(Arc::new(LexiconSentiment::new()))
            .aggregate(std::iter::empty())
            .unwrap();
        assert!(agg.is_empty());
    }
}
