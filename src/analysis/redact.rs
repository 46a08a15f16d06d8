use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::nlp::{EntityLabel, EntitySpan, LinguisticAnalyzer, Pos, Token};

/// Upper bound on keywords carried in a feature summary
pub const MAX_KEYWORDS: usize = 5;

const REDACTED_LABELS: [EntityLabel; 6] = [
    EntityLabel::Person,
    EntityLabel::Gpe,
    EntityLabel::Loc,
    EntityLabel::Org,
    EntityLabel::Date,
    EntityLabel::Time,
];

/// Sanitised view of a loop's text, safe to send off-host
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSummary {
    pub redacted_text: String,
    pub keywords: Vec<String>,
}

#[derive(Clone)]
pub struct FeatureRedactor {
    analyzer: Arc<dyn LinguisticAnalyzer>,
    max_keywords: usize,
}

impl FeatureRedactor {
    pub fn new(analyzer: Arc<dyn LinguisticAnalyzer>, max_keywords: usize) -> Self {
        Self {
            analyzer,
            max_keywords,
        }
    }

    pub fn summarize(&self, text: &str) -> Result<FeatureSummary> {
        let analysis = self.analyzer.analyze(text)?;
        Ok(FeatureSummary {
            redacted_text: redact_spans(text, &analysis.entities),
            keywords: keywords(&analysis.tokens, self.max_keywords),
        })
    }
}

/// Replace identifying entity spans with `[LABEL]`.
///
/// Spans are applied from the highest start offset down so every span still
/// addresses the original characters. Where spans overlap the longest one
/// wins; spans not on a char boundary are left alone.
pub fn redact_spans(text: &str, entities: &[EntitySpan]) -> String {
    let mut candidates: Vec<&EntitySpan> = entities
        .iter()
        .filter(|e| REDACTED_LABELS.contains(&e.label))
        .filter(|e| e.start < e.end && text.get(e.start..e.end).is_some())
        .collect();
    candidates.sort_by(|a, b| {
        (b.end - b.start)
            .cmp(&(a.end - a.start))
            .then(a.start.cmp(&b.start))
    });

    let mut kept: Vec<&EntitySpan> = Vec::with_capacity(candidates.len());
    for span in candidates {
        if kept
            .iter()
            .all(|k| span.end <= k.start || span.start >= k.end)
        {
            kept.push(span);
        }
    }
    kept.sort_by(|a, b| b.start.cmp(&a.start));

    let mut out = text.to_string();
    for span in kept {
        out.replace_range(span.start..span.end, &format!("[{}]", span.label));
    }
    out
}

/// Distinct non-stopword noun and adjective lemmas, first `max` kept
pub fn keywords(tokens: &[Token], max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .filter(|t| matches!(t.pos, Pos::Noun | Pos::Adj) && !t.is_stop)
        .map(|t| t.lemma.clone())
        .filter(|lemma| !lemma.is_empty() && seen.insert(lemma.clone()))
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{Analysis, HeuristicAnalyzer};

    /// Returns a canned analysis regardless of input
    struct FixedAnalyzer(Analysis);

    impl LinguisticAnalyzer for FixedAnalyzer {
        fn analyze(&self, _text: &str) -> Result<Analysis> {
            Ok(self.0.clone())
        }
    }

    fn span(text: &str, needle: &str, label: EntityLabel) -> EntitySpan {
        let start = text.find(needle).unwrap();
        EntitySpan {
            text: needle.to_string(),
            label,
            start,
            end: start + needle.len(),
        }
    }

    fn token(lemma: &str, pos: Pos, is_stop: bool) -> Token {
        Token {
            text: lemma.to_string(),
            lemma: lemma.to_string(),
            pos,
            is_stop,
            start: 0,
            end: 0,
        }
    }

    #[test]
    fn adjacent_spans_hit_original_characters() {
        let text = "Met Bob Smith Tuesday in Berlin";
        let entities = vec![
            span(text, "Bob Smith", EntityLabel::Person),
            span(text, "Tuesday", EntityLabel::Date),
            span(text, "Berlin", EntityLabel::Gpe),
        ];
        assert_eq!(
            redact_spans(text, &entities),
            "Met [PERSON] [DATE] in [GPE]"
        );
    }

    #[test]
    fn touching_spans_without_whitespace() {
        let text = "AliceBob";
        let entities = vec![
            EntitySpan {
                text: "Alice".into(),
                label: EntityLabel::Person,
                start: 0,
                end: 5,
            },
            EntitySpan {
                text: "Bob".into(),
                label: EntityLabel::Person,
                start: 5,
                end: 8,
            },
        ];
        assert_eq!(redact_spans(text, &entities), "[PERSON][PERSON]");
    }

    #[test]
    fn overlapping_and_unlisted_spans_are_skipped() {
        let text = "New York City has 3 parks";
        let entities = vec![
            span(text, "New York City", EntityLabel::Gpe),
            span(text, "York", EntityLabel::Person),
            span(text, "3", EntityLabel::Cardinal),
        ];
        assert_eq!(redact_spans(text, &entities), "[GPE] has 3 parks");
    }

    #[test]
    fn keywords_are_distinct_nouns_and_adjectives() {
        let tokens = vec![
            token("project", Pos::Noun, false),
            token("terrible", Pos::Adj, false),
            token("be", Pos::Aux, true),
            token("project", Pos::Noun, false),
            token("other", Pos::Adj, true),
            token("run", Pos::Verb, false),
            token("deadline", Pos::Noun, false),
            token("mess", Pos::Noun, false),
            token("boss", Pos::Noun, false),
            token("week", Pos::Noun, false),
        ];
        let kws = keywords(&tokens, MAX_KEYWORDS);
        assert_eq!(kws, vec!["project", "terrible", "deadline", "mess", "boss"]);
    }

    #[test]
    fn summarize_uses_analyzer_output() {
        let text = "Alex hates the deadline";
        let analysis = Analysis {
            tokens: vec![
                token("Alex", Pos::Propn, false),
                token("deadline", Pos::Noun, false),
            ],
            noun_chunks: vec![],
            entities: vec![span(text, "Alex", EntityLabel::Person)],
        };
        let redactor = FeatureRedactor::new(Arc::new(FixedAnalyzer(analysis)), MAX_KEYWORDS);
        let summary = redactor.summarize(text).unwrap();
        assert_eq!(summary.redacted_text, "[PERSON] hates the deadline");
        assert_eq!(summary.keywords, vec!["deadline"]);
    }

    #[test]
    fn redacting_twice_is_stable() {
        let redactor = FeatureRedactor::new(Arc::new(HeuristicAnalyzer::new()), MAX_KEYWORDS);
        let once = redactor
            .summarize("Alex from Google called me on Monday at 3pm about New York.")
            .unwrap();
        assert!(once.redacted_text.contains("[PERSON]"));
        assert!(!once.redacted_text.contains("Alex"));
        let twice = redactor.summarize(&once.redacted_text).unwrap();
        assert_eq!(twice.redacted_text, once.redacted_text);
        assert!(twice.keywords.len() <= MAX_KEYWORDS);
    }
}
