//! Lexicon and rule based compound sentiment.
//!
//! Valences are summed per word after booster, negation, capitalisation and
//! contrastive-"but" adjustments, then squashed with `x / sqrt(x^2 + alpha)`.

use super::SentimentScorer;
use super::lexicon::{BOOSTERS, NEGATIONS, VALENCE};
use crate::error::Result;

const NORMALIZATION_ALPHA: f64 = 15.0;
const NEGATION_SCALAR: f64 = -0.74;
const CAPS_EMPHASIS: f64 = 0.733;
const EXCLAMATION_EMPHASIS: f64 = 0.292;
const QUESTION_EMPHASIS: f64 = 0.18;
const WINDOW: usize = 3;

#[derive(Debug, Default, Clone)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        LexiconSentiment
    }

    fn words(text: &str) -> Vec<&str> {
        text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
            .map(|w| w.trim_matches(|c| c == '\'' || c == '\u{2019}'))
            .filter(|w| !w.is_empty())
            .collect()
    }

    fn valence(lower: &str) -> Option<f64> {
        if let Some(v) = VALENCE.get(lower) {
            return Some(*v);
        }
        // Fall back to simple inflection stripping
        ["s", "ed", "ing", "ly"]
            .iter()
            .filter_map(|suffix| lower.strip_suffix(suffix))
            .filter(|stem| stem.len() > 2)
            .find_map(|stem| VALENCE.get(stem).copied())
    }

    fn is_negation(lower: &str) -> bool {
        NEGATIONS.contains(lower) || lower.ends_with("n't") || lower.ends_with("n\u{2019}t")
    }

    fn punctuation_emphasis(text: &str) -> f64 {
        let exclamations = text.matches('!').count().min(4) as f64;
        let questions = text.matches('?').count();
        let question_boost = if questions > 1 {
            questions.min(3) as f64 * QUESTION_EMPHASIS
        } else {
            0.0
        };
        exclamations * EXCLAMATION_EMPHASIS + question_boost
    }

    pub fn score(&self, text: &str) -> f64 {
        let words = Self::words(text);
        if words.is_empty() {
            return 0.0;
        }
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let mixed_case = words.iter().any(|w| w.chars().any(char::is_lowercase))
            && words
                .iter()
                .any(|w| w.len() > 1 && w.chars().all(|c| !c.is_lowercase()));

        let mut sentiments = vec![0.0_f64; words.len()];
        for (i, lower) in lowered.iter().enumerate() {
            if BOOSTERS.contains_key(lower.as_str()) {
                continue;
            }
            let Some(mut v) = Self::valence(lower) else {
                continue;
            };

            let sign = v.signum();
            if mixed_case && words[i].len() > 1 && words[i].chars().all(|c| !c.is_lowercase()) {
                v += sign * CAPS_EMPHASIS;
            }

            for distance in 1..=WINDOW.min(i) {
                let prev = lowered[i - distance].as_str();
                if let Some(boost) = BOOSTERS.get(prev) {
                    let decay = 1.0 - 0.05 * (distance - 1) as f64;
                    v += sign * boost * decay;
                }
            }
            if (1..=WINDOW.min(i)).any(|d| Self::is_negation(&lowered[i - d])) {
                v *= NEGATION_SCALAR;
            }
            sentiments[i] = v;
        }

        if let Some(pivot) = lowered.iter().position(|w| w == "but") {
            for (i, s) in sentiments.iter_mut().enumerate() {
                if i < pivot {
                    *s *= 0.5;
                } else if i > pivot {
                    *s *= 1.5;
                }
            }
        }

        let mut total: f64 = sentiments.iter().sum();
        if total != 0.0 {
            total += total.signum() * Self::punctuation_emphasis(text);
        }
        (total / (total * total + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

impl SentimentScorer for LexiconSentiment {
    fn compound(&self, text: &str) -> Result<f64> {
        Ok(self.score(text))
    }
}
