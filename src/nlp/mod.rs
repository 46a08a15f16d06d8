//! Linguistic analysis and sentiment scoring seams.
//!
//! The loop pipeline only depends on the two traits here. The bundled
//! implementations are rule-based so the service runs without model files;
//! a model-backed analyzer can be swapped in behind the same traits.

pub mod heuristic;
pub mod lexicon;
pub mod sentiment;

use serde::Serialize;
use std::fmt;

use crate::error::Result;

pub use heuristic::HeuristicAnalyzer;
pub use sentiment::LexiconSentiment;

/// Universal part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Noun,
    Propn,
    Pron,
    Verb,
    Aux,
    Adj,
    Adv,
    Det,
    Adp,
    Cconj,
    Sconj,
    Part,
    Num,
    Punct,
    Intj,
    X,
}

impl Pos {
    pub fn is_nominal(self) -> bool {
        matches!(self, Pos::Noun | Pos::Propn)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Person,
    Org,
    Gpe,
    Loc,
    Date,
    Time,
    Norp,
    Cardinal,
}

impl EntityLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Norp => "NORP",
            EntityLabel::Cardinal => "CARDINAL",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token. `start`/`end` are byte offsets into the analysed text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: Pos,
    pub is_stop: bool,
    pub start: usize,
    pub end: usize,
}

/// Base noun phrase; the root is its final nominal (or the lone pronoun).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NounChunk {
    pub text: String,
    pub root_text: String,
    pub root_pos: Pos,
    pub word_count: usize,
    pub start: usize,
    pub end: usize,
}

/// Named entity over `text[start..end]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub noun_chunks: Vec<NounChunk>,
    /// Non-overlapping, ascending by `start`
    pub entities: Vec<EntitySpan>,
}

/// Text → noun phrases, entities, and token annotations
pub trait LinguisticAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Analysis>;
}

/// Text → compound polarity in [-1, 1]
pub trait SentimentScorer: Send + Sync {
    fn compound(&self, text: &str) -> Result<f64>;
}
