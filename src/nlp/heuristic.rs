//! Rule-based linguistic analyzer.
//!
//! Tokenises with byte offsets, tags parts of speech from word lists, suffix
//! rules and capitalisation, groups base noun phrases, and labels entities
//! from gazetteers. Good enough to find recurring subjects in short personal
//! journal entries; not a general-purpose parser.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::lexicon::*;
use super::{Analysis, EntityLabel, EntitySpan, LinguisticAnalyzer, NounChunk, Pos, Token};
use crate::error::Result;

static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+([.,:]\d+)*$").expect("numeric pattern should compile"));
static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").expect("date pattern should compile"));
static CLOCK_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}:\d{2}(am|pm)?|\d{1,2}(am|pm))$").expect("time pattern should compile")
});

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "ance", "ence", "ism", "hood", "dom",
];
const ADJ_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less", "ish", "ical"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanKind {
    Word,
    Punct,
    Placeholder,
}

#[derive(Debug, Clone, Copy)]
struct RawSpan {
    start: usize,
    end: usize,
    kind: SpanKind,
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

fn normalize(word: &str) -> String {
    word.to_lowercase().replace('\u{2019}', "'")
}

/// Heuristic extractor using word lists and pattern rules
#[derive(Debug, Default, Clone)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        HeuristicAnalyzer
    }

    fn scan(text: &str) -> Vec<RawSpan> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut spans = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let (start, c) = chars[i];
            if c.is_whitespace() {
                i += 1;
                continue;
            }
            if c == '['
                && let Some(close) = Self::placeholder_end(&chars, i)
            {
                spans.push(RawSpan {
                    start,
                    end: chars[close].0 + 1,
                    kind: SpanKind::Placeholder,
                });
                i = close + 1;
                continue;
            }
            if c.is_alphanumeric() {
                let mut j = i + 1;
                while j < chars.len() {
                    let cj = chars[j].1;
                    if cj.is_alphanumeric() {
                        j += 1;
                        continue;
                    }
                    let next = chars.get(j + 1).map(|(_, n)| *n);
                    let joins = match (cj, next) {
                        (':', Some(n)) => chars[j - 1].1.is_ascii_digit() && n.is_ascii_digit(),
                        ('-', Some(n)) => n.is_alphanumeric(),
                        (a, Some(n)) if is_apostrophe(a) => n.is_alphanumeric(),
                        _ => false,
                    };
                    if !joins {
                        break;
                    }
                    j += 2;
                }
                let end = chars.get(j).map_or(text.len(), |(b, _)| *b);
                Self::split_contraction(text, start, end, &mut spans);
                i = j;
                continue;
            }
            spans.push(RawSpan {
                start,
                end: start + c.len_utf8(),
                kind: SpanKind::Punct,
            });
            i += 1;
        }
        spans
    }

    /// Index of the `]` closing a `[LABEL]` placeholder opened at `open`
    fn placeholder_end(chars: &[(usize, char)], open: usize) -> Option<usize> {
        let mut j = open + 1;
        while j < chars.len() && (chars[j].1.is_ascii_uppercase() || chars[j].1 == '_') {
            j += 1;
        }
        (j > open + 1 && j < chars.len() && chars[j].1 == ']').then_some(j)
    }

    fn split_contraction(text: &str, start: usize, end: usize, spans: &mut Vec<RawSpan>) {
        let word = &text[start..end];
        if let Some((apos, ch)) = word.char_indices().rev().find(|(_, c)| is_apostrophe(*c)) {
            let suffix = word[apos + ch.len_utf8()..].to_lowercase();
            let split_at = match suffix.as_str() {
                "s" | "m" | "re" | "ve" | "ll" | "d" => Some(apos),
                "t" if word[..apos].ends_with(['n', 'N']) => Some(apos - 1),
                _ => None,
            };
            if let Some(at) = split_at
                && at > 0
            {
                spans.push(RawSpan {
                    start,
                    end: start + at,
                    kind: SpanKind::Word,
                });
                spans.push(RawSpan {
                    start: start + at,
                    end,
                    kind: SpanKind::Word,
                });
                return;
            }
        }
        spans.push(RawSpan {
            start,
            end,
            kind: SpanKind::Word,
        });
    }

    fn starts_sentence(text: &str, spans: &[RawSpan], idx: usize) -> bool {
        let Some(prev) = idx.checked_sub(1).map(|p| spans[p]) else {
            return true;
        };
        if text[prev.end..spans[idx].start].contains('\n') {
            return true;
        }
        if prev.kind != SpanKind::Punct {
            return false;
        }
        match &text[prev.start..prev.end] {
            "!" | "?" => true,
            "." => !idx
                .checked_sub(2)
                .map(|p| spans[p])
                .is_some_and(|w| w.kind == SpanKind::Word && TITLES.contains(normalize(&text[w.start..w.end]).as_str())),
            _ => false,
        }
    }

    fn word_pos(raw: &str, lower: &str, sentence_start: bool, prev: Option<&Token>) -> Pos {
        if NUMERIC.is_match(lower) || ISO_DATE.is_match(lower) || CLOCK_TIME.is_match(lower) {
            return Pos::Num;
        }
        if lower.starts_with('\'') || lower == "n't" {
            return if lower == "n't" || lower == "'s" {
                Pos::Part
            } else {
                Pos::Aux
            };
        }
        if PARTICLES.contains(lower) {
            return Pos::Part;
        }
        if INTERJECTIONS.contains(lower) {
            return Pos::Intj;
        }

        let capitalized = raw.chars().next().is_some_and(char::is_uppercase);
        let letters = raw.chars().count();
        let acronym = (2..=5).contains(&letters) && raw.chars().all(|c| c.is_ascii_uppercase());
        if acronym && !STOPWORDS.contains(lower) {
            return Pos::Propn;
        }
        if capitalized && !sentence_start && (MONTHS.contains(lower) || WEEKDAYS.contains(lower))
        {
            return Pos::Propn;
        }

        let prev_pos = prev.map(|t| t.pos);
        let prev_lower = prev.map(|t| t.text.to_lowercase());

        if lower == "like" && matches!(prev_pos, Some(Pos::Pron | Pos::Aux | Pos::Adv)) {
            return Pos::Verb;
        }
        if PRONOUNS.contains(lower) {
            return Pos::Pron;
        }
        if DETERMINERS.contains(lower) {
            return Pos::Det;
        }
        if AUXILIARIES.contains(lower) {
            return Pos::Aux;
        }
        if COORDINATORS.contains(lower) {
            return Pos::Cconj;
        }
        if SUBORDINATORS.contains(lower) {
            return Pos::Sconj;
        }
        if ADPOSITIONS.contains(lower) {
            return Pos::Adp;
        }
        if NUMBER_WORDS.contains(lower) {
            return Pos::Num;
        }

        if capitalized {
            let known_name = FIRST_NAMES.contains(lower)
                || GPE_NAMES.contains(lower)
                || KNOWN_ORGS.contains(lower)
                || NORP_NAMES.contains(lower);
            if !sentence_start || known_name {
                return Pos::Propn;
            }
        }

        if ADVERBS.contains(lower) {
            return Pos::Adv;
        }

        let verb_context = match prev_pos {
            Some(Pos::Pron | Pos::Aux | Pos::Part) => true,
            Some(Pos::Adv) => !matches!(
                prev_lower.as_deref(),
                Some("much" | "more" | "less" | "enough" | "so" | "too")
            ),
            _ => false,
        };
        let nominal_context = matches!(prev_pos, Some(Pos::Det | Pos::Adj | Pos::Adp | Pos::Num));

        if NOUNS.contains(lower) && VERBS.contains(lower) {
            return if verb_context { Pos::Verb } else { Pos::Noun };
        }
        if ADJECTIVES.contains(lower) {
            return Pos::Adj;
        }
        if VERBS.contains(lower) {
            return if nominal_context { Pos::Noun } else { Pos::Verb };
        }
        if NOUNS.contains(lower) {
            return Pos::Noun;
        }

        let len = lower.len();
        if len > 4 && lower.ends_with("ly") {
            return if LY_NOUNS.contains(lower) {
                Pos::Noun
            } else if LY_ADJECTIVES.contains(lower) {
                Pos::Adj
            } else {
                Pos::Adv
            };
        }
        if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) && len > 4 {
            return Pos::Noun;
        }
        if len > 5 && lower.ends_with("ing") {
            return if nominal_context { Pos::Noun } else { Pos::Verb };
        }
        if len > 4 && lower.ends_with("ed") {
            let linked = prev_lower
                .as_deref()
                .is_some_and(|p| LINKING_WORDS.contains(p));
            return if linked { Pos::Adj } else { Pos::Verb };
        }
        if len > 4 && ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return Pos::Adj;
        }
        if prev_pos == Some(Pos::Pron)
            && lower.ends_with('s')
            && VERBS.contains(&lower[..len - 1])
        {
            return Pos::Verb;
        }
        Pos::Noun
    }

    fn tag(text: &str, spans: &[RawSpan]) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::with_capacity(spans.len());
        for (idx, span) in spans.iter().enumerate() {
            let raw = &text[span.start..span.end];
            let lower = normalize(raw);
            let pos = match span.kind {
                SpanKind::Placeholder => Pos::X,
                SpanKind::Punct => Pos::Punct,
                SpanKind::Word => {
                    let sentence_start = Self::starts_sentence(text, spans, idx);
                    Self::word_pos(raw, &lower, sentence_start, tokens.last())
                }
            };
            tokens.push(Token {
                text: raw.to_string(),
                lemma: lemmatize(&lower, pos),
                pos,
                is_stop: STOPWORDS.contains(lower.as_str()),
                start: span.start,
                end: span.end,
            });
        }
        tokens
    }

    fn noun_chunks(text: &str, tokens: &[Token]) -> Vec<NounChunk> {
        let mut chunks = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let first = &tokens[i];
            if first.pos == Pos::Pron {
                chunks.push(NounChunk {
                    text: first.text.clone(),
                    root_text: first.text.clone(),
                    root_pos: Pos::Pron,
                    word_count: 1,
                    start: first.start,
                    end: first.end,
                });
                i += 1;
                continue;
            }

            let mut j = i;
            if tokens[j].pos == Pos::Det {
                j += 1;
            }
            while j < tokens.len() {
                let modifier = match tokens[j].pos {
                    Pos::Adj | Pos::Num => true,
                    Pos::Adv => tokens.get(j + 1).is_some_and(|n| n.pos == Pos::Adj),
                    _ => false,
                };
                if !modifier {
                    break;
                }
                j += 1;
            }
            let mut k = j;
            while k < tokens.len() && tokens[k].pos.is_nominal() {
                k += 1;
            }
            if k == j {
                i += 1;
                continue;
            }

            let root = &tokens[k - 1];
            chunks.push(NounChunk {
                text: text[first.start..root.end].to_string(),
                root_text: root.text.clone(),
                root_pos: root.pos,
                word_count: k - i,
                start: first.start,
                end: root.end,
            });
            i = k;
        }
        chunks
    }

    fn entities(text: &str, tokens: &[Token]) -> Vec<EntitySpan> {
        let mut entities = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            match Self::match_entity(tokens, i) {
                Some((last, label)) => {
                    let (start, end) = (tokens[i].start, tokens[last].end);
                    entities.push(EntitySpan {
                        text: text[start..end].to_string(),
                        label,
                        start,
                        end,
                    });
                    i = last + 1;
                }
                None => i += 1,
            }
        }
        entities
    }

    /// Returns the index of the last token of an entity starting at `i`
    fn match_entity(tokens: &[Token], i: usize) -> Option<(usize, EntityLabel)> {
        let token = &tokens[i];
        let lower = normalize(&token.text);
        let next = tokens.get(i + 1).map(|t| normalize(&t.text));
        let next_word = next.as_deref();

        if lower == "tonight" {
            return Some((i, EntityLabel::Time));
        }
        if matches!(lower.as_str(), "this" | "last" | "yesterday" | "tomorrow") && in_set(next_word, &DAY_PARTS)
        {
            return Some((i + 1, EntityLabel::Time));
        }
        if token.pos == Pos::Num {
            if CLOCK_TIME.is_match(&lower) {
                return Some((i, EntityLabel::Time));
            }
            if matches!(next_word, Some("am" | "pm")) {
                return Some((i + 1, EntityLabel::Time));
            }
            if ISO_DATE.is_match(&lower) {
                return Some((i, EntityLabel::Date));
            }
            if in_set(next_word, &MONTHS) && tokens[i + 1].pos == Pos::Propn {
                return Some((i + 1, EntityLabel::Date));
            }
            return Some((i, EntityLabel::Cardinal));
        }
        if RELATIVE_DAYS.contains(lower.as_str()) {
            return Some((i, EntityLabel::Date));
        }
        if matches!(lower.as_str(), "last" | "next" | "this")
            && (in_set(next_word, &DATE_UNITS) || in_set(next_word, &WEEKDAYS))
        {
            return Some((i + 1, EntityLabel::Date));
        }
        if token.pos != Pos::Propn {
            return None;
        }
        if WEEKDAYS.contains(lower.as_str()) {
            return Some((i, EntityLabel::Date));
        }
        if MONTHS.contains(lower.as_str()) {
            let mut last = i;
            if tokens.get(i + 1).is_some_and(|t| t.pos == Pos::Num) {
                last = i + 1;
                let year = tokens.get(i + 3).filter(|t| t.pos == Pos::Num && t.text.len() == 4);
                if tokens.get(i + 2).is_some_and(|t| t.text == ",") && year.is_some() {
                    last = i + 3;
                }
            }
            return Some((last, EntityLabel::Date));
        }

        let mut last = i;
        loop {
            let n = last + 1;
            let Some(candidate) = tokens.get(n) else { break };
            if candidate.pos == Pos::Propn && !is_calendar_word(&candidate.text) {
                last = n;
                continue;
            }
            let connector = matches!(candidate.text.as_str(), "of" | "&")
                || (candidate.text == "." && TITLES.contains(normalize(&tokens[last].text).as_str()));
            if connector && tokens.get(n + 1).is_some_and(|t| t.pos == Pos::Propn) {
                last = n + 1;
                continue;
            }
            break;
        }
        Some((last, classify_run(&tokens[i..=last])))
    }
}

fn in_set(word: Option<&str>, set: &HashSet<&'static str>) -> bool {
    word.is_some_and(|w| set.contains(w))
}

fn is_calendar_word(word: &str) -> bool {
    let lower = normalize(word);
    MONTHS.contains(lower.as_str()) || WEEKDAYS.contains(lower.as_str())
}

fn classify_run(run: &[Token]) -> EntityLabel {
    let words: Vec<String> = run
        .iter()
        .filter(|t| t.pos != Pos::Punct)
        .map(|t| normalize(&t.text))
        .collect();
    let joined = words.join(" ");
    let first = words.first().map(String::as_str).unwrap_or_default();
    let last = words.last().map(String::as_str).unwrap_or_default();

    if GPE_NAMES.contains(joined.as_str()) {
        EntityLabel::Gpe
    } else if words.len() == 1 && NORP_NAMES.contains(first) {
        EntityLabel::Norp
    } else if KNOWN_ORGS.contains(first) || (words.len() > 1 && ORG_SUFFIXES.contains(last)) {
        EntityLabel::Org
    } else if words.len() > 1 && LOC_SUFFIXES.contains(last) {
        EntityLabel::Loc
    } else if words.len() == 1 && run[0].text.chars().all(|c| c.is_ascii_uppercase()) {
        EntityLabel::Org
    } else {
        EntityLabel::Person
    }
}

fn lemmatize(lower: &str, pos: Pos) -> String {
    match pos {
        Pos::Noun => noun_lemma(lower),
        Pos::Verb | Pos::Aux => verb_lemma(lower),
        Pos::Part if lower == "n't" => "not".to_string(),
        _ => lower.to_string(),
    }
}

fn noun_lemma(word: &str) -> String {
    if let Some(base) = IRREGULAR_NOUNS.get(word) {
        return base.to_string();
    }
    let len = word.len();
    if len <= 3 || !word.ends_with('s') || S_NOUNS.contains(word) {
        return word.to_string();
    }
    if word.ends_with("ies") && len > 4 {
        return format!("{}y", &word[..len - 3]);
    }
    if ["sses", "shes", "ches", "xes", "zes"]
        .iter()
        .any(|s| word.ends_with(s))
    {
        return word[..len - 2].to_string();
    }
    if ["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return word.to_string();
    }
    word[..len - 1].to_string()
}

/// "stopp" -> "stop". Only a doubled ASCII consonant is collapsed, so the
/// cut always lands on a char boundary.
fn undouble(base: &str) -> Option<String> {
    let mut rev = base.chars().rev();
    let (last, prev) = (rev.next()?, rev.next()?);
    rev.next()?;
    (last == prev
        && last.is_ascii_alphabetic()
        && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u' | 'l' | 's' | 'z'))
        .then(|| base[..base.len() - 1].to_string())
}

fn verb_lemma(word: &str) -> String {
    if let Some(base) = IRREGULAR_VERBS.get(word) {
        return base.to_string();
    }
    let len = word.len();
    let mut candidates: Vec<String> = Vec::new();
    let mut doubled = None;
    if len > 4 && word.ends_with("ing") {
        let base = &word[..len - 3];
        candidates.push(base.to_string());
        candidates.push(format!("{base}e"));
        doubled = undouble(base);
    } else if len > 4 && word.ends_with("ied") {
        candidates.push(format!("{}y", &word[..len - 3]));
    } else if len > 3 && word.ends_with("ed") {
        let base = &word[..len - 2];
        candidates.push(base.to_string());
        candidates.push(word[..len - 1].to_string());
        doubled = undouble(base);
    } else if len > 3 && word.ends_with("ies") {
        candidates.push(format!("{}y", &word[..len - 3]));
    } else if len > 3 && word.ends_with("es") {
        candidates.push(word[..len - 2].to_string());
        candidates.push(word[..len - 1].to_string());
    } else if len > 2 && word.ends_with('s') && !word.ends_with("ss") {
        candidates.push(word[..len - 1].to_string());
    }

    if let Some(known) = doubled
        .iter()
        .chain(candidates.iter())
        .find(|c| VERBS.contains(c.as_str()))
    {
        return known.clone();
    }
    doubled
        .or_else(|| candidates.into_iter().next())
        .unwrap_or_else(|| word.to_string())
}

impl LinguisticAnalyzer for HeuristicAnalyzer {
    fn analyze(&self, text: &str) -> Result<Analysis> {
        if text.trim().is_empty() {
            return Ok(Analysis::default());
        }
        let spans = Self::scan(text);
        let tokens = Self::tag(text, &spans);
        let noun_chunks = Self::noun_chunks(text, &tokens);
        let entities = Self::entities(text, &tokens);
        Ok(Analysis {
            tokens,
            noun_chunks,
            entities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> Analysis {
        HeuristicAnalyzer::new().analyze(text).unwrap()
    }

    fn roots(analysis: &Analysis) -> Vec<String> {
        analysis
            .noun_chunks
            .iter()
            .map(|c| c.root_text.to_lowercase())
            .collect()
    }

    #[test]
    fn splits_contractions_and_keeps_offsets() {
        let text = "I can't sleep, it's awful.";
        let analysis = analyze(text);
        let words: Vec<&str> = analysis.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            words,
            vec!["I", "ca", "n't", "sleep", ",", "it", "'s", "awful", "."]
        );
        for token in &analysis.tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn placeholders_are_single_inert_tokens() {
        let analysis = analyze("Met [PERSON] in [GPE] on [DATE].");
        let placeholders: Vec<&Token> = analysis
            .tokens
            .iter()
            .filter(|t| t.pos == Pos::X)
            .collect();
        assert_eq!(placeholders.len(), 3);
        assert!(analysis.entities.is_empty(), "{:?}", analysis.entities);
    }

    #[test]
    fn noun_chunk_roots_are_final_nouns() {
        let analysis = analyze("This new project is a terrible mess and the deadline feels impossible.");
        assert_eq!(roots(&analysis), vec!["project", "mess", "deadline"]);
        let first = &analysis.noun_chunks[0];
        assert_eq!(first.text, "This new project");
        assert_eq!(first.word_count, 3);
        assert_eq!(first.root_pos, Pos::Noun);
    }

    #[test]
    fn lone_pronouns_form_single_word_chunks() {
        let analysis = analyze("I told her about it.");
        let pronouns: Vec<&NounChunk> = analysis
            .noun_chunks
            .iter()
            .filter(|c| c.root_pos == Pos::Pron)
            .collect();
        assert!(pronouns.iter().all(|c| c.word_count == 1));
        assert!(pronouns.iter().any(|c| c.text == "I"));
        assert!(pronouns.iter().any(|c| c.text == "it"));
    }

    #[test]
    fn ambiguous_words_follow_context() {
        let analysis = analyze("I work late because work is endless.");
        let work: Vec<Pos> = analysis
            .tokens
            .iter()
            .filter(|t| t.text == "work")
            .map(|t| t.pos)
            .collect();
        assert_eq!(work, vec![Pos::Verb, Pos::Noun]);
    }

    #[test]
    fn labels_people_places_orgs_and_dates() {
        let analysis =
            analyze("Had lunch with Alex in New York on Monday before the Google interview at 3pm.");
        let labelled: Vec<(String, EntityLabel)> = analysis
            .entities
            .iter()
            .map(|e| (e.text.clone(), e.label))
            .collect();
        assert!(labelled.contains(&("Alex".into(), EntityLabel::Person)));
        assert!(labelled.contains(&("New York".into(), EntityLabel::Gpe)));
        assert!(labelled.contains(&("Monday".into(), EntityLabel::Date)));
        assert!(labelled.contains(&("Google".into(), EntityLabel::Org)));
        assert!(labelled.contains(&("3pm".into(), EntityLabel::Time)));
    }

    #[test]
    fn sentence_initial_known_names_are_entities() {
        let analysis = analyze("Alex sent a really nice message today.");
        assert_eq!(analysis.entities[0].text, "Alex");
        assert_eq!(analysis.entities[0].label, EntityLabel::Person);
        assert!(
            analysis
                .entities
                .iter()
                .any(|e| e.text == "today" && e.label == EntityLabel::Date)
        );
    }

    #[test]
    fn relative_day_parts_are_time() {
        let analysis = analyze("My sleep was terrible last night.");
        assert!(
            analysis
                .entities
                .iter()
                .any(|e| e.text == "last night" && e.label == EntityLabel::Time)
        );
    }

    #[test]
    fn lemmas_and_stopwords() {
        let analysis = analyze("The meetings were causing worries for my colleagues.");
        let lemma = |w: &str| {
            analysis
                .tokens
                .iter()
                .find(|t| t.text == w)
                .map(|t| t.lemma.clone())
                .unwrap()
        };
        assert_eq!(lemma("meetings"), "meeting");
        assert_eq!(lemma("causing"), "cause");
        assert_eq!(lemma("colleagues"), "colleague");
        assert!(analysis.tokens.iter().find(|t| t.text == "The").unwrap().is_stop);
    }

    #[test]
    fn non_ascii_words_keep_char_boundaries() {
        for text in [
            "I keep ab\u{4000}ing about work.",
            "They ab\u{4000}ed home again.",
            "Le café était fermé, j'étais déçu.",
            "仕事のことばかり考えている。",
            "Zoë sat in the naïve façades' shadows.",
        ] {
            let analysis = analyze(text);
            assert!(!analysis.tokens.is_empty(), "{text}");
            for token in &analysis.tokens {
                assert_eq!(&text[token.start..token.end], token.text);
            }
        }
    }

    #[test]
    fn undouble_only_collapses_ascii_consonants() {
        assert_eq!(undouble("stopp").as_deref(), Some("stop"));
        assert_eq!(undouble("ab\u{4000}"), None);
        assert_eq!(undouble("\u{4000}\u{4000}\u{4000}"), None);
        assert_eq!(undouble("fall"), None);
        assert_eq!(undouble("pp"), None);
        assert_eq!(verb_lemma("stopped"), "stop");
        assert_eq!(verb_lemma("ab\u{4000}ing"), "ab\u{4000}");
    }

    #[test]
    fn empty_text_yields_empty_analysis() {
        assert_eq!(analyze("   "), Analysis::default());
    }
}
