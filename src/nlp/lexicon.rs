//! Closed-class word lists, gazetteers and the sentiment valence table used by
//! the rule-based analyzer and scorer. All entries are lower-case.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

pub static PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
        "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
        "mine", "yours", "hers", "ours", "theirs", "someone", "somebody", "something",
        "anyone", "anybody", "anything", "everyone", "everybody", "everything", "nobody",
        "nothing", "who", "whom", "what", "which", "whoever", "whatever", "one",
    ])
});

// Possessive pronouns behave like determiners at the start of a noun phrase
pub static DETERMINERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its",
        "our", "their", "some", "any", "every", "each", "no", "another", "all", "both",
        "either", "neither", "such", "whose",
    ])
});

pub static AUXILIARIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
        "must", "ca", "wo", "'m", "'re", "'ve", "'ll", "'d",
    ])
});

pub static ADPOSITIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "from", "up", "down", "of",
        "off", "over", "under", "around", "without", "within", "across", "toward", "towards",
        "upon", "onto", "like", "near", "behind", "beside", "despite", "until", "via",
    ])
});

pub static COORDINATORS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["and", "or", "but", "nor", "yet", "&"]));

pub static SUBORDINATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "because", "although", "though", "if", "while", "since", "unless", "whether", "once",
        "than", "whereas",
    ])
});

pub static PARTICLES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["not", "to", "n't", "'s"]));

pub static INTERJECTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "oh", "wow", "hey", "ugh", "yeah", "yes", "ok", "okay", "hmm", "ah", "alas", "oops",
        "please", "thanks",
    ])
});

pub static NUMBER_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
        "twelve", "twenty", "thirty", "hundred", "thousand", "million",
    ])
});

pub static ADVERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "very", "really", "so", "too", "just", "also", "always", "never", "often",
        "sometimes", "quite", "rather", "even", "still", "already", "again", "ever", "here",
        "there", "now", "then", "soon", "today", "yesterday", "tomorrow", "tonight", "maybe",
        "perhaps", "almost", "enough", "much", "more", "most", "less", "least", "away",
        "back", "together", "anyway", "instead", "only", "how", "why", "when", "where",
        "ago", "later", "once", "far", "well", "not",
    ])
});

pub static ADJECTIVES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "new", "good", "bad", "great", "long", "little", "old", "big", "small", "high", "low",
        "large", "young", "early", "late", "important", "different", "whole", "real", "best",
        "better", "worse", "worst", "hard", "easy", "sad", "happy", "angry", "tired",
        "awful", "terrible", "horrible", "nice", "fine", "free", "full", "sure", "right",
        "wrong", "last", "next", "first", "same", "own", "other", "busy", "calm", "glad",
        "proud", "afraid", "alone", "sick", "ill", "upset", "anxious", "nervous", "lonely",
        "intense", "impossible", "difficult", "necessary", "positive", "negative", "perfect",
        "amazing", "fresh", "green", "vast", "tough", "healthy", "healthier", "groggy",
        "unfocused", "burnt", "stuck", "lost", "mindful", "incredible", "fascinating",
        "wonderful", "beautiful", "peaceful", "rewarding", "frustrating", "exhausting",
        "boring", "annoying", "overwhelming", "stressful", "exciting", "challenging",
        "grateful", "excited", "overwhelmed", "worried", "scared", "bored", "stressed",
        "exhausted", "frustrated", "disappointed", "relaxed", "relieved", "happier", "sadder",
        "entire", "main", "certain", "quiet", "loud", "dark", "bright", "warm", "cold",
    ])
});

pub static VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "feel", "feels", "felt", "think", "thinks", "thought", "know", "knew", "go", "goes",
        "went", "gone", "going", "get", "gets", "got", "make", "makes", "made", "take",
        "takes", "took", "see", "saw", "seen", "come", "came", "want", "wanted", "need",
        "needs", "needed", "try", "tried", "say", "said", "tell", "told", "hate", "hated",
        "love", "loved", "like", "liked", "keep", "kept", "start", "started", "decide",
        "decided", "spend", "spent", "send", "sent", "watch", "watched", "sleep", "slept",
        "eat", "ate", "run", "ran", "walk", "walked", "talk", "talked", "help", "helped",
        "cause", "causes", "caused", "seem", "seems", "seemed", "become", "became", "leave",
        "left", "find", "found", "give", "gave", "write", "wrote", "read", "finish",
        "finished", "work", "worked", "plant", "planted", "water", "watered", "affect",
        "affects", "affected", "reconnect", "reconnected", "thank", "wish", "hope", "worry",
        "cry", "cried", "miss", "missed", "lose", "fail", "failed", "stop", "stopped",
        "can't", "let", "put", "bring", "brought", "buy", "bought", "call", "called", "ask",
        "asked", "wait", "waited", "move", "moved", "live", "lived", "believe", "believed",
        "understand", "understood", "remember", "forget", "forgot", "avoid", "avoided",
    ])
});

/// Words that are usually nouns but also appear in `VERBS`; context decides.
pub static NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "work", "sleep", "stress", "love", "hope", "worry", "help", "run", "walk", "talk",
        "call", "plant", "water", "start", "need", "feeling", "meeting", "thought", "wish",
        "cry", "miss", "wait", "move", "watch",
    ])
});

/// Nouns ending in `-ly`
pub static LY_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "family", "belly", "ally", "supply", "reply", "jelly", "rally", "bully", "lily",
        "assembly", "anomaly", "monopoly", "july",
    ])
});

/// Adjectives ending in `-ly`
pub static LY_ADJECTIVES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "lonely", "friendly", "lovely", "ugly", "silly", "early", "daily", "weekly",
        "likely", "unlikely", "holy", "costly", "elderly", "lively", "only",
    ])
});

/// Verbs after which an `-ed` form reads as an adjective
pub static LINKING_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "feel", "feels", "felt", "feeling", "am", "is", "are", "was", "were", "be", "been",
        "being", "get", "gets", "got", "getting", "seem", "seems", "seemed", "so", "very",
        "really", "completely", "totally", "too", "extremely", "incredibly", "'m", "'re",
        "became", "become", "look", "looks", "looked",
    ])
});

pub static IRREGULAR_NOUNS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("people", "person"),
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("leaves", "leaf"),
    ]
    .into_iter()
    .collect()
});

/// Nouns that end in `s` in their base form
pub static S_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "news", "series", "physics", "mathematics", "lens", "bus", "gas", "yes", "this",
        "always", "chaos", "basis", "crisis", "analysis", "thesis", "diagnosis", "alias",
        "canvas", "atlas", "status", "focus", "bonus", "campus", "virus", "apparatus",
        "plus", "christmas", "sometimes", "perhaps", "us", "its", "his", "hers", "ours",
        "yours", "theirs", "gas", "kudos", "whereas", "was", "has", "does", "is",
    ])
});

pub static IRREGULAR_VERBS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("am", "be"),
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("'m", "be"),
        ("'re", "be"),
        ("has", "have"),
        ("had", "have"),
        ("'ve", "have"),
        ("does", "do"),
        ("did", "do"),
        ("done", "do"),
        ("went", "go"),
        ("gone", "go"),
        ("felt", "feel"),
        ("made", "make"),
        ("got", "get"),
        ("thought", "think"),
        ("said", "say"),
        ("took", "take"),
        ("came", "come"),
        ("saw", "see"),
        ("seen", "see"),
        ("knew", "know"),
        ("left", "leave"),
        ("kept", "keep"),
        ("slept", "sleep"),
        ("ate", "eat"),
        ("ran", "run"),
        ("began", "begin"),
        ("brought", "bring"),
        ("bought", "buy"),
        ("told", "tell"),
        ("lost", "lose"),
        ("spent", "spend"),
        ("sent", "send"),
        ("found", "find"),
        ("gave", "give"),
        ("wrote", "write"),
        ("became", "become"),
        ("understood", "understand"),
        ("forgot", "forget"),
        ("ca", "can"),
        ("wo", "will"),
        ("'ll", "will"),
        ("'d", "would"),
        ("n't", "not"),
    ]
    .into_iter()
    .collect()
});

/// Stop words, modelled on the usual English stop list of NLP toolkits
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "a", "about", "above", "after", "again", "against", "all", "almost", "alone",
        "along", "already", "also", "although", "always", "am", "among", "an", "and",
        "another", "any", "anyhow", "anyone", "anything", "anyway", "are", "around", "as",
        "at", "back", "be", "became", "because", "become", "been", "before", "being",
        "below", "beside", "between", "both", "but", "by", "ca", "can", "could", "did", "do",
        "does", "doing", "done", "down", "due", "during", "each", "either", "else", "enough",
        "even", "ever", "every", "everyone", "everything", "few", "first", "for", "from",
        "front", "full", "further", "get", "give", "go", "had", "has", "have", "he", "her",
        "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if",
        "in", "into", "is", "it", "its", "itself", "just", "last", "least", "less", "made",
        "make", "many", "may", "me", "might", "mine", "more", "most", "mostly", "much",
        "must", "my", "myself", "neither", "never", "next", "no", "nobody", "none", "nor",
        "not", "nothing", "now", "of", "off", "often", "on", "once", "one", "only", "onto",
        "or", "other", "others", "our", "ours", "ourselves", "out", "over", "own", "part",
        "per", "perhaps", "please", "put", "quite", "rather", "really", "same", "say", "see",
        "seem", "seemed", "seems", "several", "she", "should", "show", "side", "since", "so",
        "some", "someone", "something", "sometime", "sometimes", "still", "such", "take",
        "than", "that", "the", "their", "them", "themselves", "then", "there", "these",
        "they", "thing", "this", "those", "though", "through", "thus", "to", "together",
        "too", "top", "toward", "towards", "under", "until", "up", "upon", "us", "used",
        "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "where",
        "whether", "which", "while", "who", "whole", "whom", "whose", "why", "will", "with",
        "within", "without", "would", "yet", "you", "your", "yours", "yourself",
        "yourselves", "n't", "'s", "'m", "'re", "'ve", "'ll", "'d", "lot", "way",
    ])
});

pub static MONTHS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "january", "february", "march", "april", "may", "june", "july", "august",
        "september", "october", "november", "december", "jan", "feb", "mar", "apr", "jun",
        "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    ])
});

pub static WEEKDAYS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
        "weekend",
    ])
});

pub static RELATIVE_DAYS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["today", "yesterday", "tomorrow"]));

/// Units that follow `last`/`next`/`this` to form a date expression
pub static DATE_UNITS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["week", "month", "year", "weekend", "semester", "summer", "winter", "spring", "fall"]));

/// Day parts that follow `this`/`last`/`yesterday` to form a time expression
pub static DAY_PARTS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["morning", "afternoon", "evening", "night"]));

pub static GPE_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "america", "usa", "us", "uk", "england", "britain", "scotland", "ireland", "wales",
        "canada", "mexico", "brazil", "argentina", "france", "germany", "spain", "italy",
        "portugal", "netherlands", "belgium", "sweden", "norway", "denmark", "finland",
        "poland", "greece", "turkey", "russia", "ukraine", "china", "japan", "korea",
        "india", "pakistan", "australia", "zealand", "egypt", "nigeria", "kenya", "israel",
        "iran", "vietnam", "thailand", "indonesia", "philippines", "singapore", "london",
        "paris", "berlin", "madrid", "rome", "tokyo", "beijing", "delhi", "mumbai", "sydney",
        "toronto", "vancouver", "chicago", "boston", "seattle", "austin", "denver", "miami",
        "atlanta", "dallas", "houston", "portland", "brooklyn", "manhattan", "california",
        "texas", "florida", "ohio", "oregon", "washington", "colorado", "arizona", "nevada",
        "georgia", "virginia", "michigan", "new york", "los angeles", "san francisco",
        "new jersey", "hong kong", "new zealand", "united states", "united kingdom",
        "south africa", "las vegas", "san diego",
    ])
});

pub static LOC_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "river", "lake", "mountain", "mountains", "ocean", "sea", "park", "beach", "valley",
        "forest", "island", "islands", "bay", "canyon", "desert", "hills", "coast",
    ])
});

pub static ORG_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "inc", "corp", "corporation", "company", "co", "llc", "ltd", "university", "college",
        "school", "bank", "hospital", "institute", "foundation", "group", "agency", "club",
        "team", "labs", "studio", "studios", "association", "council", "department",
    ])
});

pub static KNOWN_ORGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "google", "microsoft", "apple", "amazon", "netflix", "facebook", "meta", "spotify",
        "nasa", "tesla", "ikea", "starbucks", "walmart", "twitter", "instagram", "tiktok",
        "youtube", "linkedin", "slack", "uber", "airbnb", "fbi", "un", "nhs", "ibm",
    ])
});

pub static NORP_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "american", "british", "english", "french", "german", "spanish", "italian",
        "chinese", "japanese", "korean", "indian", "mexican", "canadian", "australian",
        "brazilian", "russian", "irish", "scottish", "christian", "muslim", "jewish",
        "buddhist", "hindu", "catholic", "democrat", "republican",
    ])
});

/// First names recognised even at the start of a sentence
pub static FIRST_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "alex", "sam", "jordan", "taylor", "chris", "maria", "john", "sarah", "emma",
        "michael", "david", "james", "anna", "jessica", "daniel", "laura", "mark", "lisa",
        "kevin", "rachel", "tom", "emily", "ben", "kate", "mike", "olivia", "noah", "liam",
        "sophia", "mia", "ethan", "lucas", "priya", "omar", "fatima", "wei", "yuki",
    ])
});

/// Abbreviations whose trailing period does not end a sentence
pub static TITLES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr"]));

/// Sentiment valences on a -4..4 scale
pub static VALENCE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // negative
        ("hate", -2.7),
        ("hated", -2.6),
        ("awful", -2.0),
        ("terrible", -2.5),
        ("horrible", -2.5),
        ("bad", -2.5),
        ("worse", -2.1),
        ("worst", -3.1),
        ("mess", -1.5),
        ("messy", -1.5),
        ("overwhelmed", -1.5),
        ("overwhelming", -1.2),
        ("impossible", -1.5),
        ("stress", -1.8),
        ("stressed", -1.6),
        ("stressful", -1.7),
        ("burnt", -1.2),
        ("burnout", -1.5),
        ("pressure", -1.2),
        ("frustrating", -1.9),
        ("frustrated", -1.8),
        ("frustration", -1.8),
        ("lack", -1.1),
        ("difficult", -1.5),
        ("challenging", -0.5),
        ("tough", -0.5),
        ("groggy", -1.0),
        ("unfocused", -1.0),
        ("anxious", -1.0),
        ("anxiety", -1.9),
        ("sad", -2.1),
        ("sadness", -1.9),
        ("angry", -2.3),
        ("anger", -2.7),
        ("mad", -2.2),
        ("tired", -1.9),
        ("exhausted", -1.9),
        ("exhausting", -1.5),
        ("drained", -1.4),
        ("worried", -1.5),
        ("worry", -1.9),
        ("worrying", -1.4),
        ("lonely", -1.5),
        ("alone", -1.0),
        ("scared", -1.9),
        ("afraid", -2.0),
        ("fear", -2.2),
        ("fail", -2.5),
        ("failed", -2.3),
        ("failure", -2.3),
        ("cry", -2.1),
        ("cried", -2.0),
        ("crying", -2.1),
        ("upset", -1.6),
        ("annoying", -1.7),
        ("annoyed", -1.6),
        ("disappointed", -1.9),
        ("disappointing", -2.2),
        ("hurt", -2.4),
        ("pain", -2.3),
        ("painful", -2.4),
        ("problem", -1.7),
        ("problems", -1.7),
        ("miserable", -2.2),
        ("hopeless", -2.0),
        ("stuck", -1.0),
        ("pointless", -1.5),
        ("useless", -1.8),
        ("boring", -1.3),
        ("bored", -1.1),
        ("lost", -1.3),
        ("panic", -2.3),
        ("nervous", -1.1),
        ("guilty", -1.8),
        ("ashamed", -2.1),
        ("regret", -1.8),
        ("ugh", -1.5),
        ("sick", -1.7),
        ("ill", -1.6),
        ("conflict", -1.3),
        ("argument", -1.2),
        ("fight", -1.6),
        ("fought", -1.5),
        ("blame", -1.4),
        ("rejected", -1.9),
        ("ignored", -1.3),
        ("unfair", -2.1),
        ("tense", -1.4),
        ("struggle", -1.5),
        ("struggling", -1.5),
        ("lazy", -1.5),
        ("dread", -2.0),
        ("dreading", -2.0),
        ("broken", -1.5),
        ("cruel", -2.8),
        ("depressed", -2.3),
        ("depressing", -1.6),
        ("unhappy", -1.8),
        ("insecure", -1.6),
        ("jealous", -2.0),
        ("overthinking", -1.0),
        ("wrong", -2.1),
        ("annoy", -1.9),
        ("suffer", -2.1),
        ("suffering", -2.1),
        ("lose", -1.3),
        ("losing", -1.6),
        ("loss", -1.3),
        ("death", -2.9),
        ("died", -2.6),
        ("crisis", -3.1),
        ("disaster", -3.1),
        ("chaos", -2.1),
        ("chaotic", -2.0),
        // positive
        ("love", 3.2),
        ("loved", 2.9),
        ("lovely", 2.8),
        ("happy", 2.7),
        ("happier", 2.4),
        ("happiness", 2.6),
        ("excited", 1.4),
        ("exciting", 2.2),
        ("amazing", 2.8),
        ("wonderful", 2.7),
        ("beautiful", 2.9),
        ("perfect", 2.7),
        ("peaceful", 2.2),
        ("rewarding", 2.3),
        ("grateful", 2.0),
        ("gratitude", 2.3),
        ("incredible", 2.0),
        ("fascinating", 2.0),
        ("nice", 1.8),
        ("good", 1.9),
        ("great", 3.1),
        ("best", 3.2),
        ("better", 1.9),
        ("positive", 2.6),
        ("healthy", 1.7),
        ("healthier", 1.5),
        ("calm", 1.3),
        ("relaxed", 2.2),
        ("relaxing", 2.1),
        ("proud", 2.1),
        ("joy", 2.8),
        ("fun", 2.3),
        ("enjoy", 2.2),
        ("enjoyed", 2.3),
        ("glad", 2.0),
        ("thankful", 2.3),
        ("hope", 1.9),
        ("hopeful", 2.3),
        ("excellent", 2.7),
        ("awesome", 3.1),
        ("fantastic", 2.6),
        ("delighted", 3.2),
        ("pleased", 1.9),
        ("relief", 1.5),
        ("relieved", 2.0),
        ("success", 2.7),
        ("successful", 2.8),
        ("win", 2.8),
        ("won", 2.7),
        ("accomplished", 1.8),
        ("confident", 2.2),
        ("strong", 2.3),
        ("peace", 2.5),
        ("care", 2.2),
        ("friend", 2.2),
        ("friendship", 1.9),
        ("laugh", 2.6),
        ("laughed", 2.5),
        ("smile", 1.5),
        ("fine", 0.8),
        ("okay", 0.9),
        ("progress", 1.0),
        ("support", 1.7),
        ("supported", 2.0),
        ("supportive", 2.0),
        ("help", 1.7),
        ("helping", 1.7),
        ("helpful", 1.8),
        ("mindful", 1.2),
        ("inspired", 2.2),
        ("motivated", 1.8),
        ("productive", 1.6),
        ("creative", 1.9),
        ("lucky", 1.8),
        ("safe", 1.9),
        ("sweet", 2.0),
        ("warm", 0.9),
        ("energized", 2.0),
        ("free", 2.3),
        ("kindness", 2.2),
        ("celebrate", 2.7),
        ("celebrated", 2.4),
        ("thrilled", 2.8),
        ("content", 1.2),
        ("cozy", 1.8),
    ]
    .into_iter()
    .collect()
});

/// Intensifiers (+) and dampeners (-) that scale the next sentiment word
pub static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    const INCR: f64 = 0.293;
    const DECR: f64 = -0.293;
    [
        ("absolutely", INCR),
        ("completely", INCR),
        ("extremely", INCR),
        ("really", INCR),
        ("so", INCR),
        ("totally", INCR),
        ("very", INCR),
        ("incredibly", INCR),
        ("utterly", INCR),
        ("deeply", INCR),
        ("super", INCR),
        ("quite", INCR),
        ("truly", INCR),
        ("highly", INCR),
        ("especially", INCR),
        ("much", INCR),
        ("barely", DECR),
        ("hardly", DECR),
        ("slightly", DECR),
        ("somewhat", DECR),
        ("kinda", DECR),
        ("marginally", DECR),
        ("partly", DECR),
        ("scarcely", DECR),
    ]
    .into_iter()
    .collect()
});

pub static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "not", "no", "never", "n't", "nothing", "nobody", "none", "without", "neither",
        "nor", "cannot", "isnt", "dont", "cant", "wont", "didnt", "doesnt", "wasnt",
        "werent", "havent", "hasnt", "shouldnt", "wouldnt", "couldnt",
    ])
});
