use serde::Serialize;
use std::fmt;

use crate::config::SuggestionsConfig;

pub const TOPIC_PLACEHOLDER: &str = "{topic}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Reframing,
    EmotionalExploration,
    ActionOriented,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Reframing,
        Category::EmotionalExploration,
        Category::ActionOriented,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Reframing => "reframing",
            Category::EmotionalExploration => "emotional_exploration",
            Category::ActionOriented => "action_oriented",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn local_type(self) -> String {
        format!("{}_local_prompt", self.as_str())
    }

    pub fn fallback_type(self) -> String {
        format!("{}_fallback_prompt", self.as_str())
    }

    /// Instruction appended to remote prompts for this category
    pub fn instruction(self) -> &'static str {
        match self {
            Category::Reframing => {
                "Offer a gentle question that helps the writer see the situation from a different perspective."
            }
            Category::EmotionalExploration => {
                "Offer a gentle question that invites the writer to explore the feelings underneath."
            }
            Category::ActionOriented => {
                "Offer one small, concrete and kind next step the writer could take."
            }
        }
    }

    fn builtin_pool(self) -> &'static [&'static str] {
        match self {
            Category::Reframing => &[
                "You've written about {topic} a few times lately. Is there another way to look at it that feels a little lighter?",
                "If a close friend were struggling with {topic}, what would you tell them?",
                "What is one thing about {topic} that is going better than you expected?",
                "A year from now, how do you think you'll see {topic}?",
            ],
            Category::EmotionalExploration => &[
                "{topic} keeps coming up in your writing. What feeling sits underneath it?",
                "When you think about {topic}, where do you notice it in your body?",
                "What would it feel like to set {topic} down for a moment?",
                "What part of {topic} feels the heaviest right now?",
            ],
            Category::ActionOriented => &[
                "What is one small step you could take about {topic} today?",
                "Who could you reach out to for support with {topic}?",
                "If you had ten free minutes to improve {topic}, how would you spend them?",
                "What would make {topic} feel even slightly more manageable this week?",
            ],
        }
    }

    fn fallback_sentence(self) -> &'static str {
        match self {
            Category::Reframing => "It seems {topic} has been on your mind. Is there another way to see it?",
            Category::EmotionalExploration => {
                "It seems {topic} has been on your mind. How does it make you feel?"
            }
            Category::ActionOriented => {
                "It seems {topic} has been on your mind. What is one thing you could do about it?"
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested suggestion style; anything unrecognised means `Auto`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiMode {
    #[default]
    Auto,
    Category(Category),
}

impl AiMode {
    pub fn parse(value: &str) -> Self {
        Category::parse(value).map_or(AiMode::Auto, AiMode::Category)
    }
}

/// Upper-cases the first letter of each whitespace-separated word and
/// lower-cases the rest.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn fill(template: &str, topic: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, &title_case(topic))
}

/// Template pools per category, built-in unless overridden by configuration
#[derive(Debug, Clone)]
pub struct TemplateBook {
    reframing: Vec<String>,
    emotional_exploration: Vec<String>,
    action_oriented: Vec<String>,
}

impl Default for TemplateBook {
    fn default() -> Self {
        let owned = |c: Category| c.builtin_pool().iter().map(|s| s.to_string()).collect();
        Self {
            reframing: owned(Category::Reframing),
            emotional_exploration: owned(Category::EmotionalExploration),
            action_oriented: owned(Category::ActionOriented),
        }
    }
}

impl TemplateBook {
    pub fn from_config(config: &SuggestionsConfig) -> Self {
        let mut book = Self::default();
        if let Some(pool) = &config.reframing {
            book.reframing = pool.clone();
        }
        if let Some(pool) = &config.emotional_exploration {
            book.emotional_exploration = pool.clone();
        }
        if let Some(pool) = &config.action_oriented {
            book.action_oriented = pool.clone();
        }
        book
    }

    pub fn pool(&self, category: Category) -> &[String] {
        match category {
            Category::Reframing => &self.reframing,
            Category::EmotionalExploration => &self.emotional_exploration,
            Category::ActionOriented => &self.action_oriented,
        }
    }

    pub fn fallback(&self, category: Category) -> &'static str {
        category.fallback_sentence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modes() {
        assert_eq!(AiMode::parse("reframing"), AiMode::Category(Category::Reframing));
        assert_eq!(
            AiMode::parse("action_oriented"),
            AiMode::Category(Category::ActionOriented)
        );
        assert_eq!(AiMode::parse("auto"), AiMode::Auto);
        assert_eq!(AiMode::parse("poetry"), AiMode::Auto);
        assert_eq!(AiMode::parse(""), AiMode::Auto);
    }

    #[test]
    fn title_cases_each_word() {
        assert_eq!(title_case("project"), "Project");
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("mcDONALD's  plan"), "Mcdonald's Plan");
    }

    #[test]
    fn fills_topic_placeholder() {
        assert_eq!(
            fill("What about {topic}? {topic}!", "work"),
            "What about Work? Work!"
        );
    }

    #[test]
    fn every_builtin_template_takes_the_topic() {
        let book = TemplateBook::default();
        for category in Category::ALL {
            assert!(!book.pool(category).is_empty());
            assert!(book.pool(category).iter().all(|t| t.contains(TOPIC_PLACEHOLDER)));
            assert!(book.fallback(category).contains(TOPIC_PLACEHOLDER));
        }
    }

    #[test]
    fn config_overrides_replace_pools() {
        let config = SuggestionsConfig {
            reframing: Some(vec!["Why {topic}?".into()]),
            action_oriented: Some(vec![]),
            ..SuggestionsConfig::default()
        };
        let book = TemplateBook::from_config(&config);
        assert_eq!(book.pool(Category::Reframing), ["Why {topic}?".to_string()]);
        assert!(book.pool(Category::ActionOriented).is_empty());
        assert_eq!(book.pool(Category::EmotionalExploration).len(), 4);
    }
}
