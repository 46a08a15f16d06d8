//! Response shape for the loop endpoint

use serde::Serialize;

use crate::suggest::Suggestion;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoopSuggestion {
    pub topic: String,
    pub suggestion_text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// `detectedLoop` is `null` when nothing qualified
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoopResponse {
    pub detected_loop: Option<LoopSuggestion>,
}

impl LoopResponse {
    pub fn none() -> Self {
        Self {
            detected_loop: None,
        }
    }
}

pub fn compose(suggestion: Option<Suggestion>) -> LoopResponse {
    LoopResponse {
        detected_loop: suggestion.map(|s| LoopSuggestion {
            topic: s.topic,
            suggestion_text: s.text,
            kind: s.kind,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_loop_serializes_as_null() {
        let value = serde_json::to_value(compose(None)).unwrap();
        assert_eq!(value, json!({ "detectedLoop": null }));
    }

    #[test]
    fn suggestion_fields_are_camel_cased() {
        let response = compose(Some(Suggestion {
            topic: "project".into(),
            text: "What is one small step you could take about Project today?".into(),
            kind: "action_oriented_local_prompt".into(),
        }));
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(
            value,
            json!({
                "detectedLoop": {
                    "topic": "project",
                    "suggestionText": "What is one small step you could take about Project today?",
                    "type": "action_oriented_local_prompt"
                }
            })
        );
    }
}
