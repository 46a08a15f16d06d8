use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clients::traits::{CloudError, GenerativeService};
use crate::config::CloudConfig;

/// Gemini `generateContent` over HTTPS.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout_ms: u64,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: String, config: &CloudConfig) -> Result<Self, CloudError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| CloudError::Http(e.to_string()))?;
        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_ms: config.timeout_ms,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn map_send_error(&self, err: reqwest::Error) -> CloudError {
        if err.is_timeout() {
            CloudError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            CloudError::Http(err.to_string())
        }
    }
}

/// First candidate's first text part, trimmed. Blank text counts as no answer.
fn extract_text(body: &str) -> Result<String, CloudError> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|e| CloudError::Parse(e.to_string()))?;
    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or(CloudError::EmptyResponse)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CloudError::EmptyResponse);
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl GenerativeService for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, CloudError> {
        if self.api_key.is_empty() {
            return Err(CloudError::MissingCredential);
        }
        debug!(model = %self.model, prompt_chars = prompt.len(), "calling Gemini");

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;
        if !status.is_success() {
            return Err(CloudError::Status {
                status: status.as_u16(),
                body: text.chars().take(512).collect(),
            });
        }
        extract_text(&text)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_includes_model() {
        let config = CloudConfig {
            base_url: "https://example.test/".into(),
            ..CloudConfig::default()
        };
        let client = GeminiClient::new("key".into(), &config).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn extracts_first_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"  What would help?\n"}]}}]}"#;
        assert_eq!(extract_text(body).unwrap(), "What would help?");
    }

    #[test]
    fn blank_or_missing_text_is_empty_response() {
        let blank = r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#;
        assert!(matches!(extract_text(blank), Err(CloudError::EmptyResponse)));
        assert!(matches!(
            extract_text(r#"{"candidates":[]}"#),
            Err(CloudError::EmptyResponse)
        ));
        assert!(matches!(extract_text("not json"), Err(CloudError::Parse(_))));
    }

    #[tokio::test]
    async fn empty_key_never_calls_out() {
        let client = GeminiClient::new(String::new(), &CloudConfig::default()).unwrap();
        assert!(matches!(
            client.generate("hi").await,
            Err(CloudError::MissingCredential)
        ));
    }
}
