use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub const HASH_DEFAULT_DIMS: usize = 384;

#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
    fn dimensions(&self) -> usize;
    fn provider(&self) -> &str;
}

// OpenAI API implementation
pub struct OpenAIEmbedder {
    client: reqwest::Client,
    api_key: String,
    model: String,
    dims: usize,
}

#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<usize>,
}

#[derive(Deserialize)]
struct OpenAIResponseData {
    embedding: Vec<f32>,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    data: Vec<OpenAIResponseData>,
}

impl OpenAIEmbedder {
    pub fn new(
        api_key: String,
        model: String,
        dims: Option<usize>,
        timeout_ms: u64,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .context("Failed to build reqwest client with timeout")?;

        let dims = dims.unwrap_or(match model.as_str() {
            "text-embedding-3-large" => 3072,
            _ => 1536,
        });

        Ok(Self {
            client,
            api_key,
            model,
            dims,
        })
    }
}

#[async_trait]
impl Embedder for OpenAIEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        debug!(
            "Generating OpenAI embedding (model={}, chars={})",
            self.model,
            text.len()
        );

        let body = OpenAIRequest {
            model: &self.model,
            input: text,
            dimensions: self.model.starts_with("text-embedding-3").then_some(self.dims),
        };

        // Single attempt; failures surface as request errors
        let response = self
            .client
            .post("https://api.openai.com/v1/embeddings")
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("Failed to send request to OpenAI API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI API error {}: {}", status, error_text);
        }

        let result: OpenAIResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI response")?;
        let embedding = result
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .context("No embedding returned from OpenAI")?;
        if embedding.len() != self.dims {
            anyhow::bail!(
                "OpenAI returned {} dimensions, expected {}",
                embedding.len(),
                self.dims
            );
        }
        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn provider(&self) -> &str {
        "openai"
    }
}

/// Deterministic, local embedder (no network). Equal texts always map to
/// the same unit vector.
pub struct HashEmbedder {
    dims: usize,
}

impl HashEmbedder {
    pub fn new(dims: Option<usize>) -> Self {
        let d = dims.unwrap_or(HASH_DEFAULT_DIMS).max(1);
        Self { dims: d }
    }

    // Stable stream of pseudo-random f32 values in [-1.0, 1.0)
    fn generate(&self, text: &str) -> Vec<f32> {
        use sha2::{Digest, Sha256};
        let mut out = Vec::with_capacity(self.dims);
        let mut i: u32 = 0;
        while out.len() < self.dims {
            let mut hasher = Sha256::new();
            hasher.update(text.as_bytes());
            hasher.update(i.to_le_bytes());
            let digest = hasher.finalize();
            for chunk in digest.chunks(4) {
                if out.len() >= self.dims {
                    break;
                }
                let mut bytes = [0u8; 4];
                bytes.copy_from_slice(chunk);
                let v01 = (u32::from_le_bytes(bytes) as f32) / (u32::MAX as f32 + 1.0);
                out.push(v01 * 2.0 - 1.0);
            }
            i = i.wrapping_add(1);
        }

        let norm: f32 = out.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut out {
                *v /= norm;
            }
        }
        out
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.generate(text))
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn provider(&self) -> &str {
        "hash"
    }
}

/// Pick the embedding provider from the loaded configuration.
///
/// Selection order: an explicit `openai`/`hash` provider wins; `auto` prefers
/// OpenAI when a key is present. Without a usable provider the hash embedder
/// is used unless `embedding.strict` is set.
pub fn create_embedder(config: &Config) -> Result<Arc<dyn Embedder>> {
    let emb = &config.embedding;
    let openai_key = config.runtime.openai_api_key.clone();

    match emb.provider.as_str() {
        "openai" => {
            let Some(key) = openai_key else {
                anyhow::bail!("embedding.provider=openai but OPENAI_API_KEY is not set");
            };
            info!("Using OpenAI embeddings (model={})", emb.model);
            return Ok(Arc::new(OpenAIEmbedder::new(
                key,
                emb.model.clone(),
                emb.dimensions,
                emb.timeout_ms,
            )?));
        }
        "hash" => {}
        _ => {
            if let Some(key) = openai_key {
                info!("Using OpenAI embeddings (model={})", emb.model);
                return Ok(Arc::new(OpenAIEmbedder::new(
                    key,
                    emb.model.clone(),
                    emb.dimensions,
                    emb.timeout_ms,
                )?));
            }
            if emb.strict {
                anyhow::bail!(
                    "No embedding provider configured; set OPENAI_API_KEY or embedding.provider=hash"
                );
            }
        }
    }

    let hash = HashEmbedder::new(emb.dimensions);
    info!(
        "Using HashEmbedder (deterministic) with {} dimensions",
        hash.dimensions()
    );
    Ok(Arc::new(hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_embedder_is_deterministic() {
        let he = HashEmbedder::new(Some(128));
        let a1 = he.embed("hello world").await.unwrap();
        let a2 = he.embed("hello world").await.unwrap();
        assert_eq!(a1.len(), 128);
        assert!(a1.iter().zip(&a2).all(|(x, y)| (x - y).abs() < 1e-8));
        let norm: f32 = a1.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-4);
    }

    #[tokio::test]
    async fn hash_embedder_varies_with_input() {
        let he = HashEmbedder::new(None);
        let a = he.embed("foo").await.unwrap();
        let b = he.embed("bar").await.unwrap();
        assert_eq!(a.len(), HASH_DEFAULT_DIMS);
        assert!(a.iter().zip(&b).any(|(x, y)| (x - y).abs() > 1e-6));
    }

    #[test]
    fn auto_without_key_falls_back_to_hash() {
        let config = Config::default();
        let embedder = create_embedder(&config).unwrap();
        assert_eq!(embedder.provider(), "hash");
        assert_eq!(embedder.dimensions(), HASH_DEFAULT_DIMS);
    }

    #[test]
    fn strict_without_key_is_an_error() {
        let mut config = Config::default();
        config.embedding.strict = true;
        assert!(create_embedder(&config).is_err());
        config.embedding.provider = "openai".into();
        assert!(create_embedder(&config).is_err());
    }

    #[test]
    fn openai_selected_when_key_present() {
        let mut config = Config::default();
        config.runtime.openai_api_key = Some("sk-test".into());
        let embedder = create_embedder(&config).unwrap();
        assert_eq!(embedder.provider(), "openai");
        assert_eq!(embedder.dimensions(), 1536);
    }
}
