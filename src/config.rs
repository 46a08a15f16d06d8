use serde::{Deserialize, Serialize};

/// Main configuration structure loaded from thought_loops.toml and environment variables
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub embedding: EmbeddingConfig,
    pub cloud: CloudConfig,
    pub suggestions: SuggestionsConfig,
    pub server: ServerConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Tunables for the loop detector and the feature redactor
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub loop_threshold: f64,
    pub min_occurrences: usize,
    pub max_keywords: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            loop_threshold: crate::analysis::detector::LOOP_THRESHOLD,
            min_occurrences: crate::analysis::detector::MIN_OCCURRENCES,
            max_keywords: crate::analysis::redact::MAX_KEYWORDS,
        }
    }
}

/// Embedding provider selection for the constellation path
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// `openai`, `hash`, or `auto`
    pub provider: String,
    pub model: String,
    pub dimensions: Option<usize>,
    pub timeout_ms: u64,
    pub strict: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "auto".to_string(),
            model: "text-embedding-3-small".to_string(),
            dimensions: None,
            timeout_ms: 20_000,
            strict: false,
        }
    }
}

/// Remote generative service settings; the credential lives in `RuntimeConfig`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CloudConfig {
    pub model: String,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_ms: 15_000,
        }
    }
}

/// Local suggestion sources. Template overrides replace the built-in pool of a category.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SuggestionsConfig {
    pub knowledge_base: bool,
    pub reframing: Option<Vec<String>>,
    pub emotional_exploration: Option<Vec<String>>,
    pub action_oriented: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: std::net::SocketAddr,
    pub request_timeout_ms: u64,
    pub cors_allow_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: std::net::SocketAddr::from(([127, 0, 0, 1], 5001)),
            request_timeout_ms: 30_000,
            cors_allow_any: true,
        }
    }
}

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "thought_loops=info";

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub rng_seed: Option<u64>,
}

/// Keys copied from templates or left unset in CI count as absent
pub fn is_placeholder(value: &str) -> bool {
    let t = value.trim();
    t.is_empty()
        || t.contains("${")
        || t.eq_ignore_ascii_case("your-api-key-here")
        || t.eq_ignore_ascii_case("changeme")
}

fn env_key(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|k| !is_placeholder(k))
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        Self {
            gemini_api_key: env_key("GEMINI_API_KEY"),
            openai_api_key: env_key("OPENAI_API_KEY"),
            rng_seed: env_parse("TL_RNG_SEED"),
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables.
    /// Uses THOUGHT_LOOPS_CONFIG or defaults to "thought_loops.toml".
    pub fn load() -> anyhow::Result<Self> {
        Self::load_env_file();

        let config_path = std::env::var("THOUGHT_LOOPS_CONFIG")
            .unwrap_or_else(|_| "thought_loops.toml".to_string());

        let mut config: Config = match std::fs::read_to_string(&config_path) {
            Ok(content) => Self::from_toml_str(&content)?,
            Err(_) => {
                tracing::warn!("Config file {} not found, using defaults", config_path);
                Self::default()
            }
        };

        config.apply_env_overrides();
        config.runtime = RuntimeConfig::load_from_env();
        config.validate()?;

        if config.runtime.gemini_api_key.is_none() {
            tracing::info!("GEMINI_API_KEY not set; cloud suggestions disabled");
        }

        Ok(config)
    }

    /// Read `TL_ENV_FILE`, or `.env` from the working directory, into the
    /// process environment. Existing variables win. Safe to call repeatedly, so
    /// the binary calls it before installing the log filter.
    pub fn load_env_file() {
        Self::load_env_file_at(std::env::var("TL_ENV_FILE").ok().as_deref());
    }

    fn load_env_file_at(path: Option<&str>) {
        match path {
            Some(path) => {
                let _ = dotenvy::from_path(path);
            }
            None => {
                let _ = dotenvy::dotenv();
            }
        }
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(provider) = std::env::var("TL_EMBED_PROVIDER") {
            self.embedding.provider = provider;
        }
        if let Some(dim) = env_parse::<usize>("TL_EMBED_DIM") {
            self.embedding.dimensions = Some(dim);
        }
        if let Some(strict) = env_flag("TL_EMBED_STRICT") {
            self.embedding.strict = strict;
        }
        if let Ok(model) = std::env::var("TL_CLOUD_MODEL")
            && !model.trim().is_empty()
        {
            self.cloud.model = model;
        }
        if let Some(timeout) = env_parse::<u64>("TL_CLOUD_TIMEOUT_MS") {
            self.cloud.timeout_ms = timeout;
        }
        if let Some(kb) = env_flag("TL_KNOWLEDGE_BASE") {
            self.suggestions.knowledge_base = kb;
        }
        if let Some(bind) = env_parse::<std::net::SocketAddr>("TL_HTTP_BIND") {
            self.server.bind = bind;
        }
        if let Some(timeout) = env_parse::<u64>("TL_REQUEST_TIMEOUT_MS") {
            self.server.request_timeout_ms = timeout;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.analysis.loop_threshold.is_nan() || self.analysis.loop_threshold >= 0.0 {
            anyhow::bail!(
                "analysis.loop_threshold must be negative, got {}",
                self.analysis.loop_threshold
            );
        }
        if self.analysis.min_occurrences == 0 {
            anyhow::bail!("analysis.min_occurrences must be at least 1");
        }
        if self.analysis.max_keywords == 0 {
            anyhow::bail!("analysis.max_keywords must be at least 1");
        }
        if self.cloud.timeout_ms == 0 || self.embedding.timeout_ms == 0 {
            anyhow::bail!("cloud and embedding timeouts must be > 0");
        }
        if self.server.request_timeout_ms == 0 {
            anyhow::bail!("server.request_timeout_ms must be > 0");
        }
        match self.embedding.provider.as_str() {
            "openai" | "hash" | "auto" => {}
            other => anyhow::bail!("Unknown embedding provider '{}'", other),
        }
        Ok(())
    }

    /// True when the remote generative path may ever be attempted
    pub fn cloud_configured(&self) -> bool {
        self.runtime.gemini_api_key.is_some()
    }
}
