//! Top-level folio configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, EmbeddingConfig, KnowledgeConfig, MatcherConfig, ObservabilityConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`FOLIO_*`)
/// 3. Config file (`--config <path>`, else `folio.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FolioConfig {
    pub knowledge: KnowledgeConfig,
    pub embedding: EmbeddingConfig,
    pub matcher: MatcherConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub knowledge_path: Option<String>,
    pub provider: Option<String>,
    pub threshold: Option<f32>,
    pub log_level: Option<String>,
}

impl FolioConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist. Without one, `folio.toml` in the
    /// working directory is used when present.
    pub fn load(
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let implicit = Path::new(defaults::DEFAULT_CONFIG_FILENAME);
                if implicit.exists() {
                    Self::from_file(implicit)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.matcher.threshold;
        if !(-1.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ValidationFailed {
                field: "matcher.threshold".to_string(),
                message: format!("must be between -1.0 and 1.0, got {threshold}"),
            });
        }
        if self.matcher.keyword_max_tokens == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "matcher.keyword_max_tokens".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.embedding.dimensions == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.dimensions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        match self.embedding.provider.as_str() {
            "tfidf" | "ollama" | "onnx" => {}
            other => {
                return Err(ConfigError::ValidationFailed {
                    field: "embedding.provider".to_string(),
                    message: format!("unknown provider {other:?}; expected tfidf, ollama or onnx"),
                });
            }
        }
        if self.knowledge.path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "knowledge.path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Apply `FOLIO_*` overrides read through `lookup`.
    ///
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("FOLIO_KNOWLEDGE_PATH") {
            self.knowledge.path = val;
        }
        if let Some(val) = lookup("FOLIO_EMBEDDING_PROVIDER") {
            self.embedding.provider = val;
        }
        if let Some(val) = lookup("FOLIO_EMBEDDING_MODEL") {
            self.embedding.model = val;
        }
        if let Some(val) = lookup("FOLIO_EMBEDDING_BASE_URL") {
            self.embedding.base_url = val;
        }
        if let Some(val) = lookup("FOLIO_EMBEDDING_DIMENSIONS") {
            if let Ok(v) = val.parse::<usize>() {
                self.embedding.dimensions = v;
            }
        }
        if let Some(val) = lookup("FOLIO_MATCH_THRESHOLD") {
            if let Ok(v) = val.parse::<f32>() {
                self.matcher.threshold = v;
            }
        }
        if let Some(val) = lookup("FOLIO_RESPONSE_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                self.matcher.response_seed = Some(v);
            }
        }
        if let Some(val) = lookup("FOLIO_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }

    /// Apply CLI flag overrides (highest priority).
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref path) = cli.knowledge_path {
            self.knowledge.path = path.clone();
        }
        if let Some(ref provider) = cli.provider {
            self.embedding.provider = provider.clone();
        }
        if let Some(threshold) = cli.threshold {
            self.matcher.threshold = threshold;
        }
        if let Some(ref level) = cli.log_level {
            self.observability.log_level = level.clone();
        }
    }
}
