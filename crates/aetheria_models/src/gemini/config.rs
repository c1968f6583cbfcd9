//! Gemini client configuration.

use aetheria_error::{ConfigError, ConfigErrorKind};
use derive_getters::Getters;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, instrument};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// REST base for model endpoints.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Optional settings file read by [`GeminiConfig::load`].
pub const DEFAULT_CONFIG_FILE: &str = "aetheria.toml";

/// Variables searched for the API key, in order.
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Connection and generation settings for [`crate::GeminiClient`].
#[derive(Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key sent in the `x-goog-api-key` header
    api_key: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Base URL for model endpoints
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Output token cap
    #[builder(default)]
    max_output_tokens: Option<u32>,
    /// Whole-request timeout in seconds
    #[builder(default = "DEFAULT_TIMEOUT_SECS")]
    timeout_secs: u64,
}

// Hand-written so the key never reaches a log line.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Layered settings, everything but the key.
#[derive(Debug, Clone, Deserialize)]
struct Settings {
    #[serde(default = "default_model")]
    model: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default)]
    temperature: Option<f32>,
    #[serde(default)]
    max_output_tokens: Option<u32>,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl GeminiConfig {
    /// Creates a new builder for GeminiConfig.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Load configuration from `aetheria.toml`, `AETHERIA_*` variables and the
    /// API key from `GEMINI_API_KEY` (or `API_KEY`).
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is set or a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Like [`GeminiConfig::load`], reading settings from `path` instead.
    ///
    /// The file is optional; a missing file leaves the defaults in place.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::resolve(path.as_ref(), None)
    }

    /// Layer defaults, the settings file and the environment.
    ///
    /// `vars` stands in for the process environment when given.
    fn resolve(
        path: &Path,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key_from(|name| match &vars {
            Some(vars) => vars.get(name).cloned(),
            None => std::env::var(name).ok(),
        });

        let settings: Settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("AETHERIA")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()
            .and_then(|layered| layered.try_deserialize())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Settings(e.to_string())))?;

        let api_key = api_key.ok_or_else(|| ConfigError::new(ConfigErrorKind::MissingApiKey))?;

        debug!(
            model = %settings.model,
            base_url = %settings.base_url,
            timeout_secs = settings.timeout_secs,
            "Resolved Gemini configuration"
        );

        Ok(Self {
            api_key,
            model: settings.model,
            base_url: settings.base_url,
            temperature: settings.temperature,
            max_output_tokens: settings.max_output_tokens,
            timeout_secs: settings.timeout_secs,
        })
    }
}

/// First non-blank key, `GEMINI_API_KEY` before `API_KEY`.
fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    API_KEY_VARS
        .into_iter()
        .filter_map(lookup)
        .find(|key| !key.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_settings(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "aetheria-{}-{}.toml",
            name,
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    fn missing_file() -> std::path::PathBuf {
        std::env::temp_dir().join("aetheria-does-not-exist.toml")
    }

    fn vars(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_builder_defaults() {
        let config = GeminiConfig::builder().api_key("k").build().unwrap();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(*config.timeout_secs(), DEFAULT_TIMEOUT_SECS);
        assert!(config.temperature().is_none());
    }

    #[test]
    fn test_builder_requires_key() {
        assert!(GeminiConfig::builder().model("m").build().is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeminiConfig::builder().api_key("secret-key").build().unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_resolve_missing_file_uses_defaults() {
        let config = GeminiConfig::resolve(&missing_file(), vars(&[("GEMINI_API_KEY", "k")]))
            .unwrap();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(*config.timeout_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_resolve_reads_file() {
        let path = write_settings(
            "file",
            "model = \"gemini-2.5-pro\"\ntemperature = 0.7\nmax_output_tokens = 1024\n",
        );
        let config = GeminiConfig::resolve(&path, vars(&[("GEMINI_API_KEY", "k")])).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.model(), "gemini-2.5-pro");
        assert_eq!(*config.max_output_tokens(), Some(1024));
        assert!((config.temperature().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_environment_overrides_file() {
        let path = write_settings("env", "model = \"from-file\"\ntemperature = 0.5\n");
        let config = GeminiConfig::resolve(
            &path,
            vars(&[
                ("AETHERIA_MODEL", "gemini-2.5-pro"),
                ("AETHERIA_MAX_OUTPUT_TOKENS", "512"),
                ("API_KEY", "fallback-key"),
            ]),
        )
        .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.model(), "gemini-2.5-pro");
        assert_eq!(*config.max_output_tokens(), Some(512));
        assert!((config.temperature().unwrap() - 0.5).abs() < 1e-6);
        assert_eq!(config.api_key(), "fallback-key");
    }

    #[test]
    fn test_gemini_key_wins_over_fallback() {
        let config = GeminiConfig::resolve(
            &missing_file(),
            vars(&[("GEMINI_API_KEY", "primary"), ("API_KEY", "fallback")]),
        )
        .unwrap();
        assert_eq!(config.api_key(), "primary");
    }

    #[test]
    fn test_blank_gemini_key_falls_back() {
        let config = GeminiConfig::resolve(
            &missing_file(),
            vars(&[("GEMINI_API_KEY", "  "), ("API_KEY", "fallback")]),
        )
        .unwrap();
        assert_eq!(config.api_key(), "fallback");
    }

    #[test]
    fn test_resolve_rejects_missing_or_blank_key() {
        let err = GeminiConfig::resolve(&missing_file(), vars(&[])).unwrap_err();
        assert_eq!(err.kind(), &ConfigErrorKind::MissingApiKey);
        let err = GeminiConfig::resolve(&missing_file(), vars(&[("GEMINI_API_KEY", "  ")]))
            .unwrap_err();
        assert_eq!(err.kind(), &ConfigErrorKind::MissingApiKey);
    }

    #[test]
    fn test_resolve_rejects_malformed_file() {
        let path = write_settings("bad", "timeout_secs = \"soon\"\n");
        let result = GeminiConfig::resolve(&path, vars(&[("GEMINI_API_KEY", "k")]));
        std::fs::remove_file(&path).ok();
        let err = result.unwrap_err();
        assert!(matches!(err.kind(), ConfigErrorKind::Settings(_)));
    }
}
