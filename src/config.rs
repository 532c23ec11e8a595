use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::extract::ExtractionStrategy;

/// Main generator configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// Generation endpoint settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// How JSON is recovered from the model reply
    #[serde(default)]
    pub extraction: ExtractionStrategy,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            extraction: ExtractionStrategy::default(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for the Gemini endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Model identifier (e.g., "gemini-2.0-flash")
    #[serde(default = "default_model")]
    pub model: String,
    /// API key for authentication (can also be set via GOOGLE_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
    /// Temperature for generation; the endpoint default is used when unset
    pub temperature: Option<f32>,
    /// Maximum tokens to generate; the endpoint default is used when unset
    pub max_tokens: Option<u32>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            base_url: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

impl ProviderConfig {
    /// Resolve the API key, config first, then the GOOGLE_API_KEY environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }
}

// Default value functions
fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl GeneratorConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_GENERATOR__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_GENERATOR__PROVIDER__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`GeneratorConfig::load`] for the source priority.
pub fn load_config() -> Result<GeneratorConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_GENERATOR__PROVIDER__MODEL
        .add_source(
            Environment::with_prefix("RECIPE_GENERATOR")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
