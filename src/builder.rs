use std::time::Duration;

use crate::config::{load_config, GeneratorConfig};
use crate::extract::ExtractionStrategy;
use crate::generator::RecipeGenerator;
use crate::RecipeError;

/// Builder for configuring a [`RecipeGenerator`]
///
/// Settings given here win over `config.toml` and `RECIPE_GENERATOR__*`
/// environment variables.
#[derive(Debug, Default)]
pub struct RecipeGeneratorBuilder {
    config: Option<GeneratorConfig>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    strategy: Option<ExtractionStrategy>,
}

impl RecipeGeneratorBuilder {
    /// Start from an explicit configuration instead of loading one
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the API key for the generation endpoint
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    ///
    /// # Example
    /// ```
    /// use recipe_generator::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder().api_key("your-api-key");
    /// ```
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name
    ///
    /// # Example
    /// ```
    /// use recipe_generator::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder().model("gemini-2.5-flash");
    /// ```
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Point the client at a different host (proxies, tests)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_generator::RecipeGenerator;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeGenerator::builder().timeout(Duration::from_secs(30));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Choose how JSON is located in the model reply
    pub fn strategy(mut self, strategy: ExtractionStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Merge explicit settings over the base configuration
    fn resolve(self) -> Result<GeneratorConfig, RecipeError> {
        let mut config = match self.config {
            Some(config) => config,
            None => load_config()?,
        };

        if let Some(api_key) = self.api_key {
            config.provider.api_key = Some(api_key);
        }
        if let Some(model) = self.model {
            config.provider.model = model;
        }
        if let Some(base_url) = self.base_url {
            config.provider.base_url = Some(base_url);
        }
        if let Some(temperature) = self.temperature {
            config.provider.temperature = Some(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            config.provider.max_tokens = Some(max_tokens);
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout.as_secs().max(1);
        }
        if let Some(strategy) = self.strategy {
            config.extraction = strategy;
        }

        Ok(config)
    }

    /// Build the generator
    ///
    /// # Errors
    /// Returns `RecipeError` if:
    /// - The configuration cannot be loaded
    /// - No API key is available
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<RecipeGenerator, RecipeError> {
        let config = self.resolve()?;
        RecipeGenerator::from_config(&config)
    }
}
