use log::{debug, info, warn};
use std::time::Duration;

use crate::builder::RecipeGeneratorBuilder;
use crate::config::GeneratorConfig;
use crate::extract::{extract_recipe, ExtractionStrategy};
use crate::model::{Recipe, RecipeRequest};
use crate::prompt::build_prompt;
use crate::providers::{GoogleProvider, LlmProvider};
use crate::RecipeError;

/// The shared request pipeline: validate, prompt, generate, extract.
///
/// Both the random and the search flow go through this type; they only
/// differ in the [`RecipeRequest`] they pass in.
pub struct RecipeGenerator {
    provider: Box<dyn LlmProvider>,
    strategy: ExtractionStrategy,
}

impl RecipeGenerator {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        RecipeGenerator {
            provider,
            strategy: ExtractionStrategy::default(),
        }
    }

    /// Creates a new builder for configuring a generator
    ///
    /// # Example
    /// ```
    /// use recipe_generator::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder().model("gemini-2.0-flash");
    /// ```
    pub fn builder() -> RecipeGeneratorBuilder {
        RecipeGeneratorBuilder::default()
    }

    /// Build a Gemini-backed generator from configuration
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, RecipeError> {
        let provider =
            GoogleProvider::new(&config.provider, Duration::from_secs(config.timeout))?;
        Ok(Self::new(Box::new(provider)).with_strategy(config.extraction))
    }

    pub fn with_strategy(mut self, strategy: ExtractionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> ExtractionStrategy {
        self.strategy
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Run one request end to end.
    ///
    /// # Errors
    /// Returns `RecipeError` if:
    /// - The request fails validation (nothing is sent)
    /// - The endpoint call fails
    /// - No valid recipe can be recovered from the reply
    pub async fn generate(&self, request: &RecipeRequest) -> Result<Recipe, RecipeError> {
        request.validate()?;

        let prompt = build_prompt(request);
        debug!("Prompt for {}: {}", request, prompt);

        let reply = self.provider.generate(&prompt).await.map_err(|e| {
            warn!(
                "{} failed to generate a recipe for {}: {}",
                self.provider.provider_name(),
                request,
                e
            );
            e
        })?;
        debug!("Raw reply for {}: {}", request, reply);

        let recipe = extract_recipe(&reply, self.strategy).map_err(|e| {
            warn!("Could not extract a recipe for {}: {}", request, e);
            e
        })?;

        info!("Generated recipe '{}' for {}", recipe.title, request);
        Ok(recipe)
    }
}
