mod google;

pub use google::GoogleProvider;

use async_trait::async_trait;

use crate::RecipeError;

/// A text generation endpoint that turns a prompt into a raw reply
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Send the prompt and return the model's reply text unchanged.
    ///
    /// One attempt only; failures map to [`RecipeError::GenerationFailed`].
    async fn generate(&self, prompt: &str) -> Result<String, RecipeError>;
}
