use thiserror::Error;

/// Errors that can occur while generating a recipe
#[derive(Error, Debug)]
pub enum RecipeError {
    /// A required selection or input was missing or unknown
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The generation endpoint could not be reached or returned an unusable response
    #[error("Recipe generation failed: {0}")]
    GenerationFailed(String),

    /// The model reply contained no `{` at all
    #[error("No JSON object found in the model reply")]
    NoJsonFound,

    /// A JSON candidate was found but could not be parsed
    #[error("Model reply contained invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The JSON parsed but does not describe a complete recipe
    #[error("Malformed recipe: {0}")]
    MalformedRecipe(String),

    /// No API key in configuration or environment
    #[error("GOOGLE_API_KEY not found in config or environment")]
    MissingApiKey,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to write an exported recipe
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for RecipeError {
    fn from(err: reqwest::Error) -> Self {
        RecipeError::GenerationFailed(err.to_string())
    }
}
