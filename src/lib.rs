pub mod builder;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod generator;
pub mod model;
pub mod prompt;
pub mod providers;
pub mod session;

// Re-export commonly used types
pub use builder::RecipeGeneratorBuilder;
pub use config::GeneratorConfig;
pub use error::RecipeError;
pub use export::{recipe_filename, save_recipe, to_plain_text};
pub use extract::{extract_recipe, ExtractionStrategy};
pub use generator::RecipeGenerator;
pub use model::{Cuisine, MealType, Recipe, RecipeRequest};
pub use prompt::build_prompt;
pub use session::{Generation, RecipeSession};

/// Generate a random recipe for a meal type and cuisine.
///
/// Configuration is read from `config.toml` and the environment.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_generator::RecipeError> {
/// let recipe = recipe_generator::random_recipe("dinner", "Italian").await?;
/// println!("{}", recipe);
/// # Ok(())
/// # }
/// ```
pub async fn random_recipe(meal_type: &str, cuisine: &str) -> Result<Recipe, RecipeError> {
    let request = RecipeRequest::random_from(meal_type, cuisine)?;
    RecipeGenerator::builder().build()?.generate(&request).await
}

/// Generate a recipe for a named dish.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_generator::RecipeError> {
/// let recipe = recipe_generator::search_recipe("Pad Thai").await?;
/// println!("{}", recipe.title);
/// # Ok(())
/// # }
/// ```
pub async fn search_recipe(meal_name: &str) -> Result<Recipe, RecipeError> {
    let request = RecipeRequest::search(meal_name)?;
    RecipeGenerator::builder().build()?.generate(&request).await
}
