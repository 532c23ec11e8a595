//! Basic usage: one random recipe and one searched recipe sharing a generator
//!
//! Requires GOOGLE_API_KEY (or a config.toml with `[provider] api_key`).

use std::sync::Arc;
use std::time::Duration;

use recipe_generator::{
    Cuisine, Generation, MealType, RecipeGenerator, RecipeRequest, RecipeSession,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let generator = Arc::new(
        RecipeGenerator::builder()
            .timeout(Duration::from_secs(30))
            .build()?,
    );

    // The two flows are independent sessions over the same client
    let random = RecipeSession::new(generator.clone());
    let search = RecipeSession::new(generator);

    let random_request = RecipeRequest::random(MealType::Dinner, Cuisine::Italian);
    let search_request = RecipeRequest::search("Shakshuka")?;

    let (random_result, search_result) = tokio::join!(
        random.generate(&random_request),
        search.generate(&search_request)
    );

    for (label, result) in [("Random", random_result), ("Search", search_result)] {
        println!("=== {} ===", label);
        match result {
            Ok(Generation::Fresh(recipe)) => println!("{}\n", recipe),
            Ok(Generation::Superseded) => println!("(superseded)\n"),
            Err(e) => println!("Failed: {}\n", e),
        }
    }

    Ok(())
}
