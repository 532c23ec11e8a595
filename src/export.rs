use log::info;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::model::Recipe;
use crate::RecipeError;

/// Render a recipe in the plain-text layout used for copying and saving.
///
/// The output has no trailing newline and is identical for equal recipes.
pub fn to_plain_text(recipe: &Recipe) -> String {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| format!("• {}", ingredient))
        .collect::<Vec<_>>()
        .join("\n");

    let instructions = recipe
        .instructions
        .iter()
        .enumerate()
        .map(|(idx, step)| format!("{}. {}", idx + 1, step))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n{}\n\nPrep Time: {}\nCook Time: {}\n\nIngredients:\n{}\n\nInstructions:\n{}",
        recipe.title, recipe.description, recipe.prep_time, recipe.cook_time, ingredients, instructions
    )
}

/// Longest slug kept in a file name, well under common 255-byte name limits
const MAX_SLUG_LEN: usize = 100;

/// File name for a saved recipe: the title lower-cased, with one `_` per
/// UTF-16 unit of every non-alphanumeric character, cut to
/// [`MAX_SLUG_LEN`] and suffixed `_recipe.txt`.
pub fn recipe_filename(recipe: &Recipe) -> String {
    let slug: String = recipe
        .title
        .chars()
        .flat_map(|c| {
            if c.is_ascii_alphanumeric() {
                std::iter::repeat(c.to_ascii_lowercase()).take(1)
            } else {
                std::iter::repeat('_').take(c.len_utf16())
            }
        })
        .take(MAX_SLUG_LEN)
        .collect();

    format!("{}_recipe.txt", slug)
}

/// Write the plain-text recipe into `dir`, creating it if needed.
///
/// Returns the path of the written file.
pub async fn save_recipe(recipe: &Recipe, dir: impl AsRef<Path>) -> Result<PathBuf, RecipeError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).await?;

    let path = dir.join(recipe_filename(recipe));
    fs::write(&path, to_plain_text(recipe)).await?;

    info!("Saved recipe '{}' to {}", recipe.title, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recipe {
        Recipe {
            title: "Pasta al Limone!".to_string(),
            description: "Bright lemon pasta.".to_string(),
            prep_time: "10 minutes".to_string(),
            cook_time: "15 minutes".to_string(),
            ingredients: vec!["200g spaghetti".to_string(), "1 lemon".to_string()],
            instructions: vec!["Boil the pasta.".to_string(), "Toss with lemon.".to_string()],
        }
    }

    #[test]
    fn test_plain_text_layout() {
        let expected = "Pasta al Limone!\n\
\n\
Bright lemon pasta.\n\
\n\
Prep Time: 10 minutes\n\
Cook Time: 15 minutes\n\
\n\
Ingredients:\n\
• 200g spaghetti\n\
• 1 lemon\n\
\n\
Instructions:\n\
1. Boil the pasta.\n\
2. Toss with lemon.";

        assert_eq!(to_plain_text(&sample()), expected);
    }

    #[test]
    fn test_plain_text_is_stable() {
        let recipe = sample();
        assert_eq!(to_plain_text(&recipe), to_plain_text(&recipe));
        assert_eq!(recipe.to_string(), to_plain_text(&recipe));
    }

    #[test]
    fn test_filename_slug() {
        assert_eq!(recipe_filename(&sample()), "pasta_al_limone__recipe.txt");

        let mut recipe = sample();
        recipe.title = "Crème Brûlée".to_string();
        assert_eq!(recipe_filename(&recipe), "cr_me_br_l_e_recipe.txt");
    }

    #[test]
    fn test_filename_astral_characters_take_two_underscores() {
        let mut recipe = sample();
        recipe.title = "Taco 🌮 Night".to_string();
        assert_eq!(recipe_filename(&recipe), "taco____night_recipe.txt");
    }

    #[test]
    fn test_filename_slug_is_capped() {
        let mut recipe = sample();
        recipe.title = "Slow Roasted Lamb Shoulder ".repeat(20);
        let filename = recipe_filename(&recipe);

        assert_eq!(filename.len(), MAX_SLUG_LEN + "_recipe.txt".len());
        assert!(filename.starts_with("slow_roasted_lamb_shoulder_slow"));
        assert!(filename.ends_with("_recipe.txt"));
    }
}
