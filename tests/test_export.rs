use recipe_generator::{recipe_filename, save_recipe, to_plain_text, Recipe};

fn limone() -> Recipe {
    Recipe {
        title: "Pasta al Limone!".to_string(),
        description: "Spaghetti in a creamy lemon sauce.".to_string(),
        prep_time: "10 minutes".to_string(),
        cook_time: "12 minutes".to_string(),
        ingredients: vec![
            "200g spaghetti".to_string(),
            "1 lemon, zested and juiced".to_string(),
            "50g parmesan".to_string(),
        ],
        instructions: vec![
            "Cook the spaghetti until al dente.".to_string(),
            "Whisk lemon and parmesan with pasta water.".to_string(),
            "Toss everything together.".to_string(),
        ],
    }
}

#[tokio::test]
async fn test_save_recipe_writes_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    let recipe = limone();

    let path = save_recipe(&recipe, dir.path()).await.unwrap();

    assert_eq!(path, dir.path().join("pasta_al_limone__recipe.txt"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, to_plain_text(&recipe));
    assert!(written.starts_with("Pasta al Limone!\n\nSpaghetti in a creamy lemon sauce.\n\n"));
    assert!(written.contains("Ingredients:\n• 200g spaghetti\n• 1 lemon, zested and juiced\n"));
    assert!(written.ends_with("3. Toss everything together."));
}

#[tokio::test]
async fn test_save_recipe_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("recipes").join("italian");

    let path = save_recipe(&limone(), &nested).await.unwrap();
    assert!(path.starts_with(&nested));
    assert!(path.exists());
}

#[tokio::test]
async fn test_saving_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let recipe = limone();

    let first = save_recipe(&recipe, dir.path()).await.unwrap();
    let first_bytes = std::fs::read(&first).unwrap();
    let second = save_recipe(&recipe, dir.path()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first_bytes, std::fs::read(&second).unwrap());
    assert_eq!(first_bytes, recipe.to_string().into_bytes());
}

#[test]
fn test_filename_for_plain_title() {
    let mut recipe = limone();
    recipe.title = "Chicken Tikka Masala".to_string();
    assert_eq!(recipe_filename(&recipe), "chicken_tikka_masala_recipe.txt");
}
