use crate::model::RecipeRequest;

/// The prompt template used for every recipe request.
///
/// The template is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro. It lists the content the model must cover and the
/// exact JSON shape the reply must contain.
///
/// Contains a `{{REQUEST}}` placeholder that is replaced with the
/// request-specific sentence by [`build_prompt`].
pub const RECIPE_PROMPT: &str = include_str!("prompt.txt");

/// Field names the reply JSON must carry
pub const RECIPE_FIELDS: [&str; 6] = [
    "title",
    "description",
    "prepTime",
    "cookTime",
    "ingredients",
    "instructions",
];

fn request_sentence(request: &RecipeRequest) -> String {
    match request {
        RecipeRequest::Random { meal_type, cuisine } => format!(
            "Please provide a random {} {} recipe. Make it authentic to the cuisine and appropriate for {}.",
            cuisine, meal_type, meal_type
        ),
        RecipeRequest::Search { meal_name } => {
            format!("Please provide a complete recipe for \"{}\".", meal_name.trim())
        }
    }
}

/// Builds the full prompt for a request.
pub fn build_prompt(request: &RecipeRequest) -> String {
    RECIPE_PROMPT.replace("{{REQUEST}}", &request_sentence(request))
}
