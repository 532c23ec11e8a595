//! Recovers a [`Recipe`] from free-form model output.
//!
//! The model is asked for JSON but frequently wraps it in prose or markdown
//! fences, so the reply is scanned for a `{...}` span before parsing.

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::model::Recipe;
use crate::RecipeError;

/// How a JSON candidate is located inside the reply text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStrategy {
    /// First `{` to last `}`, without looking at nesting
    Greedy,
    /// Every top-level balanced object, tried in order
    #[default]
    Balanced,
}

impl std::str::FromStr for ExtractionStrategy {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "greedy" => Ok(ExtractionStrategy::Greedy),
            "balanced" => Ok(ExtractionStrategy::Balanced),
            other => Err(RecipeError::Validation(format!(
                "Unknown extraction strategy: {}",
                other
            ))),
        }
    }
}

/// Extract and validate a recipe from raw reply text.
///
/// # Errors
/// - [`RecipeError::NoJsonFound`] if the text has no `{`
/// - [`RecipeError::InvalidJson`] if the candidate does not parse
/// - [`RecipeError::MalformedRecipe`] if it parses but lacks required fields
pub fn extract_recipe(text: &str, strategy: ExtractionStrategy) -> Result<Recipe, RecipeError> {
    let candidates = match strategy {
        ExtractionStrategy::Greedy => greedy_span(text).into_iter().collect::<Vec<_>>(),
        ExtractionStrategy::Balanced => balanced_spans(text),
    };

    debug!(
        "Found {} JSON candidate(s) using {:?} extraction",
        candidates.len(),
        strategy
    );

    let mut first_error = None;
    for candidate in candidates {
        match parse_candidate(candidate) {
            Ok(recipe) => return Ok(recipe),
            Err(e) => {
                debug!("Rejected JSON candidate: {}", e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    Err(first_error.unwrap_or(RecipeError::NoJsonFound))
}

/// First `{` through the last `}` after it. An unterminated object runs to
/// the end of the text so the parser can report what is missing.
fn greedy_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    match text.rfind('}') {
        Some(end) if end > start => Some(&text[start..=end]),
        _ => Some(&text[start..]),
    }
}

/// Every top-level balanced `{...}` span, skipping braces inside string
/// literals. A trailing unterminated object is returned as-is.
fn balanced_spans(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if depth > 0 && in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    spans.push(&text[start..=i]);
                }
            }
            _ => {}
        }
    }

    if depth > 0 {
        spans.push(&text[start..]);
    }

    spans
}

fn parse_candidate(candidate: &str) -> Result<Recipe, RecipeError> {
    let value: Value = serde_json::from_str(candidate).map_err(RecipeError::InvalidJson)?;
    let object = value
        .as_object()
        .ok_or_else(|| RecipeError::MalformedRecipe("reply JSON is not an object".to_string()))?;

    let title = required_text(object, "title")?;
    if title.trim().is_empty() {
        return Err(RecipeError::MalformedRecipe("`title` is empty".to_string()));
    }

    Ok(Recipe {
        title,
        description: required_text(object, "description")?,
        prep_time: required_text(object, "prepTime")?,
        cook_time: required_text(object, "cookTime")?,
        ingredients: required_lines(object, "ingredients")?,
        instructions: required_lines(object, "instructions")?,
    })
}

fn required_text(object: &Map<String, Value>, field: &str) -> Result<String, RecipeError> {
    match object.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(RecipeError::MalformedRecipe(format!(
            "`{}` must be a string",
            field
        ))),
        None => Err(RecipeError::MalformedRecipe(format!(
            "missing field `{}`",
            field
        ))),
    }
}

fn required_lines(object: &Map<String, Value>, field: &str) -> Result<Vec<String>, RecipeError> {
    let items = match object.get(field) {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(RecipeError::MalformedRecipe(format!(
                "`{}` must be a list",
                field
            )))
        }
        None => {
            return Err(RecipeError::MalformedRecipe(format!(
                "missing field `{}`",
                field
            )))
        }
    };

    if items.is_empty() {
        return Err(RecipeError::MalformedRecipe(format!("`{}` is empty", field)));
    }

    items
        .iter()
        .map(|item| {
            item.as_str().map(String::from).ok_or_else(|| {
                RecipeError::MalformedRecipe(format!("`{}` must only contain text", field))
            })
        })
        .collect()
}
