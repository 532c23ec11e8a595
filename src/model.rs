use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::RecipeError;

/// A generated recipe.
///
/// Built fresh from every successful extraction and never patched afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub description: String,
    /// Free text with the unit embedded, e.g. "15 minutes"
    pub prep_time: String,
    pub cook_time: String,
    pub ingredients: Vec<String>,
    /// Ordered cooking steps
    pub instructions: Vec<String>,
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::export::to_plain_text(self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MealType::ALL
            .into_iter()
            .find(|meal| meal.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RecipeError::Validation(format!("Unknown meal type: {}", wanted)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cuisine {
    Chinese,
    Indian,
    Italian,
    Mexican,
    Japanese,
    French,
    Thai,
    Spanish,
    American,
    British,
    Greek,
    Turkish,
    Lebanese,
    Korean,
    Vietnamese,
    Moroccan,
    Brazilian,
    German,
    Russian,
    Ethiopian,
    Jamaican,
    Caribbean,
}

impl Cuisine {
    /// All supported cuisines, in selector order
    pub const ALL: [Cuisine; 22] = [
        Cuisine::Chinese,
        Cuisine::Indian,
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::Japanese,
        Cuisine::French,
        Cuisine::Thai,
        Cuisine::Spanish,
        Cuisine::American,
        Cuisine::British,
        Cuisine::Greek,
        Cuisine::Turkish,
        Cuisine::Lebanese,
        Cuisine::Korean,
        Cuisine::Vietnamese,
        Cuisine::Moroccan,
        Cuisine::Brazilian,
        Cuisine::German,
        Cuisine::Russian,
        Cuisine::Ethiopian,
        Cuisine::Jamaican,
        Cuisine::Caribbean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Chinese => "Chinese",
            Cuisine::Indian => "Indian",
            Cuisine::Italian => "Italian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Japanese => "Japanese",
            Cuisine::French => "French",
            Cuisine::Thai => "Thai",
            Cuisine::Spanish => "Spanish",
            Cuisine::American => "American",
            Cuisine::British => "British",
            Cuisine::Greek => "Greek",
            Cuisine::Turkish => "Turkish",
            Cuisine::Lebanese => "Lebanese",
            Cuisine::Korean => "Korean",
            Cuisine::Vietnamese => "Vietnamese",
            Cuisine::Moroccan => "Moroccan",
            Cuisine::Brazilian => "Brazilian",
            Cuisine::German => "German",
            Cuisine::Russian => "Russian",
            Cuisine::Ethiopian => "Ethiopian",
            Cuisine::Jamaican => "Jamaican",
            Cuisine::Caribbean => "Caribbean",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cuisine {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Cuisine::ALL
            .into_iter()
            .find(|cuisine| cuisine.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RecipeError::Validation(format!("Unknown cuisine: {}", wanted)))
    }
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeRequest {
    /// A random dish for a meal type and cuisine
    Random { meal_type: MealType, cuisine: Cuisine },
    /// A specific dish by name
    Search { meal_name: String },
}

impl RecipeRequest {
    /// Build a random-flow request from raw selections.
    ///
    /// Both selections are required; blank or unknown values are rejected
    /// before anything is sent over the network.
    pub fn random_from(meal_type: &str, cuisine: &str) -> Result<Self, RecipeError> {
        if meal_type.trim().is_empty() || cuisine.trim().is_empty() {
            return Err(RecipeError::Validation(
                "Please select meal type and cuisine".to_string(),
            ));
        }

        Ok(RecipeRequest::Random {
            meal_type: meal_type.parse()?,
            cuisine: cuisine.parse()?,
        })
    }

    pub fn random(meal_type: MealType, cuisine: Cuisine) -> Self {
        RecipeRequest::Random { meal_type, cuisine }
    }

    /// Build a search-flow request; the dish name must not be blank
    pub fn search(meal_name: impl Into<String>) -> Result<Self, RecipeError> {
        let request = RecipeRequest::Search {
            meal_name: meal_name.into().trim().to_string(),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), RecipeError> {
        match self {
            RecipeRequest::Random { .. } => Ok(()),
            RecipeRequest::Search { meal_name } if meal_name.trim().is_empty() => Err(
                RecipeError::Validation("Please enter a meal name".to_string()),
            ),
            RecipeRequest::Search { .. } => Ok(()),
        }
    }
}

impl fmt::Display for RecipeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeRequest::Random { meal_type, cuisine } => write!(f, "{} {}", cuisine, meal_type),
            RecipeRequest::Search { meal_name } => write!(f, "\"{}\"", meal_name.trim()),
        }
    }
}
