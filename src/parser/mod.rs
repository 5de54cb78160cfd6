//! Free-text recipe parser.
//!
//! Turns loosely formatted recipe text into a [`RecipeRecord`]. Parsing is
//! total: any input, including the empty string, yields a record whose
//! missing fields carry their documented defaults.

mod fields;
mod normalize;
mod sections;

pub use fields::{extract_field, scope_of, Field, Scope};
pub use normalize::normalize_headers;
pub use sections::{
    clean_directions, clean_ingredients, section, strip_equipment_label, strip_nutrition_label,
    Section,
};

use log::debug;

use crate::model::{RecipeRecord, DEFAULT_SERVINGS, DEFAULT_TITLE};

/// Parse raw recipe text into a structured record.
pub fn parse(text: &str) -> RecipeRecord {
    let text = normalize_headers(text);

    let title = extract_field(&text, Field::Title);
    let servings = extract_field(&text, Field::Servings);

    let record = RecipeRecord {
        title: or_default(title, DEFAULT_TITLE),
        description: extract_field(&text, Field::Description),
        difficulty: extract_field(&text, Field::Difficulty),
        servings: or_default(servings, DEFAULT_SERVINGS),
        prep_time_min: extract_field(&text, Field::PrepTime),
        cook_time_min: extract_field(&text, Field::CookTime),
        rest_time_min: extract_field(&text, Field::RestTime),
        total_time_min: extract_field(&text, Field::TotalTime),
        temperature: extract_field(&text, Field::Temperature),
        calories: extract_field(&text, Field::Calories),
        season: extract_field(&text, Field::Season),
        website: extract_field(&text, Field::Website),
        ingredients: clean_ingredients(&section(&text, Section::Ingredients)),
        instructions: clean_directions(&section(&text, Section::Instructions)),
        equipment: strip_equipment_label(&section(&text, Section::Equipment)),
        nutrition: strip_nutrition_label(&section(&text, Section::Nutrition)),
    };

    debug!("Parsed recipe: {}", record.title);
    debug!("Ingredients count: {}", record.ingredients.len());
    debug!("Instructions count: {}", record.instructions.len());

    record
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
