use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Untitled Recipe";
pub const DEFAULT_SERVINGS: &str = "4";

/// Structured recipe extracted from free-form text.
///
/// Every field has a usable default, so a record parsed from garbage is
/// still safe to feed into a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeRecord {
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub servings: String,
    pub prep_time_min: String,
    pub cook_time_min: String,
    pub rest_time_min: String,
    pub total_time_min: String,
    pub temperature: String,
    /// Calories with any "per serving" phrase removed
    pub calories: String,
    pub season: String,
    pub website: String,
    pub ingredients: Vec<String>,
    /// Step texts without their numbering
    pub instructions: Vec<String>,
    pub equipment: String,
    pub nutrition: String,
}

impl Default for RecipeRecord {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
            difficulty: String::new(),
            servings: DEFAULT_SERVINGS.to_string(),
            prep_time_min: String::new(),
            cook_time_min: String::new(),
            rest_time_min: String::new(),
            total_time_min: String::new(),
            temperature: String::new(),
            calories: String::new(),
            season: String::new(),
            website: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            equipment: String::new(),
            nutrition: String::new(),
        }
    }
}

impl RecipeRecord {
    /// Total duration if known, otherwise the cooking time.
    pub fn display_time(&self) -> &str {
        if self.total_time_min.is_empty() {
            &self.cook_time_min
        } else {
            &self.total_time_min
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = RecipeRecord::default();
        assert_eq!(record.title, "Untitled Recipe");
        assert_eq!(record.servings, "4");
        assert!(record.ingredients.is_empty());
        assert!(record.instructions.is_empty());
        assert!(record.calories.is_empty());
    }

    #[test]
    fn test_display_time_prefers_total() {
        let mut record = RecipeRecord {
            cook_time_min: "30".to_string(),
            ..Default::default()
        };
        assert_eq!(record.display_time(), "30");

        record.total_time_min = "50".to_string();
        assert_eq!(record.display_time(), "50");
    }

    #[test]
    fn test_deserialize_partial_json_uses_defaults() {
        let record: RecipeRecord = serde_json::from_str(r#"{"title": "Soup"}"#).unwrap();
        assert_eq!(record.title, "Soup");
        assert_eq!(record.servings, "4");
    }
}
