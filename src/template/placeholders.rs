use std::collections::HashMap;

use html_escape::encode_quoted_attribute;

use super::lists::{render_list, ListContext};
use crate::image::ImageRef;
use crate::model::RecipeRecord;

/// Every key a template author may use in `{{KEY}}` or `[KEY]` form.
pub const SUPPORTED_KEYS: &[&str] = &[
    "TITLE",
    "DESCRIPTION",
    "COOK_TIME",
    "TIME",
    "PREP_TIME",
    "PREPARATION_TIME",
    "REST_TIME",
    "TOTAL_DURATION",
    "TOTAL_TIME",
    "SERVINGS",
    "DIFFICULTY",
    "CALORIES",
    "RATING",
    "WEBSITE",
    "INGREDIENTS",
    "INSTRUCTIONS",
    "DIRECTIONS",
    "IMAGE",
    "IMAGE_URL",
    "LOGO",
    "LOGO_URL",
    "NOTES",
];

/// Keys every card template is expected to contain.
pub const REQUIRED_KEYS: &[&str] = &["TITLE", "DESCRIPTION", "INGREDIENTS", "INSTRUCTIONS"];

const DEFAULT_RATING: &str = "5";

/// Resolved value for each supported placeholder key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMap {
    values: HashMap<&'static str, String>,
}

impl PlaceholderMap {
    pub fn new(
        record: &RecipeRecord,
        image: Option<&ImageRef>,
        logo: Option<&ImageRef>,
        context: ListContext,
    ) -> Self {
        let text = |value: &str| encode_quoted_attribute(value).into_owned();
        let image = image.map(ImageRef::to_string).unwrap_or_default();
        let logo = logo.map(ImageRef::to_string).unwrap_or_default();

        let ingredients = render_list(
            &record.ingredients,
            "ingredients-list",
            context.ingredients_in_list,
        );
        let instructions = render_list(
            &record.instructions,
            "instructions-list",
            context.instructions_in_list,
        );

        let values = HashMap::from([
            ("TITLE", text(&record.title)),
            ("DESCRIPTION", text(&record.description)),
            ("COOK_TIME", text(record.display_time())),
            ("TIME", text(record.display_time())),
            ("PREP_TIME", text(&record.prep_time_min)),
            ("PREPARATION_TIME", text(&record.prep_time_min)),
            ("REST_TIME", text(&record.rest_time_min)),
            ("TOTAL_DURATION", text(&record.total_time_min)),
            ("TOTAL_TIME", text(&record.total_time_min)),
            ("SERVINGS", text(&record.servings)),
            ("DIFFICULTY", text(&record.difficulty)),
            ("CALORIES", text(&record.calories)),
            ("RATING", DEFAULT_RATING.to_string()),
            ("WEBSITE", text(&record.website)),
            ("INGREDIENTS", ingredients),
            ("INSTRUCTIONS", instructions.clone()),
            ("DIRECTIONS", instructions),
            ("IMAGE", image.clone()),
            ("IMAGE_URL", image),
            ("LOGO", logo.clone()),
            ("LOGO_URL", logo),
            ("NOTES", text(&record.description)),
        ]);

        Self { values }
    }

    /// Look up a key case-insensitively
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key.to_ascii_uppercase().as_str())
            .map(String::as_str)
    }

    /// Value for `key`, or `""` when the key is unknown
    pub fn value_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }
}
