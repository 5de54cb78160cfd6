use std::sync::LazyLock;

use regex::Regex;

/// Blocks introduced by a `### Keyword` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Ingredients,
    Instructions,
    Equipment,
    Nutrition,
}

impl Section {
    pub fn keyword(self) -> &'static str {
        match self {
            Section::Ingredients => "ingredients",
            Section::Instructions => "instructions",
            Section::Equipment => "equipment",
            Section::Nutrition => "nutrition",
        }
    }

    fn opens_at(self, line: &str) -> bool {
        line.strip_prefix("###")
            .is_some_and(|rest| rest.to_lowercase().contains(self.keyword()))
    }
}

/// Raw text of a section, from the line after its header up to the next
/// `###` line. Returns `""` when the header never appears.
///
/// Another header naming the same section keeps the block open, so grouped
/// lists like `### Ingredients for the sauce` are merged into one block.
pub fn section(text: &str, section: Section) -> String {
    let mut in_section = false;
    let mut content = Vec::new();

    for line in text.split('\n') {
        if section.opens_at(line) {
            in_section = true;
            continue;
        }
        if in_section && line.starts_with("###") {
            break;
        }
        if in_section {
            content.push(line);
        }
    }

    content.join("\n").trim().to_string()
}

static LEADING_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*•\s*").expect("Invalid bullet regex"));
static INGREDIENT_TITLE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^Ingredient\s*Title\s*:.*$").expect("Invalid ingredient title regex")
});
static INGREDIENTS_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^Ingredients\s*:\s*").expect("Invalid ingredients label regex")
});
static INSTRUCTIONS_TITLE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^Instructions\s*Section\s*Title\s*:.*$")
        .expect("Invalid instructions title regex")
});
static INSTRUCTIONS_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^Instructions\s*:\s*").expect("Invalid instructions label regex")
});
static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("Invalid blank line regex"));
static INLINE_STEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(\d+\.\s)").expect("Invalid inline step regex"));
static STEP_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("Invalid step number regex"));
static EQUIPMENT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Equipment\s*:\s*").expect("Invalid equipment regex"));
static NUTRITION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Nutrition(?:\s*Facts)?\s*:\s*").expect("Invalid nutrition regex")
});

/// Split an Ingredients block into individual ingredients.
///
/// Lines containing `|` carry an inline note (`2 cloves garlic | minced`) and
/// are kept whole; any other line is split on commas.
pub fn clean_ingredients(block: &str) -> Vec<String> {
    let text = LEADING_BULLET.replace(block, "");
    let text = INGREDIENT_TITLE_LINE.replace_all(&text, "");
    let text = INGREDIENTS_LABEL.replace_all(&text, "");

    text.trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(|line| {
            if line.contains('|') {
                vec![line.to_string()]
            } else {
                line.split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(String::from)
                    .collect()
            }
        })
        .collect()
}

/// Split an Instructions block into step texts without their numbering.
///
/// A block written on a single line is broken up at each `N.` step marker.
pub fn clean_directions(block: &str) -> Vec<String> {
    let text = INSTRUCTIONS_TITLE_LINE.replace_all(block, "");
    let text = INSTRUCTIONS_LABEL.replace_all(&text, "");
    let mut text = BLANK_RUNS.replace_all(text.trim(), "\n").into_owned();

    if !text.contains('\n') {
        text = INLINE_STEP.replace_all(&text, "\n$1").into_owned();
    }

    let text = BLANK_RUNS.replace_all(&text, "\n");

    text.trim()
        .lines()
        .map(|line| STEP_NUMBER.replace(line.trim(), "").trim().to_string())
        .filter(|step| !step.is_empty())
        .collect()
}

/// Equipment block with its own `Equipment:` label removed.
pub fn strip_equipment_label(block: &str) -> String {
    EQUIPMENT_LABEL.replace(block, "").trim().to_string()
}

/// Nutrition block with its own `Nutrition:` / `Nutrition Facts:` label removed.
pub fn strip_nutrition_label(block: &str) -> String {
    NUTRITION_LABEL.replace(block, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_runs_to_next_header() {
        let text = "### Ingredients\n2 eggs\n1 cup milk\n### Instructions\n1. Mix.";
        assert_eq!(section(text, Section::Ingredients), "2 eggs\n1 cup milk");
        assert_eq!(section(text, Section::Instructions), "1. Mix.");
        assert_eq!(section(text, Section::Equipment), "");
    }

    #[test]
    fn test_section_header_with_decoration() {
        let text = "### 🥕 Ingredients for the sauce\n1 onion\n### Notes\nnone";
        assert_eq!(section(text, Section::Ingredients), "1 onion");
    }

    #[test]
    fn test_repeated_header_merges_groups() {
        let text = "### Ingredients\n1 onion\n### Ingredients for topping\ncheese\n### Instructions\nBake";
        assert_eq!(section(text, Section::Ingredients), "1 onion\ncheese");
    }

    #[test]
    fn test_clean_ingredients_splits_commas() {
        assert_eq!(
            clean_ingredients("2 eggs, sifted flour\n1 cup milk"),
            vec!["2 eggs", "sifted flour", "1 cup milk"]
        );
    }

    #[test]
    fn test_clean_ingredients_keeps_pipe_lines() {
        assert_eq!(
            clean_ingredients("2 cloves garlic | minced, finely\nsalt"),
            vec!["2 cloves garlic | minced, finely", "salt"]
        );
    }

    #[test]
    fn test_clean_ingredients_drops_titles_and_labels() {
        let block = "• Ingredient Title: Dough\nIngredients: 2 cups flour\n\n1 tsp salt";
        assert_eq!(clean_ingredients(block), vec!["2 cups flour", "1 tsp salt"]);
    }

    #[test]
    fn test_clean_directions_numbered_lines() {
        let block = "Instructions:\n1. Mix.\n\n\n2. Bake.";
        assert_eq!(clean_directions(block), vec!["Mix.", "Bake."]);
    }

    #[test]
    fn test_clean_directions_inline_steps() {
        let block = "1. Preheat oven. 2. Mix batter. 10. Serve warm.";
        assert_eq!(
            clean_directions(block),
            vec!["Preheat oven.", "Mix batter.", "Serve warm."]
        );
    }

    #[test]
    fn test_clean_directions_drops_section_titles() {
        let block = "Instructions Section Title: Cake\nStir well\nBake 40 minutes";
        assert_eq!(clean_directions(block), vec!["Stir well", "Bake 40 minutes"]);
    }

    #[test]
    fn test_clean_directions_unnumbered_single_line() {
        assert_eq!(
            clean_directions("Just bake it at 3.5 cm depth"),
            vec!["Just bake it at 3.5 cm depth"]
        );
    }

    #[test]
    fn test_strip_labels() {
        assert_eq!(strip_equipment_label("Equipment: oven, whisk"), "oven, whisk");
        assert_eq!(strip_nutrition_label("Nutrition Facts: 12g fat"), "12g fat");
        assert_eq!(strip_nutrition_label("nutrition:\nProtein 4g"), "Protein 4g");
        assert_eq!(strip_nutrition_label("Protein 4g"), "Protein 4g");
    }
}
