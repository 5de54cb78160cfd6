use std::sync::LazyLock;

use regex::Regex;

/// Scalar recipe fields that are anchored on a `Label:` in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Difficulty,
    Servings,
    PrepTime,
    CookTime,
    RestTime,
    TotalTime,
    Temperature,
    Calories,
    Season,
    Website,
}

/// How far a field value may run after its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Up to the end of the label's own line.
    SameLine,
    /// Across lines, up to the next line that opens with a known label or a
    /// `###` section header.
    UntilNextLabel,
}

struct FieldRule {
    field: Field,
    /// Label patterns, tried in order; the first one present wins.
    labels: &'static [&'static str],
    scope: Scope,
}

const MINUTES: &str = r"\s*(?:\(\s*Minutes\s*\))?";

const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Title,
        labels: &[r"Recipe\s*Title", r"Title"],
        scope: Scope::SameLine,
    },
    FieldRule {
        field: Field::Description,
        labels: &[r"Recipe\s*Description", r"Description"],
        scope: Scope::UntilNextLabel,
    },
    FieldRule {
        field: Field::Difficulty,
        labels: &[r"Difficulty\s*Level", r"Level"],
        scope: Scope::UntilNextLabel,
    },
    FieldRule {
        field: Field::Servings,
        labels: &[r"No\.\s*of\s*Servings"],
        scope: Scope::UntilNextLabel,
    },
    FieldRule {
        field: Field::PrepTime,
        labels: &[r"Preparation\s*Time{MINUTES}"],
        scope: Scope::SameLine,
    },
    FieldRule {
        field: Field::CookTime,
        labels: &[r"Cooking\s*Time{MINUTES}"],
        scope: Scope::UntilNextLabel,
    },
    FieldRule {
        field: Field::RestTime,
        labels: &[r"Rest\s*Time{MINUTES}"],
        scope: Scope::UntilNextLabel,
    },
    FieldRule {
        field: Field::TotalTime,
        labels: &[r"Total\s*Duration{MINUTES}"],
        scope: Scope::SameLine,
    },
    FieldRule {
        field: Field::Temperature,
        labels: &[r"Cooking\s*Temp(?:erature)?\s*(?:\([^)\n]*\))?"],
        scope: Scope::UntilNextLabel,
    },
    FieldRule {
        field: Field::Calories,
        labels: &[r"Calories"],
        scope: Scope::UntilNextLabel,
    },
    FieldRule {
        field: Field::Season,
        labels: &[r"Best\s*Season"],
        scope: Scope::UntilNextLabel,
    },
    FieldRule {
        field: Field::Website,
        labels: &[r"Website"],
        scope: Scope::UntilNextLabel,
    },
];

/// A line opening with one of these ends a multi-line value.
static BOUNDARY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:Recipe |Difficulty|No\.|Preparation\s+Time|Cooking|Rest|Total|Cooking Temp|Calories|Best Season|Website|###)",
    )
    .expect("Invalid label boundary regex")
});

static PER_SERVING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bper\s*serving\b").expect("Invalid per-serving regex")
});

struct CompiledRule {
    field: Field,
    labels: Vec<Regex>,
    scope: Scope,
}

static COMPILED_RULES: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    FIELD_RULES
        .iter()
        .map(|rule| CompiledRule {
            field: rule.field,
            labels: rule
                .labels
                .iter()
                .map(|label| {
                    let label = label.replace("{MINUTES}", MINUTES);
                    Regex::new(&format!(r"(?i)\b{label}\s*:[ \t]*"))
                        .expect("Invalid field label regex")
                })
                .collect(),
            scope: rule.scope,
        })
        .collect()
});

/// Extract one scalar field from `text`, or `""` when its label is absent.
///
/// Calories come back with any "per serving" phrase removed.
pub fn extract_field(text: &str, field: Field) -> String {
    let Some(rule) = COMPILED_RULES.iter().find(|rule| rule.field == field) else {
        return String::new();
    };

    let value = rule
        .labels
        .iter()
        .find_map(|label| label.find(text))
        .map(|label_match| capture(&text[label_match.end()..], rule.scope))
        .unwrap_or_default();

    match field {
        Field::Calories => PER_SERVING_REGEX.replace_all(value, "").trim().to_string(),
        _ => value.to_string(),
    }
}

/// The scope a field's value is captured with.
pub fn scope_of(field: Field) -> Scope {
    FIELD_RULES
        .iter()
        .find(|rule| rule.field == field)
        .map_or(Scope::UntilNextLabel, |rule| rule.scope)
}

fn capture(rest: &str, scope: Scope) -> &str {
    let end = match scope {
        Scope::SameLine => rest.find('\n').unwrap_or(rest.len()),
        Scope::UntilNextLabel => rest
            .match_indices('\n')
            .map(|(idx, _)| idx)
            .find(|&idx| BOUNDARY_REGEX.is_match(&rest[idx + 1..]))
            .unwrap_or(rest.len()),
    };
    rest[..end].trim()
}
