//! Placeholder resolution for HTML card templates.
//!
//! Resolution runs four passes in a fixed order: `{{KEY}}`, `[KEY]`,
//! `[INGREDIENT n]`, `[STEP n]`. Each pass only rewrites text that came from
//! the template itself, never values a previous pass inserted.

mod defaults;
mod lists;
mod placeholders;

pub use defaults::{default_templates, CLASSIC_TEMPLATE_HTML, CLASSIC_TEMPLATE_NAME};
pub use lists::{render_list, ListContext};
pub use placeholders::{PlaceholderMap, REQUIRED_KEYS, SUPPORTED_KEYS};

use std::sync::LazyLock;

use html_escape::encode_quoted_attribute;
use log::{debug, warn};
use regex::{Captures, Regex};
use serde::Serialize;

use crate::image::ImageRef;
use crate::model::RecipeRecord;

static BRACE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\{\{\s*([A-Z_]+)\s*\}\}").expect("Invalid brace placeholder regex")
});

static BRACKET_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[\s*([A-Z_\s]+)\s*\]").expect("Invalid bracket placeholder regex")
});

static INGREDIENT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[\s*INGREDIENT\s+(\d+)\s*\]").expect("Invalid ingredient index regex")
});

static STEP_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[\s*STEP\s+(\d+)\s*\]").expect("Invalid step index regex")
});

/// Outcome of rendering a template: the final HTML plus the required
/// placeholders the template lacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub html: String,
    pub missing_placeholders: Vec<String>,
}

enum Piece {
    Template(String),
    Value(String),
}

/// Resolve every placeholder in `template` against `record`.
///
/// Unknown keys and out-of-range indexes become `""`; everything else in the
/// template is copied through unchanged.
pub fn resolve(
    template: &str,
    record: &RecipeRecord,
    image: Option<&ImageRef>,
    logo: Option<&ImageRef>,
) -> String {
    let context = ListContext::detect(template);
    let map = PlaceholderMap::new(record, image, logo, context);
    debug!("List context: {:?}", context);

    let pieces = vec![Piece::Template(template.to_string())];

    let pieces = substitute(pieces, &BRACE_TOKEN, |caps| {
        map.value_or_empty(&caps[1]).to_string()
    });

    let pieces = substitute(pieces, &BRACKET_TOKEN, |caps| {
        let key = caps[1].split_whitespace().collect::<Vec<_>>().join("_");
        map.value_or_empty(&key).to_string()
    });

    let pieces = substitute(pieces, &INGREDIENT_TOKEN, |caps| {
        nth(&record.ingredients, &caps[1])
    });

    let pieces = substitute(pieces, &STEP_TOKEN, |caps| {
        nth(&record.instructions, &caps[1])
    });

    pieces
        .into_iter()
        .map(|piece| match piece {
            Piece::Template(text) | Piece::Value(text) => text,
        })
        .collect()
}

/// Resolve `template` and report which of `required` it is missing.
pub fn render<S: AsRef<str>>(
    template: &str,
    record: &RecipeRecord,
    image: Option<&ImageRef>,
    logo: Option<&ImageRef>,
    required: &[S],
) -> Resolution {
    let missing_placeholders = missing_placeholders(template, required);
    if !missing_placeholders.is_empty() {
        warn!(
            "Template is missing placeholders: {}",
            missing_placeholders.join(", ")
        );
    }

    Resolution {
        html: resolve(template, record, image, logo),
        missing_placeholders,
    }
}

/// Keys from `required` that appear in neither `{{KEY}}` nor `[KEY]` form.
///
/// Advisory only; a template missing keys still resolves.
pub fn missing_placeholders<S: AsRef<str>>(template: &str, required: &[S]) -> Vec<String> {
    let present: Vec<String> = BRACE_TOKEN
        .captures_iter(template)
        .map(|caps| caps[1].to_ascii_uppercase())
        .chain(BRACKET_TOKEN.captures_iter(template).map(|caps| {
            caps[1]
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("_")
                .to_ascii_uppercase()
        }))
        .collect();

    required
        .iter()
        .map(|key| key.as_ref().trim().to_ascii_uppercase())
        .filter(|key| !present.contains(key))
        .collect()
}

fn substitute(
    pieces: Vec<Piece>,
    token: &Regex,
    mut replacement: impl FnMut(&Captures) -> String,
) -> Vec<Piece> {
    let mut out = Vec::with_capacity(pieces.len());

    for piece in pieces {
        let text = match piece {
            Piece::Template(text) => text,
            value => {
                out.push(value);
                continue;
            }
        };

        let mut last = 0;
        for caps in token.captures_iter(&text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > last {
                out.push(Piece::Template(text[last..whole.start()].to_string()));
            }
            out.push(Piece::Value(replacement(&caps)));
            last = whole.end();
        }
        if last < text.len() {
            out.push(Piece::Template(text[last..].to_string()));
        }
    }

    out
}

fn nth(items: &[String], index: &str) -> String {
    index
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| items.get(i))
        .map(|item| encode_quoted_attribute(item).into_owned())
        .unwrap_or_default()
}
