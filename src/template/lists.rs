use std::sync::LazyLock;

use html_escape::encode_quoted_attribute;
use regex::Regex;
use scraper::{Html, Node};

static INGREDIENTS_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\{\{\s*INGREDIENTS\s*\}\}|\[\s*INGREDIENTS\s*\]")
        .expect("Invalid ingredients token regex")
});

static INSTRUCTIONS_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\{\{\s*(?:INSTRUCTIONS|DIRECTIONS)\s*\}\}|\[\s*(?:INSTRUCTIONS|DIRECTIONS)\s*\]")
        .expect("Invalid instructions token regex")
});

/// Whether the template author already wrapped a list placeholder in
/// `<ul>`/`<ol>` markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListContext {
    pub ingredients_in_list: bool,
    pub instructions_in_list: bool,
}

impl ListContext {
    /// Inspect the template DOM for list placeholders nested under a list
    /// container.
    pub fn detect(template: &str) -> Self {
        let mut context = Self::default();
        if !INGREDIENTS_TOKEN.is_match(template) && !INSTRUCTIONS_TOKEN.is_match(template) {
            return context;
        }

        let document = Html::parse_document(template);
        for node in document.tree.nodes() {
            let Node::Text(text) = node.value() else {
                continue;
            };

            let in_list = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| matches!(el.name(), "ul" | "ol"))
            });
            if !in_list {
                continue;
            }

            if INGREDIENTS_TOKEN.is_match(text) {
                context.ingredients_in_list = true;
            }
            if INSTRUCTIONS_TOKEN.is_match(text) {
                context.instructions_in_list = true;
            }
        }

        context
    }
}

/// Render items as `<li>` fragments, or as a complete `<ul>` carrying
/// `class` when the template supplies no wrapper of its own.
pub fn render_list(items: &[String], class: &str, items_only: bool) -> String {
    if items.is_empty() {
        return String::new();
    }

    let lis: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", encode_quoted_attribute(item)))
        .collect();

    if items_only {
        lis
    } else {
        format!(r#"<ul class="{class}">{lis}</ul>"#)
    }
}
