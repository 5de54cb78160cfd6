use std::sync::LazyLock;

use regex::Regex;

struct HeaderRule {
    canonical: &'static str,
    prefixed: Regex,
    bare: Regex,
}

impl HeaderRule {
    fn new(canonical: &'static str, keyword: &str) -> Self {
        Self {
            canonical,
            prefixed: Regex::new(&format!(r"(?i)^\s*#{{1,3}}\s*.*?{keyword}\s*:?\s*$"))
                .expect("Invalid prefixed header regex"),
            bare: Regex::new(&format!(r"(?i)^\s*{keyword}\s*:?\s*$"))
                .expect("Invalid bare header regex"),
        }
    }

    fn matches(&self, line: &str) -> bool {
        self.prefixed.is_match(line) || self.bare.is_match(line)
    }
}

static HEADER_RULES: LazyLock<Vec<HeaderRule>> = LazyLock::new(|| {
    vec![
        HeaderRule::new("### Ingredients", "ingredients"),
        HeaderRule::new("### Instructions", "instructions"),
        HeaderRule::new("### Equipment", "equipment"),
        HeaderRule::new(
            "### Nutrition",
            r"nutrition(?:\s*facts|\s*\(\s*per\s+serving\s*\))?",
        ),
    ]
});

/// Rewrite every recognized section header line to its `### Keyword` form.
///
/// Accepts `#`, `##` or `###` prefixes with decoration before the keyword
/// (`## 🥕 Ingredients:`) as well as bare keyword lines (`Instructions`).
/// Lines that are not headers pass through untouched, so applying this twice
/// gives the same text as applying it once.
pub fn normalize_headers(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let content = line.strip_suffix('\r').unwrap_or(line);
            HEADER_RULES
                .iter()
                .find(|rule| rule.matches(content))
                .map_or(line, |rule| rule.canonical)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
