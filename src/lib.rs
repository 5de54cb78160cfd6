//! Turn loosely formatted recipe text into HTML recipe cards.
//!
//! The [`parser`] extracts a [`RecipeRecord`] from free text and the
//! [`template`] resolver injects it into an HTML template. Both are pure and
//! never fail; the [`stores`] traits describe the collaborators around them.

pub mod builder;
pub mod config;
pub mod error;
pub mod image;
pub mod model;
pub mod parser;
pub mod stores;
pub mod template;

pub use builder::{CardGenerator, CardGeneratorBuilder, GeneratedCard};
pub use config::CardConfig;
pub use error::CardError;
pub use image::ImageRef;
pub use model::RecipeRecord;
pub use parser::parse;
pub use stores::{
    DataUriImageStore, HtmlFileSink, ImageStore, MemoryTemplateStore, NewTemplate, RenderSink,
    Template, TemplateStore,
};
pub use template::{missing_placeholders, render, resolve, Resolution};

/// Parse `text` and resolve `template` against it in one step.
///
/// # Example
/// ```
/// let html = recipe_card::generate_html(
///     "Recipe Title: Toast\n### Ingredients\nbread",
///     "<h1>{{TITLE}}</h1><ul>{{INGREDIENTS}}</ul>",
///     None,
///     None,
/// );
/// assert_eq!(html, "<h1>Toast</h1><ul><li>bread</li></ul>");
/// ```
pub fn generate_html(
    text: &str,
    template: &str,
    image: Option<&ImageRef>,
    logo: Option<&ImageRef>,
) -> String {
    let record = parse(text);
    resolve(template, &record, image, logo)
}
