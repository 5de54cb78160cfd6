use log::debug;
use serde::Serialize;

use crate::image::ImageRef;
use crate::model::RecipeRecord;
use crate::template::{render, CLASSIC_TEMPLATE_HTML, REQUIRED_KEYS};
use crate::{parser, CardError};

/// Result of a card generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCard {
    /// Fields parsed from the recipe text
    pub record: RecipeRecord,
    /// Template with every placeholder resolved
    pub html: String,
    /// Required placeholders the template does not contain
    pub missing_placeholders: Vec<String>,
}

/// Builder for configuring and running a card generation
#[derive(Debug, Default)]
pub struct CardGeneratorBuilder {
    text: Option<String>,
    template: Option<String>,
    image: Option<ImageRef>,
    logo: Option<ImageRef>,
    required: Option<Vec<String>>,
}

impl CardGeneratorBuilder {
    /// Set the free-form recipe text to parse
    ///
    /// # Example
    /// ```
    /// use recipe_card::CardGenerator;
    ///
    /// let builder = CardGenerator::builder()
    ///     .text("Recipe Title: Pancakes\n### Ingredients\n1 egg");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the HTML template to fill
    ///
    /// Defaults to the built-in Classic Recipe Card.
    ///
    /// # Example
    /// ```
    /// use recipe_card::CardGenerator;
    ///
    /// let builder = CardGenerator::builder()
    ///     .text("Title: Soup")
    ///     .template("<h1>{{TITLE}}</h1>");
    /// ```
    pub fn template(mut self, html: impl Into<String>) -> Self {
        self.template = Some(html.into());
        self
    }

    /// Set the recipe image substituted for `IMAGE` / `IMAGE_URL`
    pub fn image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    /// Set the logo substituted for `LOGO` / `LOGO_URL`
    pub fn logo(mut self, logo: ImageRef) -> Self {
        self.logo = Some(logo);
        self
    }

    /// Override which placeholders are reported as missing
    pub fn required_placeholders<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Parse the text and resolve the template
    ///
    /// # Errors
    /// Returns `CardError::BuilderError` if no recipe text was specified.
    ///
    /// # Example
    /// ```
    /// use recipe_card::CardGenerator;
    ///
    /// let card = CardGenerator::builder()
    ///     .text("Recipe Title: Soup")
    ///     .template("<h1>{{TITLE}}</h1>")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(card.html, "<h1>Soup</h1>");
    /// ```
    pub fn build(self) -> Result<GeneratedCard, CardError> {
        let text = self.text.ok_or_else(|| {
            CardError::BuilderError("No recipe text specified. Use .text()".to_string())
        })?;

        let template = self
            .template
            .unwrap_or_else(|| CLASSIC_TEMPLATE_HTML.to_string());
        let required = self
            .required
            .unwrap_or_else(|| REQUIRED_KEYS.iter().map(|key| key.to_string()).collect());

        let record = parser::parse(&text);
        let resolution = render(
            &template,
            &record,
            self.image.as_ref(),
            self.logo.as_ref(),
            &required,
        );
        debug!("Generated card '{}' ({} bytes)", record.title, resolution.html.len());

        Ok(GeneratedCard {
            record,
            html: resolution.html,
            missing_placeholders: resolution.missing_placeholders,
        })
    }
}

/// Main entry point for the builder API
pub struct CardGenerator;

impl CardGenerator {
    /// Creates a new builder for generating recipe cards
    ///
    /// # Example
    /// ```
    /// use recipe_card::CardGenerator;
    ///
    /// let builder = CardGenerator::builder();
    /// ```
    pub fn builder() -> CardGeneratorBuilder {
        CardGeneratorBuilder::default()
    }
}
