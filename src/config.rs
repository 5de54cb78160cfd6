use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::image::DEFAULT_MAX_IMAGE_BYTES;
use crate::template::{CLASSIC_TEMPLATE_NAME, REQUIRED_KEYS};

/// Settings for the card generator
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CardConfig {
    /// Directory of extra `*.html` templates to load into the store
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
    /// Template used when none is chosen explicitly
    #[serde(default = "default_template")]
    pub default_template: String,
    /// Placeholders a template is expected to contain
    #[serde(default = "default_required_placeholders")]
    pub required_placeholders: Vec<String>,
    /// Largest accepted image upload in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            templates_dir: None,
            default_template: default_template(),
            required_placeholders: default_required_placeholders(),
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

// Default value functions
fn default_template() -> String {
    CLASSIC_TEMPLATE_NAME.to_string()
}

fn default_required_placeholders() -> Vec<String> {
    REQUIRED_KEYS.iter().map(|key| key.to_string()).collect()
}

fn default_max_image_bytes() -> u64 {
    DEFAULT_MAX_IMAGE_BYTES
}

impl CardConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_CARD__ prefix
    /// 2. recipe-card.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_CARD__MAX_IMAGE_BYTES
    pub fn load() -> Result<Self, ConfigError> {
        load_config("recipe-card")
    }
}

/// Load configuration from the optional file `name` (any supported extension)
/// and `RECIPE_CARD__*` environment variables.
pub fn load_config(name: &str) -> Result<CardConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(name).required(false))
        .add_source(
            Environment::with_prefix("RECIPE_CARD")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("required_placeholders")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
