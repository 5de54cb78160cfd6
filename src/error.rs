use thiserror::Error;

/// Errors raised by the layers around the parser and resolver.
///
/// Parsing and placeholder resolution never fail; only loading inputs,
/// talking to stores and writing output can.
#[derive(Error, Debug)]
pub enum CardError {
    /// Failed to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to serialize a recipe record
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No template with the given id or name exists in the store
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// A template with the same name is already stored
    #[error("Template already exists: {0}")]
    DuplicateTemplate(String),

    /// The uploaded file is not an image
    #[error("Not an image: {0}")]
    NotAnImage(String),

    /// The image payload exceeds the configured size limit
    #[error("Image is {size} bytes, limit is {limit} bytes")]
    ImageTooLarge { size: u64, limit: u64 },

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),
}
