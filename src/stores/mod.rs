//! Collaborators around the parser and resolver: where templates live, where
//! images are uploaded, and where finished HTML goes.

mod data_uri;
mod file_sink;
mod memory;

pub use data_uri::DataUriImageStore;
pub use file_sink::HtmlFileSink;
pub use memory::MemoryTemplateStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::CardError;

/// A stored card template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    pub name: String,
    pub html: String,
    pub preview_image_url: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Most recent card generated from this template
    pub last_generated_html: Option<String>,
    pub last_generated_at: Option<DateTime<Utc>>,
}

/// A template that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTemplate {
    pub name: String,
    pub html: String,
    #[serde(default)]
    pub preview_image_url: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

/// Create/read/update/delete access to card templates
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// All templates, in id order
    async fn list(&self) -> Result<Vec<Template>, CardError>;

    async fn get(&self, id: i64) -> Result<Template, CardError>;

    async fn find_by_name(&self, name: &str) -> Result<Template, CardError>;

    async fn create(&self, template: NewTemplate) -> Result<Template, CardError>;

    async fn update(&self, template: Template) -> Result<Template, CardError>;

    async fn delete(&self, id: i64) -> Result<(), CardError>;

    /// Remember `html` as the latest card generated from template `id`
    async fn record_generation(&self, id: i64, html: &str) -> Result<Template, CardError>;
}

/// Upload image bytes and get back a URL a template can embed
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn upload(&self, name: &str, mime: &str, bytes: &[u8]) -> Result<String, CardError>;
}

/// Takes finished card HTML for export
#[async_trait]
pub trait RenderSink: Send + Sync {
    /// Export `html` and return where it was written
    async fn render(&self, html: &str) -> Result<PathBuf, CardError>;
}
