use async_trait::async_trait;
use log::info;
use std::path::PathBuf;
use tokio::fs;

use super::RenderSink;
use crate::error::CardError;

/// Writes finished cards to a standalone `.html` file, ready for an external
/// rasterizer or a browser.
#[derive(Debug, Clone)]
pub struct HtmlFileSink {
    path: PathBuf,
}

impl HtmlFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RenderSink for HtmlFileSink {
    async fn render(&self, html: &str) -> Result<PathBuf, CardError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, html).await?;
        info!("Wrote recipe card to {}", self.path.display());
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_render_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = HtmlFileSink::new(dir.path().join("cards/cake.html"));

        let path = sink.render("<p>Cake</p>").await.unwrap();
        assert_eq!(fs::read_to_string(path).await.unwrap(), "<p>Cake</p>");
    }
}
