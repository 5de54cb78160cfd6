use async_trait::async_trait;
use log::debug;

use super::ImageStore;
use crate::error::CardError;
use crate::image::{ImageRef, DEFAULT_MAX_IMAGE_BYTES};

/// Image "store" that needs no backend: every upload comes back as an inline
/// `data:` URI, so cards stay self-contained.
#[derive(Debug, Clone)]
pub struct DataUriImageStore {
    max_bytes: u64,
}

impl Default for DataUriImageStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGE_BYTES)
    }
}

impl DataUriImageStore {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }
}

#[async_trait]
impl ImageStore for DataUriImageStore {
    async fn upload(&self, name: &str, mime: &str, bytes: &[u8]) -> Result<String, CardError> {
        debug!("Inlining image {} ({} bytes)", name, bytes.len());
        let image = ImageRef::from_bytes(mime, bytes, self.max_bytes)?;
        Ok(image.to_string())
    }
}
