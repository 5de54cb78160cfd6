use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tokio::fs;

use crate::error::CardError;

/// Upload limit for recipe and logo images.
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// An image a template can point at: either a hosted URL or a
/// `data:` URI. Substituted into templates verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap a publicly addressable URL
    pub fn from_url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Wrap an already encoded `data:` URI
    pub fn from_data_uri(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Encode raw image bytes as a base64 data URI.
    ///
    /// # Errors
    /// Returns an error if:
    /// - `mime` is not an `image/*` type
    /// - the payload is larger than `max_bytes`
    pub fn from_bytes(mime: &str, bytes: &[u8], max_bytes: u64) -> Result<Self, CardError> {
        if !mime.starts_with("image/") {
            return Err(CardError::NotAnImage(mime.to_string()));
        }

        let size = bytes.len() as u64;
        if size > max_bytes {
            return Err(CardError::ImageTooLarge {
                size,
                limit: max_bytes,
            });
        }

        debug!("Encoding {} byte {} image as data URI", size, mime);
        Ok(Self(format!("data:{};base64,{}", mime, STANDARD.encode(bytes))))
    }

    /// Read an image file and encode it as a data URI.
    ///
    /// The mime type is guessed from the file extension.
    pub async fn from_file(path: &Path, max_bytes: u64) -> Result<Self, CardError> {
        let mime = mime_for_path(path)
            .ok_or_else(|| CardError::NotAnImage(path.display().to_string()))?;

        let size = fs::metadata(path).await?.len();
        if size > max_bytes {
            return Err(CardError::ImageTooLarge {
                size,
                limit: max_bytes,
            });
        }

        let bytes = fs::read(path).await?;
        Self::from_bytes(mime, &bytes, max_bytes)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_data_uri(&self) -> bool {
        self.0.starts_with("data:")
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Guess an image mime type from a file extension
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        "tiff" | "tif" => "image/tiff",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_encodes_data_uri() {
        let image = ImageRef::from_bytes("image/png", b"test data", DEFAULT_MAX_IMAGE_BYTES).unwrap();
        assert_eq!(image.as_str(), "data:image/png;base64,dGVzdCBkYXRh");
        assert!(image.is_data_uri());
    }

    #[test]
    fn test_from_bytes_rejects_non_images() {
        let result = ImageRef::from_bytes("text/plain", b"hello", DEFAULT_MAX_IMAGE_BYTES);
        assert!(matches!(result, Err(CardError::NotAnImage(_))));
    }

    #[test]
    fn test_from_bytes_rejects_oversize() {
        let result = ImageRef::from_bytes("image/jpeg", &[0u8; 16], 8);
        assert!(matches!(
            result,
            Err(CardError::ImageTooLarge { size: 16, limit: 8 })
        ));
    }

    #[test]
    fn test_url_is_verbatim() {
        let image = ImageRef::from_url("https://cdn.example.com/cake.png");
        assert_eq!(image.to_string(), "https://cdn.example.com/cake.png");
        assert!(!image.is_data_uri());
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("a/cake.JPG")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("logo.svg")), Some("image/svg+xml"));
        assert_eq!(mime_for_path(Path::new("scan.TIF")), Some("image/tiff"));
        assert_eq!(mime_for_path(Path::new("notes.txt")), None);
        assert_eq!(mime_for_path(Path::new("noext")), None);
    }

    #[tokio::test]
    async fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cake.gif");
        fs::write(&path, b"GIF89a").await.unwrap();

        let image = ImageRef::from_file(&path, DEFAULT_MAX_IMAGE_BYTES).await.unwrap();
        assert!(image.as_str().starts_with("data:image/gif;base64,"));

        let too_small = ImageRef::from_file(&path, 2).await;
        assert!(matches!(too_small, Err(CardError::ImageTooLarge { .. })));
    }
}
