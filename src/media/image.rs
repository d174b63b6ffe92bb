// SPDX-License-Identifier: MPL-2.0
//! Still photo loading for message boxes, the carousel, and the photo modal.

use crate::error::{Error, Result};
use iced::widget::image;
use std::path::Path;

/// A decoded photo ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates an `ImageData` from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes a photo from disk into an RGBA handle.
///
/// Runs on a blocking thread because `image` decoding is CPU-bound; callers
/// wrap it in a `Task` so the result re-enters the update loop as a message.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub async fn load_photo(path: std::path::PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || decode_photo(&path))
        .await
        .map_err(|e| Error::Io(format!("photo decode task failed: {e}")))?
}

fn decode_photo(path: &Path) -> Result<ImageData> {
    let decoded = image_rs::open(path)
        .map_err(|e| Error::Io(format!("cannot decode {}: {e}", path.display())))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_reports_dimensions() {
        let pixels = vec![0u8; 4 * 2 * 3];
        let data = ImageData::from_rgba(2, 3, pixels);
        assert_eq!(data.width, 2);
        assert_eq!(data.height, 3);
    }

    #[test]
    fn decode_missing_photo_fails() {
        let err = decode_photo(Path::new("/nonexistent/photo.png"));
        assert!(err.is_err());
    }
}
