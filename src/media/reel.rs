// SPDX-License-Identifier: MPL-2.0
//! Frame reel decoding for the reveal stage.
//!
//! The "video" played during the reveal is an animated image file decoded
//! entirely up front into timed RGBA frames: GIF through the `image` crate's
//! `AnimationDecoder`, animated WebP through the dedicated `webp-animation`
//! crate (libwebp handles timing metadata GIF decoders do not expose). Any
//! other decodable image becomes a single held frame so a plain photo still
//! works as a source.

use crate::error::MediaError;
use iced::widget::image::Handle;
use image_rs::AnimationDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Frames shorter than this are clamped; some encoders write 0 ms delays.
const MIN_FRAME: Duration = Duration::from_millis(16);

/// How long a still image is held when used as the media source.
const STILL_HOLD: Duration = Duration::from_secs(4);

/// One decoded frame with its display duration.
#[derive(Debug, Clone)]
pub struct ReelFrame {
    pub handle: Handle,
    pub duration: Duration,
}

/// A fully decoded animation.
#[derive(Debug, Clone)]
pub struct Reel {
    pub frames: Vec<ReelFrame>,
}

impl Reel {
    /// Total running time of the reel.
    pub fn total_duration(&self) -> Duration {
        self.frames.iter().map(|f| f.duration).sum()
    }

    /// The frame visible at `position` into playback. Positions past the end
    /// pin to the last frame.
    pub fn frame_at(&self, position: Duration) -> Option<&ReelFrame> {
        let mut cursor = Duration::ZERO;
        for frame in &self.frames {
            cursor += frame.duration;
            if position < cursor {
                return Some(frame);
            }
        }
        self.frames.last()
    }
}

/// Decodes the media source into a reel on a blocking thread.
///
/// # Errors
///
/// Returns a [`MediaError`] when the file is missing, the format is not
/// supported, decoding fails, or the animation has no frames.
pub async fn load_reel(path: PathBuf) -> Result<Reel, MediaError> {
    tokio::task::spawn_blocking(move || decode(&path))
        .await
        .map_err(|e| MediaError::DecodeFailed(format!("decode task failed: {e}")))?
}

fn decode(path: &Path) -> Result<Reel, MediaError> {
    if !path.exists() {
        return Err(MediaError::NotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let reel = match extension.as_str() {
        "gif" => decode_gif(path)?,
        "webp" => decode_webp(path)?,
        "png" | "jpg" | "jpeg" => decode_still(path)?,
        other => return Err(MediaError::UnsupportedFormat(other.to_string())),
    };

    if reel.frames.is_empty() {
        return Err(MediaError::EmptyAnimation);
    }
    Ok(reel)
}

fn decode_gif(path: &Path) -> Result<Reel, MediaError> {
    let file = File::open(path).map_err(|e| MediaError::DecodeFailed(e.to_string()))?;
    let decoder = image_rs::codecs::gif::GifDecoder::new(BufReader::new(file))
        .map_err(|e| MediaError::DecodeFailed(e.to_string()))?;

    let mut frames = Vec::new();
    for frame in decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| MediaError::DecodeFailed(e.to_string()))?
    {
        let duration = Duration::from(frame.delay()).max(MIN_FRAME);
        let buffer = frame.into_buffer();
        let (w, h) = buffer.dimensions();
        frames.push(ReelFrame {
            handle: Handle::from_rgba(w, h, buffer.into_raw()),
            duration,
        });
    }

    Ok(Reel { frames })
}

fn decode_webp(path: &Path) -> Result<Reel, MediaError> {
    let data = std::fs::read(path).map_err(|e| MediaError::DecodeFailed(e.to_string()))?;
    let decoder = webp_animation::Decoder::new(&data)
        .map_err(|e| MediaError::DecodeFailed(format!("{e:?}")))?;
    let (width, height) = decoder.dimensions();

    // timestamp(i) is when frame i ends, so duration = timestamp(i) - previous.
    let mut frames = Vec::new();
    let mut previous_ms = 0i32;
    for frame in decoder {
        let ms = (frame.timestamp() - previous_ms).max(0) as u64;
        previous_ms = frame.timestamp();
        frames.push(ReelFrame {
            handle: Handle::from_rgba(width, height, frame.data().to_vec()),
            duration: Duration::from_millis(ms).max(MIN_FRAME),
        });
    }

    Ok(Reel { frames })
}

fn decode_still(path: &Path) -> Result<Reel, MediaError> {
    let decoded =
        image_rs::open(path).map_err(|e| MediaError::DecodeFailed(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Reel {
        frames: vec![ReelFrame {
            handle: Handle::from_rgba(width, height, rgba.into_raw()),
            duration: STILL_HOLD,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(ms: u64) -> ReelFrame {
        ReelFrame {
            handle: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            duration: Duration::from_millis(ms),
        }
    }

    fn reel(durations: &[u64]) -> Reel {
        Reel {
            frames: durations.iter().copied().map(frame).collect(),
        }
    }

    #[test]
    fn total_duration_sums_frames() {
        assert_eq!(
            reel(&[100, 200, 300]).total_duration(),
            Duration::from_millis(600)
        );
    }

    #[test]
    fn frame_at_walks_cumulative_durations() {
        let r = reel(&[100, 100, 100]);
        assert_eq!(
            r.frame_at(Duration::from_millis(0)).unwrap().duration,
            Duration::from_millis(100)
        );
        assert!(r.frame_at(Duration::from_millis(150)).is_some());
        // past the end pins to the last frame
        assert!(r.frame_at(Duration::from_millis(10_000)).is_some());
    }

    #[test]
    fn missing_source_is_classified_not_found() {
        let err = decode(Path::new("/nonexistent/surprise.gif")).unwrap_err();
        assert!(matches!(err, MediaError::NotFound(_)));
    }

    #[test]
    fn unknown_extension_is_classified_unsupported() {
        // The file must exist for the format check to be reached.
        let dir = std::env::temp_dir().join("iced_keepsake_reel_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("clip.mov");
        std::fs::write(&path, b"not media").unwrap();
        let err = decode(&path).unwrap_err();
        assert!(matches!(err, MediaError::UnsupportedFormat(ext) if ext == "mov"));
        std::fs::remove_file(&path).ok();
    }
}
