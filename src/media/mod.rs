// SPDX-License-Identifier: MPL-2.0
//! Media handling: still photos for the carousel/boxes and the animated
//! frame reel played during the reveal stage.

pub mod image;
pub mod playback;
pub mod reel;

pub use image::{load_photo, ImageData};
pub use playback::{MediaSession, Playback, PlaybackStatus};
pub use reel::{load_reel, Reel, ReelFrame};
