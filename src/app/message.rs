// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Stage;
use crate::error::{Error, MediaError};
use crate::media::{ImageData, Reel};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Each user control and each
/// timer maps to exactly one variant, so the update function reads as the
/// transition table.
#[derive(Debug, Clone)]
pub enum Message {
    /// The single required start interaction (also the autoplay gesture).
    StartPressed,
    /// A stage-entry timer elapsed. Carries the stage it was scheduled for
    /// so a stale timer can never advance a stage it does not belong to.
    StageElapsed(Stage),
    /// One-second countdown tick.
    CountdownTick,
    /// The post-zero "ready" hold elapsed.
    ReadyHoldElapsed,
    /// Async reel decode finished.
    ReelLoaded(Result<Reel, MediaError>),
    /// Frame clock tick while the reel is playing.
    PlaybackTick(Instant),
    /// User skipped the reveal.
    SkipVideo,
    /// User asked to reload the media source after a failure.
    RetryVideo,
    /// User acknowledged the failure and chose to continue.
    ContinueAfterFailure,
    /// "Open the gift" control on the growing stage.
    OpenGift,
    /// A message box was tapped.
    OpenBox(u32),
    /// The message detail view was closed.
    CloseBox,
    /// "See our bond" control, available once every box was opened.
    ProceedToBond,
    /// Full restart from the final stage.
    Restart,
    /// A photo was tapped (box grid or carousel).
    SelectPhoto(u32),
    ClosePhoto,
    RotatePhotoLeft,
    RotatePhotoRight,
    CarouselPrevious,
    CarouselNext,
    /// Async photo decode finished.
    PhotoLoaded { id: u32, result: Result<ImageData, Error> },
    /// Ambient tick driving the decorative layer.
    DecorTick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional content TOML overriding the embedded document.
    pub content_file: Option<String>,
    /// Optional media source path (positional argument).
    pub media_file: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_KEEPSAKE_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
