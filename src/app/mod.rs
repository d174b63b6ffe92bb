// SPDX-License-Identifier: MPL-2.0
//! Application root state and the staged story sequencer.
//!
//! The `App` struct owns the current stage, the per-scene view state and the
//! media session, and translates messages into stage transitions. Policy
//! decisions (stage order, gating, what a restart resets) live next to the
//! update loop so the user-facing flow is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod stage;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use stage::Stage;

use crate::content::{self, Content};
use crate::media::{self, MediaSession};
use crate::ui::{carousel, countdown, messages, photo_viewer};
use config::Timing;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    /// Whether the start gate has been passed.
    started: bool,
    stage: Stage,
    content: Content,
    timing: Timing,
    /// Resolved media source for the reveal stage.
    media_source: PathBuf,
    countdown: countdown::State,
    media: MediaSession,
    boxes: messages::State,
    carousel: carousel::State,
    photo_viewer: Option<photo_viewer::State>,
    /// Decoded photo bitmaps, keyed by photo id. Survives a restart.
    photo_bitmaps: BTreeMap<u32, media::ImageData>,
    /// When the application booted; drives the decorative layer.
    epoch: Instant,
    /// Last observed tick instant.
    now: Instant,
    /// When the current stage was entered.
    stage_entered_at: Instant,
    /// Previous frame tick, for playback deltas.
    last_frame_tick: Option<Instant>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let content = Content::builtin();
        let media_source = content.video.clone();
        let now = Instant::now();

        Self {
            started: false,
            stage: Stage::FIRST,
            content,
            timing: Timing::default(),
            media_source,
            countdown: countdown::State::new(),
            media: MediaSession::default(),
            boxes: messages::State::default(),
            carousel: carousel::State::default(),
            photo_viewer: None,
            photo_bitmaps: BTreeMap::new(),
            epoch: now,
            now,
            stage_entered_at: now,
            last_frame_tick: None,
        }
    }
}

impl App {
    /// Initializes application state from the launcher flags and kicks off
    /// asynchronous photo decoding.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);

        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            eprintln!("Warning: {warning}");
        }

        let content_file = flags
            .content_file
            .map(PathBuf::from)
            .or_else(|| config.content.file.clone());
        let (content, content_warning) = content::load(content_file.as_deref());
        if let Some(warning) = content_warning {
            eprintln!("Warning: {warning}");
        }

        // CLI argument beats the config file, which beats the content feed.
        let media_source = flags
            .media_file
            .map(PathBuf::from)
            .or_else(|| config.media.source.clone())
            .unwrap_or_else(|| content.video.clone());

        let mut app = App {
            timing: Timing::from_config(&config.timing),
            media_source,
            ..Self::default()
        };
        app.content = content;

        let photo_tasks: Vec<_> = app
            .content
            .photos
            .iter()
            .map(|photo| {
                let id = photo.id;
                Task::perform(
                    media::load_photo(PathBuf::from(&photo.url)),
                    move |result| Message::PhotoLoaded { id, result },
                )
            })
            .collect();

        (app, Task::batch(photo_tasks))
    }

    pub fn title(&self) -> String {
        self.content.text.title.clone()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// Time spent in the current stage.
    pub fn stage_elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.stage_entered_at)
    }

    /// Time since boot, for the decorative layer.
    pub fn ambient_elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.epoch)
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn media_session(&self) -> &MediaSession {
        &self.media
    }

    pub fn media_source(&self) -> &std::path::Path {
        &self.media_source
    }

    pub fn countdown(&self) -> &countdown::State {
        &self.countdown
    }

    pub fn boxes(&self) -> &messages::State {
        &self.boxes
    }

    pub fn carousel(&self) -> &carousel::State {
        &self.carousel
    }

    pub fn photo_viewer(&self) -> Option<&photo_viewer::State> {
        self.photo_viewer.as_ref()
    }

    pub fn photo_bitmaps(&self) -> &BTreeMap<u32, media::ImageData> {
        &self.photo_bitmaps
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }
}
