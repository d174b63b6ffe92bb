// SPDX-License-Identifier: MPL-2.0
//! The stage transition table.

use super::{App, Message, Stage};
use crate::media::{MediaSession, Playback};
use crate::ui::photo_viewer;
use iced::Task;
use std::time::Instant;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StartPressed => {
                if !self.started {
                    self.started = true;
                    self.enter_stage(Stage::FIRST);
                }
                Task::none()
            }

            // Stage-entry timers carry their stage so a timer left over from
            // a previous stage can never advance the current one. Only the
            // three timer-driven stages advance this way.
            Message::StageElapsed(stage) => {
                if self.started
                    && self.stage == stage
                    && matches!(stage, Stage::Intro1 | Stage::Intro2 | Stage::Bond)
                {
                    if let Some(next) = stage.successor() {
                        self.enter_stage(next);
                    }
                }
                Task::none()
            }

            Message::CountdownTick => {
                if self.stage == Stage::Countdown {
                    self.countdown.tick();
                }
                Task::none()
            }

            Message::ReadyHoldElapsed => {
                if self.stage == Stage::Countdown && self.countdown.is_holding() {
                    return self.enter_video_reveal();
                }
                Task::none()
            }

            Message::ReelLoaded(result) => {
                if self.stage == Stage::VideoReveal
                    && matches!(self.media, MediaSession::Loading)
                {
                    match result {
                        Ok(reel) => {
                            let mut playback = Playback::new(reel);
                            playback.play();
                            self.media = MediaSession::Active(playback);
                            self.last_frame_tick = None;
                        }
                        Err(error) => {
                            eprintln!("Warning: media decode failed: {error}");
                            self.media = MediaSession::Failed(error);
                        }
                    }
                }
                Task::none()
            }

            Message::PlaybackTick(now) => {
                self.now = now;
                if self.stage == Stage::VideoReveal {
                    if let MediaSession::Active(playback) = &mut self.media {
                        let delta = self
                            .last_frame_tick
                            .map_or(std::time::Duration::ZERO, |last| {
                                now.saturating_duration_since(last)
                            });
                        self.last_frame_tick = Some(now);
                        if playback.tick(delta) {
                            self.finish_video();
                        }
                    }
                }
                Task::none()
            }

            Message::SkipVideo | Message::ContinueAfterFailure => {
                if self.stage == Stage::VideoReveal {
                    self.finish_video();
                }
                Task::none()
            }

            Message::RetryVideo => {
                if self.stage == Stage::VideoReveal
                    && matches!(self.media, MediaSession::Failed(_))
                {
                    return self.enter_video_reveal();
                }
                Task::none()
            }

            Message::OpenGift => {
                if self.stage == Stage::Growing {
                    self.enter_stage(Stage::Messages);
                }
                Task::none()
            }

            Message::OpenBox(id) => {
                if self.stage == Stage::Messages && self.content.message(id).is_some() {
                    self.boxes.open(id);
                }
                Task::none()
            }

            Message::CloseBox => {
                self.boxes.close();
                Task::none()
            }

            Message::ProceedToBond => {
                if self.stage == Stage::Messages
                    && self.boxes.all_opened(self.content.message_ids())
                {
                    self.enter_stage(Stage::Bond);
                }
                Task::none()
            }

            Message::Restart => {
                if self.stage == Stage::Final {
                    self.restart();
                }
                Task::none()
            }

            Message::SelectPhoto(id) => {
                if let Some(photo) = self.content.photo(id) {
                    self.photo_viewer = Some(photo_viewer::State::new(photo.clone()));
                }
                Task::none()
            }

            Message::ClosePhoto => {
                self.photo_viewer = None;
                Task::none()
            }

            Message::RotatePhotoLeft => {
                if let Some(viewer) = &mut self.photo_viewer {
                    viewer.rotate_left();
                }
                Task::none()
            }

            Message::RotatePhotoRight => {
                if let Some(viewer) = &mut self.photo_viewer {
                    viewer.rotate_right();
                }
                Task::none()
            }

            Message::CarouselPrevious => {
                if self.stage == Stage::Final {
                    self.carousel.previous(self.content.photos.len());
                }
                Task::none()
            }

            Message::CarouselNext => {
                if self.stage == Stage::Final {
                    self.carousel.next(self.content.photos.len());
                }
                Task::none()
            }

            Message::PhotoLoaded { id, result } => {
                match result {
                    Ok(bitmap) => {
                        self.photo_bitmaps.insert(id, bitmap);
                    }
                    Err(error) => {
                        eprintln!("Warning: could not load photo {id}: {error}");
                    }
                }
                Task::none()
            }

            Message::DecorTick(now) => {
                self.now = now;
                Task::none()
            }
        }
    }

    /// Moves to a stage and resets whatever per-stage state it owns.
    fn enter_stage(&mut self, stage: Stage) {
        self.stage = stage;
        self.stage_entered_at = Instant::now();

        if stage == Stage::Countdown {
            self.countdown = crate::ui::countdown::State::new();
        }
        if stage != Stage::VideoReveal {
            self.media = MediaSession::Inactive;
        }
    }

    /// Enters the reveal stage and starts the async reel decode.
    fn enter_video_reveal(&mut self) -> Task<Message> {
        self.enter_stage(Stage::VideoReveal);
        self.last_frame_tick = None;

        let source = self.media_source.clone();
        if !source.exists() {
            self.media = MediaSession::Failed(crate::error::MediaError::NotFound(
                source.display().to_string(),
            ));
            return Task::none();
        }

        self.media = MediaSession::Loading;
        Task::perform(crate::media::load_reel(source), Message::ReelLoaded)
    }

    /// Leaves the reveal for the growing stage, whether the reel finished,
    /// was skipped, or failed and was acknowledged.
    fn finish_video(&mut self) {
        self.enter_stage(Stage::Growing);
    }

    /// Returns to the start gate. Decoded photo bitmaps are kept; everything
    /// the user did during the session is forgotten.
    fn restart(&mut self) {
        self.started = false;
        self.stage = Stage::FIRST;
        self.stage_entered_at = Instant::now();
        self.countdown = crate::ui::countdown::State::new();
        self.media = MediaSession::Inactive;
        self.last_frame_tick = None;
        self.boxes.reset();
        self.carousel = crate::ui::carousel::State::default();
        self.photo_viewer = None;
    }
}
