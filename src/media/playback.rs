// SPDX-License-Identifier: MPL-2.0
//! Playback clock over a decoded frame reel.
//!
//! The sequencer only consumes three signals from this collaborator:
//! playback ended, playback failed, and (from the user) skip. Position
//! advances by explicit deltas from the tick subscription, which keeps the
//! whole clock a pure function of accumulated time and directly testable.

use super::reel::{Reel, ReelFrame};
use crate::error::MediaError;
use std::time::Duration;

/// Playback state of an armed reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Loaded but the clock has not been started.
    Ready,
    /// Clock running; frames advance with each tick.
    Playing,
    /// The last frame's duration has fully elapsed.
    Ended,
}

/// A reel plus its playback clock.
#[derive(Debug, Clone)]
pub struct Playback {
    reel: Reel,
    position: Duration,
    status: PlaybackStatus,
}

impl Playback {
    pub fn new(reel: Reel) -> Self {
        Self {
            reel,
            position: Duration::ZERO,
            status: PlaybackStatus::Ready,
        }
    }

    /// Starts the clock. Requires a prior user gesture per platform autoplay
    /// rules; the start-gate interaction satisfies that.
    pub fn play(&mut self) {
        if self.status == PlaybackStatus::Ready {
            self.status = PlaybackStatus::Playing;
        }
    }

    /// Advances the clock by `delta`. Returns `true` on the tick that
    /// crosses the end of the reel.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.status != PlaybackStatus::Playing {
            return false;
        }
        self.position += delta;
        if self.position >= self.reel.total_duration() {
            self.status = PlaybackStatus::Ended;
            return true;
        }
        false
    }

    /// The frame currently visible.
    pub fn current_frame(&self) -> Option<&ReelFrame> {
        self.reel.frame_at(self.position)
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn position(&self) -> Duration {
        self.position
    }
}

/// Lifecycle of the reveal stage's media collaborator, owned by the app.
#[derive(Debug, Clone, Default)]
pub enum MediaSession {
    /// No media activity (any stage but the reveal).
    #[default]
    Inactive,
    /// Async decode in flight.
    Loading,
    /// Reel decoded; playback running.
    Active(Playback),
    /// Decode failed; waiting for the user to retry or continue.
    Failed(MediaError),
}

impl MediaSession {
    /// True while the frame tick subscription should run.
    pub fn is_playing(&self) -> bool {
        matches!(
            self,
            MediaSession::Active(p) if p.status() == PlaybackStatus::Playing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;

    fn reel(durations_ms: &[u64]) -> Reel {
        Reel {
            frames: durations_ms
                .iter()
                .map(|ms| ReelFrame {
                    handle: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
                    duration: Duration::from_millis(*ms),
                })
                .collect(),
        }
    }

    #[test]
    fn tick_before_play_does_nothing() {
        let mut playback = Playback::new(reel(&[100]));
        assert!(!playback.tick(Duration::from_millis(500)));
        assert_eq!(playback.status(), PlaybackStatus::Ready);
        assert_eq!(playback.position(), Duration::ZERO);
    }

    #[test]
    fn ends_exactly_past_the_last_frame() {
        let mut playback = Playback::new(reel(&[100, 100]));
        playback.play();
        assert!(!playback.tick(Duration::from_millis(100)));
        assert!(!playback.tick(Duration::from_millis(99)));
        assert!(playback.tick(Duration::from_millis(1)));
        assert_eq!(playback.status(), PlaybackStatus::Ended);
    }

    #[test]
    fn ended_reported_only_once() {
        let mut playback = Playback::new(reel(&[50]));
        playback.play();
        assert!(playback.tick(Duration::from_millis(60)));
        assert!(!playback.tick(Duration::from_millis(60)));
    }

    #[test]
    fn current_frame_tracks_position() {
        let mut playback = Playback::new(reel(&[100, 100]));
        playback.play();
        let first = playback.current_frame().unwrap().duration;
        playback.tick(Duration::from_millis(150));
        let second = playback.current_frame().unwrap().duration;
        assert_eq!(first, second); // equal durations; frame exists either way
    }

    #[test]
    fn session_playing_only_while_active_and_running() {
        assert!(!MediaSession::Inactive.is_playing());
        assert!(!MediaSession::Loading.is_playing());
        assert!(!MediaSession::Failed(MediaError::EmptyAnimation).is_playing());

        let mut playback = Playback::new(reel(&[50]));
        assert!(!MediaSession::Active(playback.clone()).is_playing());
        playback.play();
        assert!(MediaSession::Active(playback.clone()).is_playing());
        playback.tick(Duration::from_millis(60));
        assert!(!MediaSession::Active(playback).is_playing());
    }
}
