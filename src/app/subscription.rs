// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the sequencer.
//!
//! Every timed transition is a declarative `time::every` keyed to the current
//! stage. Changing stage drops the old subscription, so a pending delay can
//! never outlive the stage that scheduled it; `StageElapsed` additionally
//! carries its stage as a second guard.

use super::config::defaults::{DECOR_TICK_MS, FRAME_TICK_MS};
use super::{App, Message, Stage};
use iced::time;
use iced::Subscription;
use std::time::Duration;

pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![
        time::every(Duration::from_millis(DECOR_TICK_MS)).map(Message::DecorTick),
    ];

    if app.is_started() {
        if let Some(timer) = stage_timer(app) {
            subscriptions.push(timer);
        }
    }

    Subscription::batch(subscriptions)
}

fn stage_timer(app: &App) -> Option<Subscription<Message>> {
    let timing = app.timing();

    match app.stage() {
        Stage::Intro1 => Some(
            time::every(timing.intro_first).map(|_| Message::StageElapsed(Stage::Intro1)),
        ),
        Stage::Intro2 => Some(
            time::every(timing.intro_second).map(|_| Message::StageElapsed(Stage::Intro2)),
        ),
        Stage::Countdown => {
            if app.countdown().is_holding() {
                Some(time::every(timing.ready_hold).map(|_| Message::ReadyHoldElapsed))
            } else {
                Some(time::every(timing.countdown_tick).map(|_| Message::CountdownTick))
            }
        }
        Stage::VideoReveal => app.media_session().is_playing().then(|| {
            time::every(Duration::from_millis(FRAME_TICK_MS)).map(Message::PlaybackTick)
        }),
        Stage::Bond => {
            Some(time::every(timing.bond_hold).map(|_| Message::StageElapsed(Stage::Bond)))
        }
        Stage::Growing | Stage::Messages | Stage::Final => None,
    }
}
