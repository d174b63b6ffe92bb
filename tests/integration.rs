// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;

use iced_keepsake::app::{App, Message, Stage};
use iced_keepsake::app::config::{self, Config, Timing, TimingConfig};
use iced_keepsake::content;
use iced_keepsake::error::MediaError;
use iced_keepsake::media::MediaSession;
use tempfile::tempdir;

/// Feeds a message to the app, dropping the returned task.
fn feed(app: &mut App, message: Message) {
    let _ = app.update(message);
}

/// Drives a fresh app from the start gate up to the reveal stage.
///
/// The built-in media source does not exist on disk, so the reveal always
/// enters its failure state, which is exactly what the journey tests need
/// to exercise the acknowledge path deterministically.
fn app_at_reveal() -> App {
    let mut app = App::default();
    feed(&mut app, Message::StartPressed);
    feed(&mut app, Message::StageElapsed(Stage::Intro1));
    feed(&mut app, Message::StageElapsed(Stage::Intro2));
    for _ in 0..5 {
        feed(&mut app, Message::CountdownTick);
    }
    assert!(app.countdown().is_holding());
    feed(&mut app, Message::ReadyHoldElapsed);
    assert_eq!(app.stage(), Stage::VideoReveal);
    app
}

#[test]
fn config_round_trips_through_a_custom_directory() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let written = Config {
        timing: TimingConfig {
            intro_first_ms: Some(100),
            bond_hold_ms: Some(250),
            ..TimingConfig::default()
        },
        ..Config::default()
    };
    config::save_with_override(&written, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, written);

    let timing = Timing::from_config(&loaded.timing);
    assert_eq!(timing.intro_first, Duration::from_millis(100));
    assert_eq!(timing.bond_hold, Duration::from_millis(250));
}

#[test]
fn missing_config_falls_back_to_defaults_silently() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, Config::default());
}

#[test]
fn malformed_config_warns_and_keeps_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "timing = 12").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_some());
    assert_eq!(loaded, Config::default());
}

#[test]
fn content_feed_loads_from_a_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("content.toml");
    std::fs::write(
        &path,
        r#"
video = "party.webp"

[text]
title = "A Day"

[[photo]]
id = 1
url = "one.png"
caption = "first"

[[message]]
id = 1
title = "Hello"
content = "There"
color = "purple"
"#,
    )
    .expect("write");

    let (loaded, warning) = content::load(Some(path.as_path()));
    assert!(warning.is_none());
    assert_eq!(loaded.text.title, "A Day");
    assert_eq!(loaded.photos.len(), 1);
    assert_eq!(loaded.messages.len(), 1);
    assert_eq!(loaded.video, std::path::PathBuf::from("party.webp"));
}

#[test]
fn start_gate_blocks_until_pressed() {
    let mut app = App::default();
    assert!(!app.is_started());

    // Timers cannot move a session that has not started.
    feed(&mut app, Message::StageElapsed(Stage::Intro1));
    assert_eq!(app.stage(), Stage::Intro1);
    assert!(!app.is_started());

    feed(&mut app, Message::StartPressed);
    assert!(app.is_started());
    assert_eq!(app.stage(), Stage::Intro1);
}

#[test]
fn intros_advance_in_order() {
    let mut app = App::default();
    feed(&mut app, Message::StartPressed);

    feed(&mut app, Message::StageElapsed(Stage::Intro1));
    assert_eq!(app.stage(), Stage::Intro2);
    feed(&mut app, Message::StageElapsed(Stage::Intro2));
    assert_eq!(app.stage(), Stage::Countdown);
}

#[test]
fn stale_stage_timer_is_ignored() {
    let mut app = App::default();
    feed(&mut app, Message::StartPressed);
    feed(&mut app, Message::StageElapsed(Stage::Intro1));
    assert_eq!(app.stage(), Stage::Intro2);

    // A leftover intro-1 timer must not advance intro-2.
    feed(&mut app, Message::StageElapsed(Stage::Intro1));
    assert_eq!(app.stage(), Stage::Intro2);
}

#[test]
fn ready_hold_fires_only_after_the_countdown_finished() {
    let mut app = App::default();
    feed(&mut app, Message::StartPressed);
    feed(&mut app, Message::StageElapsed(Stage::Intro1));
    feed(&mut app, Message::StageElapsed(Stage::Intro2));

    feed(&mut app, Message::ReadyHoldElapsed);
    assert_eq!(app.stage(), Stage::Countdown);

    for _ in 0..5 {
        feed(&mut app, Message::CountdownTick);
    }
    feed(&mut app, Message::ReadyHoldElapsed);
    assert_eq!(app.stage(), Stage::VideoReveal);
}

#[test]
fn missing_media_fails_and_continue_reaches_growing() {
    let mut app = app_at_reveal();
    assert!(matches!(
        app.media_session(),
        MediaSession::Failed(MediaError::NotFound(_))
    ));

    // Retrying a missing file fails again instead of hanging.
    feed(&mut app, Message::RetryVideo);
    assert!(matches!(app.media_session(), MediaSession::Failed(_)));

    feed(&mut app, Message::ContinueAfterFailure);
    assert_eq!(app.stage(), Stage::Growing);
    assert!(matches!(app.media_session(), MediaSession::Inactive));
}

#[test]
fn skip_leaves_the_reveal() {
    let mut app = app_at_reveal();
    feed(&mut app, Message::SkipVideo);
    assert_eq!(app.stage(), Stage::Growing);
}

#[test]
fn reel_results_outside_the_reveal_are_dropped() {
    let mut app = App::default();
    feed(
        &mut app,
        Message::ReelLoaded(Err(MediaError::DecodeFailed("late".into()))),
    );
    assert!(matches!(app.media_session(), MediaSession::Inactive));
}

#[test]
fn proceed_is_gated_on_every_box() {
    let mut app = app_at_reveal();
    feed(&mut app, Message::ContinueAfterFailure);
    feed(&mut app, Message::OpenGift);
    assert_eq!(app.stage(), Stage::Messages);

    for id in [1, 2, 3, 4] {
        feed(&mut app, Message::OpenBox(id));
        feed(&mut app, Message::CloseBox);
    }
    feed(&mut app, Message::ProceedToBond);
    assert_eq!(app.stage(), Stage::Messages);

    feed(&mut app, Message::OpenBox(5));
    feed(&mut app, Message::CloseBox);
    feed(&mut app, Message::ProceedToBond);
    assert_eq!(app.stage(), Stage::Bond);
}

#[test]
fn unknown_box_ids_are_rejected() {
    let mut app = app_at_reveal();
    feed(&mut app, Message::ContinueAfterFailure);
    feed(&mut app, Message::OpenGift);

    feed(&mut app, Message::OpenBox(99));
    assert_eq!(app.boxes().opened_count(), 0);
}

#[test]
fn full_journey_and_restart() {
    let mut app = app_at_reveal();
    feed(&mut app, Message::ContinueAfterFailure);
    feed(&mut app, Message::OpenGift);
    for id in 1..=5 {
        feed(&mut app, Message::OpenBox(id));
        feed(&mut app, Message::CloseBox);
    }
    feed(&mut app, Message::ProceedToBond);
    assert_eq!(app.stage(), Stage::Bond);
    feed(&mut app, Message::StageElapsed(Stage::Bond));
    assert_eq!(app.stage(), Stage::Final);

    // Carousel wraps in both directions over the five photos.
    feed(&mut app, Message::CarouselPrevious);
    assert_eq!(app.carousel().index(), 4);
    feed(&mut app, Message::CarouselNext);
    assert_eq!(app.carousel().index(), 0);

    // Photo modal opens upright and rotates in quarter turns.
    feed(&mut app, Message::SelectPhoto(201));
    feed(&mut app, Message::RotatePhotoRight);
    let viewer = app.photo_viewer().expect("viewer open");
    assert_eq!(viewer.angle().degrees(), 90);
    feed(&mut app, Message::ClosePhoto);
    assert!(app.photo_viewer().is_none());

    // Replay returns to the start gate with the session forgotten.
    feed(&mut app, Message::Restart);
    assert!(!app.is_started());
    assert_eq!(app.stage(), Stage::Intro1);
    assert_eq!(app.boxes().opened_count(), 0);
    assert_eq!(app.carousel().index(), 0);
}

#[test]
fn restart_clears_the_photo_modal_and_countdown() {
    let mut app = app_at_reveal();
    feed(&mut app, Message::ContinueAfterFailure);
    feed(&mut app, Message::OpenGift);
    for id in 1..=5 {
        feed(&mut app, Message::OpenBox(id));
        feed(&mut app, Message::CloseBox);
    }
    feed(&mut app, Message::ProceedToBond);
    feed(&mut app, Message::StageElapsed(Stage::Bond));
    assert_eq!(app.stage(), Stage::Final);

    // Restart with the photo modal still open.
    feed(&mut app, Message::SelectPhoto(203));
    assert!(app.photo_viewer().is_some());
    feed(&mut app, Message::Restart);

    assert!(app.photo_viewer().is_none());
    assert_eq!(app.countdown().remaining(), 5);
    assert!(!app.countdown().is_holding());
}

#[test]
fn restart_only_works_from_the_final_stage() {
    let mut app = app_at_reveal();
    feed(&mut app, Message::Restart);
    assert!(app.is_started());
    assert_eq!(app.stage(), Stage::VideoReveal);
}
