// SPDX-License-Identifier: MPL-2.0
//! Scene dispatch and overlay stacking.

use super::{App, Message, Stage};
use crate::ui::{
    atmosphere, bond, countdown, finale, growth, intro, messages, photo_viewer, start, styles,
    video,
};
use iced::widget::{container, stack};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let content = app.content();

    let scene: Element<'_, Message> = if !app.is_started() {
        start::view(&content.text)
    } else {
        match app.stage() {
            Stage::Intro1 => intro::first(&content.text),
            Stage::Intro2 => intro::second(&content.text),
            Stage::Countdown => countdown::view(app.countdown()),
            Stage::VideoReveal => video::view(app.media_session(), app.media_source()),
            Stage::Growing => growth::view(&content.text, app.stage_elapsed()),
            Stage::Messages => messages::view(app.boxes(), content),
            Stage::Bond => bond::view(&content.text),
            Stage::Final => finale::view(content, app.carousel(), app.photo_bitmaps()),
        }
    };

    let backdrop = container("")
        .style(styles::container::night)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = stack![backdrop, atmosphere::view(app.ambient_elapsed()), scene];

    // Message detail card floats above the box grid.
    if app.stage() == Stage::Messages {
        if let Some(card) = app.boxes().active().and_then(|id| content.message(id)) {
            let index = content
                .messages
                .iter()
                .position(|m| m.id == card.id)
                .unwrap_or(0);
            layers = layers.push(messages::detail(
                card,
                content.photo_for_box(index),
                app.photo_bitmaps(),
            ));
        }
    }

    // The photo modal sits on top of everything.
    if let Some(viewer) = app.photo_viewer() {
        layers = layers.push(photo_viewer::view(viewer, app.photo_bitmaps()));
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}
