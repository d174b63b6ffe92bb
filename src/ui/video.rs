// SPDX-License-Identifier: MPL-2.0
//! Fullscreen reveal: the playing reel, or the failure panel.

use std::path::Path;

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, center, column, container, image, row, stack, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::app::Message;
use crate::error::MediaError;
use crate::media::{MediaSession, Playback};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;

pub fn view<'a>(session: &'a MediaSession, source: &'a Path) -> Element<'a, Message> {
    match session {
        MediaSession::Inactive | MediaSession::Loading => center(
            text("Loading the surprise...")
                .size(typography::SUBTITLE)
                .color(palette::TEXT_DIM),
        )
        .into(),
        MediaSession::Active(playback) => playing(playback),
        MediaSession::Failed(error) => failed(error, source),
    }
}

fn playing(playback: &Playback) -> Element<'_, Message> {
    let frame: Element<'_, Message> = match playback.current_frame() {
        Some(frame) => image(frame.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => center(text("...").color(palette::TEXT_FAINT)).into(),
    };

    let skip = container(
        button(text("Skip").size(typography::BODY))
            .style(styles::button::overlay)
            .padding([spacing::XS, spacing::LG])
            .on_press(Message::SkipVideo),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom)
    .padding(spacing::LG);

    stack![frame, skip].into()
}

fn failed<'a>(error: &'a MediaError, source: &'a Path) -> Element<'a, Message> {
    let panel = column![
        text(error.headline())
            .size(typography::TITLE)
            .color(palette::ERROR_500),
        text(error.to_string())
            .size(typography::BODY)
            .color(palette::TEXT_DIM),
        text(source.display().to_string())
            .size(typography::LABEL)
            .color(palette::TEXT_FAINT),
        row![
            button(text("Try Again").size(typography::BODY))
                .style(styles::button::outline)
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::RetryVideo),
            button(text("Continue the Story").size(typography::BODY))
                .style(styles::button::ember)
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::ContinueAfterFailure),
        ]
        .spacing(spacing::MD),
    ]
    .spacing(spacing::MD)
    .align_x(Alignment::Center);

    center(
        container(panel)
            .style(styles::container::card)
            .padding(spacing::XL),
    )
    .into()
}
