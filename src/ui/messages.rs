// SPDX-License-Identifier: MPL-2.0
//! Message boxes scene: five sealed boxes, an opened-set, and a detail card.

use std::collections::{BTreeMap, BTreeSet};

use iced::widget::{button, center, column, container, image, row, text};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::content::{Content, MessageCard, Photo};
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;

/// Which boxes were opened, and which card is currently on screen.
///
/// A box counts as opened once its card has been dismissed, and the opened
/// set only ever grows while the scene is active.
#[derive(Debug, Clone, Default)]
pub struct State {
    opened: BTreeSet<u32>,
    active: Option<u32>,
}

impl State {
    /// Shows a box's card.
    pub fn open(&mut self, id: u32) {
        self.active = Some(id);
    }

    /// Dismisses the detail card and marks the box opened.
    pub fn close(&mut self) {
        if let Some(id) = self.active.take() {
            self.opened.insert(id);
        }
    }

    pub fn active(&self) -> Option<u32> {
        self.active
    }

    pub fn is_opened(&self, id: u32) -> bool {
        self.opened.contains(&id)
    }

    pub fn opened_count(&self) -> usize {
        self.opened.len()
    }

    /// Whether every listed box has been opened at least once.
    pub fn all_opened(&self, ids: impl IntoIterator<Item = u32>) -> bool {
        ids.into_iter().all(|id| self.opened.contains(&id))
    }

    pub fn reset(&mut self) {
        self.opened.clear();
        self.active = None;
    }
}

pub fn view<'a>(state: &State, content: &'a Content) -> Element<'a, Message> {
    let tiles = content
        .messages
        .iter()
        .fold(row![].spacing(spacing::MD), |tiles, card| {
            tiles.push(tile(card, state.is_opened(card.id)))
        });

    let mut scene = column![
        text(content.text.messages_heading.clone())
            .size(typography::TITLE)
            .color(palette::TEXT),
        text(content.text.messages_hint.clone())
            .size(typography::BODY)
            .color(palette::TEXT_DIM),
        tiles,
    ]
    .spacing(spacing::LG)
    .align_x(Alignment::Center);

    if state.all_opened(content.message_ids()) {
        scene = scene.push(
            button(text("SEE OUR BOND").size(typography::SUBTITLE))
                .style(styles::button::primary)
                .padding([spacing::SM, spacing::XL])
                .on_press(Message::ProceedToBond),
        );
    }

    center(scene).into()
}

fn tile(card: &MessageCard, opened: bool) -> Element<'static, Message> {
    let glyph = if opened { "\u{1F49D}" } else { "\u{1F381}" };
    let label = if opened { "UNLOCKED" } else { "LOCKED" };

    let face = column![
        text(glyph).size(typography::TITLE),
        text(card.title.clone())
            .size(typography::BODY)
            .color(palette::TEXT),
        text(label)
            .size(typography::LABEL)
            .color(palette::TEXT_FAINT),
    ]
    .spacing(spacing::XS)
    .align_x(Alignment::Center);

    button(face)
        .style(styles::button::box_tile(
            styles::accent_color(card.color),
            opened,
        ))
        .padding(spacing::MD)
        .on_press(Message::OpenBox(card.id))
        .into()
}

/// Modal card shown while a box is open.
pub fn detail<'a>(
    card: &'a MessageCard,
    photo: Option<&'a Photo>,
    bitmaps: &'a BTreeMap<u32, ImageData>,
) -> Element<'a, Message> {
    let mut body = column![
        text(card.title.clone())
            .size(typography::TITLE)
            .color(styles::accent_color(card.color)),
        text(card.content.clone())
            .size(typography::BODY)
            .color(palette::TEXT),
    ]
    .spacing(spacing::MD)
    .align_x(Alignment::Center)
    .max_width(460.0);

    if let Some(photo) = photo {
        if let Some(bitmap) = bitmaps.get(&photo.id) {
            let framed = container(
                image(bitmap.handle.clone())
                    .width(Length::Fixed(220.0))
                    .height(Length::Fixed(160.0)),
            )
            .style(styles::container::photo_frame(styles::accent_color(
                card.color,
            )))
            .padding(spacing::XS);

            body = body.push(
                button(framed)
                    .style(styles::button::overlay)
                    .on_press(Message::SelectPhoto(photo.id)),
            );
        }
    }

    body = body.push(
        button(text("Close").size(typography::BODY))
            .style(styles::button::outline)
            .padding([spacing::XS, spacing::LG])
            .on_press(Message::CloseBox),
    );

    center(
        container(body)
            .style(styles::container::card)
            .padding(spacing::XL),
    )
    .style(styles::container::backdrop)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_shows_the_card_without_marking_the_box() {
        let mut state = State::default();
        state.open(3);
        assert_eq!(state.active(), Some(3));
        assert!(!state.is_opened(3));
    }

    #[test]
    fn closing_marks_the_box_opened() {
        let mut state = State::default();
        state.open(1);
        state.close();
        assert!(state.active().is_none());
        assert!(state.is_opened(1));
    }

    #[test]
    fn reopening_is_idempotent() {
        let mut state = State::default();
        state.open(2);
        state.close();
        state.open(2);
        state.close();
        assert_eq!(state.opened_count(), 1);
    }

    #[test]
    fn all_opened_requires_every_id() {
        let mut state = State::default();
        for id in [1, 2, 3, 4] {
            state.open(id);
            state.close();
        }
        assert!(!state.all_opened(1..=5));
        state.open(5);
        state.close();
        assert!(state.all_opened(1..=5));
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = State::default();
        state.open(1);
        state.reset();
        assert_eq!(state.opened_count(), 0);
        assert!(state.active().is_none());
    }
}
