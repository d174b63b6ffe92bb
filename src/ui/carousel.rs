// SPDX-License-Identifier: MPL-2.0
//! Photo carousel with wrap-around navigation.

use std::collections::BTreeMap;

use iced::widget::{button, center, column, container, image, row, text};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::content::Photo;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;

/// Which photo the carousel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    index: usize,
}

impl State {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Steps forward, wrapping from the last photo back to the first.
    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    /// Steps backward, wrapping from the first photo to the last.
    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    pub fn selected<'a>(&self, photos: &'a [Photo]) -> Option<&'a Photo> {
        photos.get(self.index)
    }
}

pub fn view<'a>(
    state: &State,
    photos: &'a [Photo],
    bitmaps: &'a BTreeMap<u32, ImageData>,
) -> Element<'a, Message> {
    let Some(photo) = state.selected(photos) else {
        return center(text("No photos yet").color(palette::TEXT_DIM)).into();
    };

    let frame: Element<'a, Message> = match bitmaps.get(&photo.id) {
        Some(bitmap) => image(bitmap.handle.clone())
            .width(Length::Fixed(320.0))
            .height(Length::Fixed(220.0))
            .into(),
        None => container(text("...").color(palette::TEXT_FAINT))
            .width(Length::Fixed(320.0))
            .height(Length::Fixed(220.0))
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .into(),
    };

    let framed = button(frame)
        .style(styles::button::overlay)
        .on_press(Message::SelectPhoto(photo.id));

    let strip = row![
        button(text("<").size(typography::SUBTITLE))
            .style(styles::button::outline)
            .on_press(Message::CarouselPrevious),
        framed,
        button(text(">").size(typography::SUBTITLE))
            .style(styles::button::outline)
            .on_press(Message::CarouselNext),
    ]
    .spacing(spacing::MD)
    .align_y(Alignment::Center);

    let position = format!("{} / {}", state.index() + 1, photos.len());

    column![
        strip,
        text(photo.caption.clone())
            .size(typography::BODY)
            .color(palette::PETAL),
        text(position)
            .size(typography::LABEL)
            .color(palette::TEXT_FAINT),
    ]
    .spacing(spacing::SM)
    .align_x(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_past_the_end() {
        let mut state = State::default();
        state.next(3);
        state.next(3);
        assert_eq!(state.index(), 2);
        state.next(3);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn previous_wraps_before_the_start() {
        let mut state = State::default();
        state.previous(3);
        assert_eq!(state.index(), 2);
        state.previous(3);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn single_photo_never_moves() {
        let mut state = State::default();
        state.next(1);
        state.previous(1);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn empty_collection_is_inert() {
        let mut state = State::default();
        state.next(0);
        state.previous(0);
        assert_eq!(state.index(), 0);
        assert!(state.selected(&[]).is_none());
    }
}
