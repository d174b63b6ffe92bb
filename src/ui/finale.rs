// SPDX-License-Identifier: MPL-2.0
//! Final scene: farewell card, photo carousel, and the replay control.

use std::collections::BTreeMap;

use iced::widget::{button, center, column, container, scrollable, text};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::content::Content;
use crate::media::ImageData;
use crate::ui::carousel;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;

pub fn view<'a>(
    content: &'a Content,
    carousel_state: &carousel::State,
    bitmaps: &'a BTreeMap<u32, ImageData>,
) -> Element<'a, Message> {
    let card = column![
        text(content.text.farewell_heading.clone())
            .size(typography::TITLE)
            .color(palette::PINK_500),
        text(content.text.farewell.clone())
            .size(typography::BODY)
            .color(palette::TEXT)
            .center(),
    ]
    .spacing(spacing::MD)
    .align_x(Alignment::Center)
    .max_width(520.0);

    let scene = column![
        carousel::view(carousel_state, &content.photos, bitmaps),
        container(card)
            .style(styles::container::card)
            .padding(spacing::XL),
        button(text("REPLAY STORY").size(typography::SUBTITLE))
            .style(styles::button::outline)
            .padding([spacing::SM, spacing::XL])
            .on_press(Message::Restart),
    ]
    .spacing(spacing::LG)
    .align_x(Alignment::Center);

    center(scrollable(scene)).into()
}
