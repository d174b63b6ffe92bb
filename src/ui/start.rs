// SPDX-License-Identifier: MPL-2.0
//! Start gate shown before the story begins.

use iced::widget::{button, center, column, text};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::content::TextContent;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;

pub fn view(text_content: &TextContent) -> Element<'static, Message> {
    let gate = column![
        text("\u{2665}").size(typography::HERO).color(palette::PINK_500),
        text(text_content.title.clone())
            .size(typography::TITLE)
            .color(palette::TEXT),
        text(text_content.tagline.clone())
            .size(typography::BODY)
            .color(palette::TEXT_DIM),
        button(text("Start the Magic").size(typography::SUBTITLE))
            .style(styles::button::primary)
            .padding([spacing::SM, spacing::XL])
            .on_press(Message::StartPressed),
        text(text_content.sound_hint.clone())
            .size(typography::LABEL)
            .color(palette::TEXT_FAINT),
    ]
    .spacing(spacing::LG)
    .align_x(Alignment::Center);

    center(gate).into()
}
