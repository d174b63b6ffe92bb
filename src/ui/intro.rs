// SPDX-License-Identifier: MPL-2.0
//! Timed intro frames.

use iced::widget::{center, text};
use iced::Element;

use crate::app::Message;
use crate::content::TextContent;
use crate::ui::design_tokens::{palette, typography};

pub fn first(text_content: &TextContent) -> Element<'static, Message> {
    center(
        text(text_content.intro_first.clone())
            .size(typography::HERO)
            .color(palette::PINK_500)
            .center(),
    )
    .into()
}

pub fn second(text_content: &TextContent) -> Element<'static, Message> {
    center(
        text(text_content.intro_second.clone())
            .size(typography::HERO)
            .color(palette::PURPLE_400)
            .center(),
    )
    .into()
}
