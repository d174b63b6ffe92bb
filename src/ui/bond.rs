// SPDX-License-Identifier: MPL-2.0
//! Bond interlude: a single held frame before the finale.

use iced::widget::{center, column, text};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::content::TextContent;
use crate::ui::design_tokens::{palette, spacing, typography};

pub fn view(text_content: &TextContent) -> Element<'static, Message> {
    center(
        column![
            text("\u{2665}").size(typography::GIANT).color(palette::PINK_500),
            text(text_content.bond_line.clone())
                .size(typography::SUBTITLE)
                .color(palette::PETAL)
                .center(),
        ]
        .spacing(spacing::LG)
        .align_x(Alignment::Center),
    )
    .into()
}
