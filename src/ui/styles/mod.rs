// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles.

pub mod button;
pub mod container;

use iced::Color;

use crate::content::Accent;
use crate::ui::design_tokens::palette;

/// Maps a content accent to its palette color.
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Pink => palette::PINK_500,
        Accent::Purple => palette::PURPLE_400,
    }
}
