// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Root window surface, near-black.
pub fn night(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NIGHT)),
        text_color: Some(palette::TEXT),
        ..container::Style::default()
    }
}

/// Near-opaque black backdrop behind modal overlays.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        text_color: Some(palette::TEXT),
        ..container::Style::default()
    }
}

/// Translucent rounded card (final message, detail view).
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CARD,
            ..palette::WHITE
        })),
        text_color: Some(palette::TEXT),
        border: Border {
            color: Color {
                a: 0.15,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..container::Style::default()
    }
}

/// Thin framed well holding a photo placeholder.
pub fn photo_frame(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: 0.15, ..accent })),
        text_color: Some(palette::TEXT),
        border: Border {
            color: Color { a: 0.6, ..accent },
            width: 2.0,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}
