// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles. Every stage control is a pill; the variants
//! differ in fill and glow.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled pink pill for the primary control of a stage.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PINK_400,
        _ => palette::PINK_600,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::PINK_500,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::GLOW,
        snap: true,
    }
}

/// Outlined pill, pink text on a translucent fill. Used for secondary
/// controls ("skip", "see our bond", "replay").
pub fn outline(_theme: &Theme, status: button::Status) -> button::Style {
    let fill_alpha = match status {
        button::Status::Hovered => 0.25,
        _ => 0.1,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: fill_alpha,
            ..palette::PINK_500
        })),
        text_color: palette::PINK_400,
        border: Border {
            color: Color {
                a: 0.5,
                ..palette::PINK_500
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Dim round control floating over content (close, rotate, carousel arrows).
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => 0.2,
        _ => 0.1,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        text_color: palette::WHITE,
        border: Border {
            color: Color {
                a: 0.15,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Amber pill for the failure acknowledgment's "continue" action.
pub fn ember(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: 0.9,
            ..palette::EMBER
        },
        _ => palette::EMBER,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::EMBER,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Message box tile, tinted by the card's accent and brightened once opened.
pub fn box_tile(accent: Color, opened: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let base_alpha = if opened { 0.28 } else { 0.12 };
        let alpha = match status {
            button::Status::Hovered => base_alpha + 0.08,
            _ => base_alpha,
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..accent })),
            text_color: if opened { palette::TEXT } else { palette::TEXT_DIM },
            border: Border {
                color: Color { a: 0.4, ..accent },
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
