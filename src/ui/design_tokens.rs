// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the greeting experience.
//!
//! The visual language is a near-black night scene with two accent colors
//! (pink and purple) carried through every stage. All scenes pull colors,
//! spacing, and type sizes from here rather than hard-coding values.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Window background, a hair above pure black so overlays still read.
    pub const NIGHT: Color = Color::from_rgb(0.04, 0.04, 0.06);

    // Accent colors
    pub const PINK_400: Color = Color::from_rgb(1.0, 0.35, 0.62);
    pub const PINK_500: Color = Color::from_rgb(1.0, 0.0, 0.498);
    pub const PINK_600: Color = Color::from_rgb(0.86, 0.15, 0.47);
    pub const PURPLE_400: Color = Color::from_rgb(0.75, 0.52, 0.99);
    pub const PURPLE_500: Color = Color::from_rgb(0.66, 0.33, 0.97);

    // Supporting colors
    pub const PETAL: Color = Color::from_rgb(1.0, 0.82, 0.86);
    pub const GOLD: Color = Color::from_rgb(0.98, 0.8, 0.08);
    pub const SKY: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const LEAF: Color = Color::from_rgb(0.06, 0.72, 0.51);
    pub const EMBER: Color = Color::from_rgb(0.92, 0.45, 0.18);

    // Text tiers on the dark surface
    pub const TEXT: Color = WHITE;
    pub const TEXT_DIM: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.6);
    pub const TEXT_FAINT: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.35);

    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
}

pub mod opacity {
    pub const VEIL: f32 = 0.08;
    pub const CARD: f32 = 0.12;
    pub const BACKDROP: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod typography {
    /// Countdown digit.
    pub const GIANT: f32 = 160.0;

    /// Stage heroes ("Happy Birthday", intro lines).
    pub const HERO: f32 = 56.0;

    /// Scene headings.
    pub const TITLE: f32 = 30.0;

    /// Card titles, captions in the photo modal.
    pub const SUBTITLE: f32 = 22.0;

    /// Body copy.
    pub const BODY: f32 = 16.0;

    /// Uppercase micro-labels and hints.
    pub const LABEL: f32 = 11.0;
}

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 24.0;
    /// Pill shape for the stage controls.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Soft pink glow used behind primary controls.
    pub const GLOW: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..palette::PINK_500
        },
        offset: Vector::ZERO,
        blur_radius: 24.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(typography::GIANT > typography::HERO);
    assert!(typography::HERO > typography::TITLE);
    assert!(typography::TITLE > typography::BODY);
    assert!(opacity::BACKDROP > opacity::CARD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_doubles_from_xs() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn accents_are_valid_colors() {
        for c in [palette::PINK_500, palette::PURPLE_500, palette::GOLD] {
            assert!(c.r >= 0.0 && c.r <= 1.0);
            assert!(c.g >= 0.0 && c.g <= 1.0);
            assert!(c.b >= 0.0 && c.b <= 1.0);
        }
    }
}
