// SPDX-License-Identifier: MPL-2.0
//! Countdown scene: a shrinking digit followed by a short "Ready?" hold.

use iced::widget::{center, column, text};
use iced::Element;

use crate::app::config::defaults::COUNTDOWN_START;
use crate::app::Message;
use crate::ui::design_tokens::{palette, spacing, typography};

/// Countdown progress, driven by the per-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    remaining: u8,
    holding: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            remaining: COUNTDOWN_START,
            holding: false,
        }
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances one tick. Reaching zero switches to the hold frame.
    pub fn tick(&mut self) {
        if self.remaining > 0 {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.holding = true;
            }
        }
    }

    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Whether the countdown has finished counting and is holding on "Ready?".
    pub fn is_holding(&self) -> bool {
        self.holding
    }
}

pub fn view(state: &State) -> Element<'static, Message> {
    let content: Element<'static, Message> = if state.is_holding() {
        text("Ready?")
            .size(typography::HERO)
            .color(palette::PETAL)
            .into()
    } else {
        // Odd digits glow pink, even ones purple.
        let color = if state.remaining() % 2 == 1 {
            palette::PINK_500
        } else {
            palette::PURPLE_400
        };

        text(state.remaining().to_string())
            .size(typography::GIANT)
            .color(color)
            .into()
    };

    center(column![content].spacing(spacing::MD)).into()
}
