// SPDX-License-Identifier: MPL-2.0
//! Stage enumeration for the staged experience.
//!
//! Exactly one stage is current at a time and transitions only move forward
//! along this fixed order; the only way back is the full restart from
//! [`Stage::Final`].

/// One discrete full-screen phase of the guided experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Intro1,
    Intro2,
    Countdown,
    VideoReveal,
    Growing,
    Messages,
    Bond,
    Final,
}

impl Stage {
    /// The stage a fresh (or fully reset) session starts in.
    pub const FIRST: Self = Stage::Intro1;

    pub const ALL: [Stage; 8] = [
        Stage::Intro1,
        Stage::Intro2,
        Stage::Countdown,
        Stage::VideoReveal,
        Stage::Growing,
        Stage::Messages,
        Stage::Bond,
        Stage::Final,
    ];

    /// The next stage in the fixed order, `None` after [`Stage::Final`].
    pub fn successor(self) -> Option<Stage> {
        match self {
            Stage::Intro1 => Some(Stage::Intro2),
            Stage::Intro2 => Some(Stage::Countdown),
            Stage::Countdown => Some(Stage::VideoReveal),
            Stage::VideoReveal => Some(Stage::Growing),
            Stage::Growing => Some(Stage::Messages),
            Stage::Messages => Some(Stage::Bond),
            Stage::Bond => Some(Stage::Final),
            Stage::Final => None,
        }
    }
}
