// SPDX-License-Identifier: MPL-2.0
//! Scene views and shared UI infrastructure.

pub mod atmosphere;
pub mod bond;
pub mod carousel;
pub mod countdown;
pub mod design_tokens;
pub mod finale;
pub mod growth;
pub mod intro;
pub mod messages;
pub mod photo_viewer;
pub mod start;
pub mod state;
pub mod styles;
pub mod video;
