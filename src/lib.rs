// SPDX-License-Identifier: MPL-2.0
//! `iced_keepsake` plays a staged, animated greeting experience built with
//! the Iced GUI framework.
//!
//! A single session walks through intro text, a countdown, a media reveal,
//! a set of tappable message boxes, and a final card with a photo carousel,
//! decorated by a particle layer. Nothing is persisted; a restart rebuilds
//! the whole session from scratch.

pub mod app;
pub mod content;
pub mod error;
pub mod icon;
pub mod media;
pub mod ui;
