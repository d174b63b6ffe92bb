// SPDX-License-Identifier: MPL-2.0
//! Window icon rendering.
//!
//! The heart icon ships as an embedded SVG and is rasterized once at startup
//! with `resvg`. Any parse or render failure just leaves the window without
//! an icon.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/iced_keepsake.svg");
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG to an RGBA window icon.
pub fn load_window_icon() -> Option<Icon> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let source_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / source_size.width(),
        ICON_SIZE as f32 / source_size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}
