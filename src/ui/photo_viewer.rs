// SPDX-License-Identifier: MPL-2.0
//! Fullscreen photo modal with quarter-turn rotation.

use std::collections::BTreeMap;

use iced::widget::{button, center, column, container, image, row, text};
use iced::{Alignment, Element, Length, Radians, Rotation};

use crate::app::Message;
use crate::content::Photo;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::state::RotationAngle;
use crate::ui::styles;

/// The photo on display and its current orientation.
#[derive(Debug, Clone)]
pub struct State {
    photo: Photo,
    angle: RotationAngle,
}

impl State {
    /// Opens the viewer on a photo, upright.
    pub fn new(photo: Photo) -> Self {
        Self {
            photo,
            angle: RotationAngle::default(),
        }
    }

    pub fn photo(&self) -> &Photo {
        &self.photo
    }

    pub fn angle(&self) -> RotationAngle {
        self.angle
    }

    pub fn rotate_left(&mut self) {
        self.angle.rotate_counterclockwise();
    }

    pub fn rotate_right(&mut self) {
        self.angle.rotate_clockwise();
    }
}

pub fn view<'a>(state: &'a State, bitmaps: &'a BTreeMap<u32, ImageData>) -> Element<'a, Message> {
    let photo = state.photo();

    let picture: Element<'a, Message> = match bitmaps.get(&photo.id) {
        Some(bitmap) => {
            let (width, height) = fit_within(bitmap.width, bitmap.height, 480.0, 360.0);
            image(bitmap.handle.clone())
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .rotation(Rotation::Floating(Radians(state.angle().radians())))
                .into()
        }
        None => text("Photo still loading...")
            .size(typography::BODY)
            .color(palette::TEXT_DIM)
            .into(),
    };

    let controls = row![
        button(text("\u{27F2}").size(typography::SUBTITLE))
            .style(styles::button::overlay)
            .on_press(Message::RotatePhotoLeft),
        button(text("\u{27F3}").size(typography::SUBTITLE))
            .style(styles::button::overlay)
            .on_press(Message::RotatePhotoRight),
        button(text("\u{2715}").size(typography::SUBTITLE))
            .style(styles::button::overlay)
            .on_press(Message::ClosePhoto),
    ]
    .spacing(spacing::MD);

    let body = column![
        controls,
        picture,
        text(photo.caption.clone())
            .size(typography::BODY)
            .color(palette::PETAL),
    ]
    .spacing(spacing::MD)
    .align_x(Alignment::Center);

    center(
        container(body)
            .style(styles::container::card)
            .padding(spacing::XL),
    )
    .style(styles::container::backdrop)
    .into()
}

/// Scales photo dimensions to fit inside the modal, preserving aspect ratio.
/// Small photos are shown at their native size rather than upscaled.
fn fit_within(width: u32, height: u32, max_width: f32, max_height: f32) -> (f32, f32) {
    if width == 0 || height == 0 {
        return (max_width, max_height);
    }
    #[allow(clippy::cast_precision_loss)]
    let (w, h) = (width as f32, height as f32);
    let scale = (max_width / w).min(max_height / h).min(1.0);
    (w * scale, h * scale)
}
