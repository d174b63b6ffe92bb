// SPDX-License-Identifier: MPL-2.0
//! Small view-state domain types shared between scenes.

mod rotation;

pub use rotation::RotationAngle;
