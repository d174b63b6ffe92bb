// SPDX-License-Identifier: MPL-2.0
//! Quarter-turn rotation state for the photo viewer.

/// A photo rotation, restricted to quarter turns.
///
/// The angle is stored in degrees and always one of 0, 90, 180 or 270.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationAngle(u16);

impl RotationAngle {
    /// Rotates 90 degrees clockwise, wrapping past a full turn.
    pub fn rotate_clockwise(&mut self) {
        self.0 = (self.0 + 90) % 360;
    }

    /// Rotates 90 degrees counterclockwise, wrapping below zero.
    pub fn rotate_counterclockwise(&mut self) {
        self.0 = (self.0 + 270) % 360;
    }

    /// The angle in degrees.
    pub fn degrees(&self) -> u16 {
        self.0
    }

    /// The angle in radians, for the image widget.
    pub fn radians(&self) -> f32 {
        f32::from(self.0).to_radians()
    }

    /// Whether the photo deviates from its upright orientation.
    pub fn is_rotated(&self) -> bool {
        self.0 != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_upright() {
        let angle = RotationAngle::default();
        assert_eq!(angle.degrees(), 0);
        assert!(!angle.is_rotated());
    }

    #[test]
    fn clockwise_steps_through_quarter_turns() {
        let mut angle = RotationAngle::default();
        angle.rotate_clockwise();
        assert_eq!(angle.degrees(), 90);
        angle.rotate_clockwise();
        assert_eq!(angle.degrees(), 180);
        angle.rotate_clockwise();
        assert_eq!(angle.degrees(), 270);
    }

    #[test]
    fn four_rotations_return_to_zero() {
        let mut angle = RotationAngle::default();
        for _ in 0..4 {
            angle.rotate_clockwise();
        }
        assert_eq!(angle.degrees(), 0);
        assert!(!angle.is_rotated());
    }

    #[test]
    fn counterclockwise_wraps_below_zero() {
        let mut angle = RotationAngle::default();
        angle.rotate_counterclockwise();
        assert_eq!(angle.degrees(), 270);
    }

    #[test]
    fn opposite_turns_cancel() {
        let mut angle = RotationAngle::default();
        angle.rotate_clockwise();
        angle.rotate_counterclockwise();
        assert_eq!(angle.degrees(), 0);
    }

    #[test]
    fn radians_match_degrees() {
        let mut angle = RotationAngle::default();
        angle.rotate_clockwise();
        assert!((angle.radians() - std::f32::consts::FRAC_PI_2).abs() < f32::EPSILON);
    }
}
