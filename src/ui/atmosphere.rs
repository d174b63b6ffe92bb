// SPDX-License-Identifier: MPL-2.0
//! Decorative particle layer drawn behind every scene.
//!
//! Particles are not simulated: every position is a pure function of the
//! particle index and the elapsed time, so the layer carries no state and
//! redraws from the ambient tick alone.

use std::time::Duration;

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

use crate::app::Message;
use crate::ui::design_tokens::palette;

const SNOWFLAKES: u32 = 40;
const PETALS: u32 = 25;

pub fn view(elapsed: Duration) -> Element<'static, Message> {
    Canvas::new(Atmosphere {
        cache: Cache::default(),
        elapsed: elapsed.as_secs_f32(),
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

struct Atmosphere {
    cache: Cache,
    elapsed: f32,
}

/// Deterministic unit-interval value derived from a seed.
fn hash01(seed: u32) -> f32 {
    let mut x = seed.wrapping_mul(0x9E37_79B9).wrapping_add(0x85EB_CA6B);
    x ^= x >> 16;
    x = x.wrapping_mul(0x7FEB_352D);
    x ^= x >> 15;
    #[allow(clippy::cast_precision_loss)]
    let unit = (x & 0x00FF_FFFF) as f32 / 0x0100_0000 as f32;
    unit
}

/// Position of one falling particle, wrapped to the canvas.
///
/// Each particle has its own horizontal lane, fall speed, phase offset and
/// a lateral sway so the drift never looks gridded.
fn particle_position(index: u32, elapsed: f32, width: f32, height: f32) -> Point {
    let lane = hash01(index);
    let speed = 18.0 + 30.0 * hash01(index.wrapping_add(101));
    let phase = hash01(index.wrapping_add(202)) * height;
    let sway = 12.0 * hash01(index.wrapping_add(303));

    let y = (phase + elapsed * speed) % height.max(1.0);
    let x = (lane * width + sway * (elapsed * 0.8 + lane * 7.0).sin())
        .rem_euclid(width.max(1.0));

    Point::new(x, y)
}

impl<Message> canvas::Program<Message> for Atmosphere {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let (width, height) = (frame.width(), frame.height());

                for i in 0..SNOWFLAKES {
                    let point = particle_position(i, self.elapsed, width, height);
                    let radius = 1.0 + 1.5 * hash01(i.wrapping_add(404));
                    frame.fill(
                        &Path::circle(point, radius),
                        Color {
                            a: 0.20 + 0.25 * hash01(i.wrapping_add(505)),
                            ..palette::WHITE
                        },
                    );
                }

                for i in 0..PETALS {
                    let point =
                        particle_position(i.wrapping_add(1_000), self.elapsed * 0.7, width, height);
                    let radius = 2.0 + 2.0 * hash01(i.wrapping_add(606));
                    frame.fill(
                        &Path::circle(point, radius),
                        Color {
                            a: 0.25,
                            ..palette::PINK_400
                        },
                    );
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_and_in_range() {
        for seed in 0..200 {
            let a = hash01(seed);
            let b = hash01(seed);
            assert_eq!(a, b);
            assert!((0.0..1.0).contains(&a));
        }
    }

    #[test]
    fn neighboring_seeds_diverge() {
        assert!((hash01(1) - hash01(2)).abs() > 1e-3);
    }

    #[test]
    fn positions_stay_inside_the_canvas() {
        for i in 0..SNOWFLAKES {
            for t in [0.0, 1.5, 60.0, 3_600.0] {
                let p = particle_position(i, t, 800.0, 600.0);
                assert!((0.0..800.0).contains(&p.x), "x out of range: {}", p.x);
                assert!((0.0..600.0).contains(&p.y), "y out of range: {}", p.y);
            }
        }
    }

    #[test]
    fn particles_fall_over_time() {
        let early = particle_position(3, 0.0, 800.0, 600.0);
        let later = particle_position(3, 1.0, 800.0, 600.0);
        assert_ne!(early.y, later.y);
    }
}
