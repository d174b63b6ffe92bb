// SPDX-License-Identifier: MPL-2.0
//! Growing scene: a blooming flower drawn on a canvas, then the gift control.

use std::f32::consts::TAU;
use std::time::Duration;

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::{button, center, column, text};
use iced::{mouse, Alignment, Color, Element, Length, Point, Rectangle, Renderer, Theme};

use crate::app::Message;
use crate::content::TextContent;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;

/// How long the bloom takes to fully open.
const BLOOM: Duration = Duration::from_millis(2_800);

const PETALS: usize = 6;

pub fn view(text_content: &TextContent, elapsed: Duration) -> Element<'static, Message> {
    let progress = bloom_progress(elapsed);

    let scene = column![
        Bloom::new(progress).into_element(),
        text(text_content.growing_kicker.clone())
            .size(typography::BODY)
            .color(palette::TEXT_DIM),
        text(text_content.growing_heading.clone())
            .size(typography::TITLE)
            .color(palette::TEXT),
        text(text_content.growing_name.clone())
            .size(typography::HERO)
            .color(palette::PINK_500),
        button(text("OPEN THE GIFT").size(typography::SUBTITLE))
            .style(styles::button::primary)
            .padding([spacing::SM, spacing::XL])
            .on_press(Message::OpenGift),
    ]
    .spacing(spacing::MD)
    .align_x(Alignment::Center);

    center(scene).into()
}

/// Normalized bloom progress, saturating at one.
fn bloom_progress(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() / BLOOM.as_secs_f32()).min(1.0)
}

/// Canvas widget drawing the flower: the stem rises first, then the petals
/// unfold once the stem is in place.
struct Bloom {
    cache: Cache,
    progress: f32,
}

impl Bloom {
    fn new(progress: f32) -> Self {
        Self {
            cache: Cache::default(),
            progress,
        }
    }

    fn into_element(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(200.0))
            .height(Length::Fixed(220.0))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Bloom {
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
                let base = Point::new(frame.width() / 2.0, frame.height() - 10.0);
                let crown_y = 60.0;

                // The first half of the bloom grows the stem.
                let stem_progress = (self.progress * 2.0).min(1.0);
                let tip = Point::new(
                    base.x,
                    base.y - (base.y - crown_y) * stem_progress,
                );

                let stem = Path::line(base, tip);
                frame.stroke(
                    &stem,
                    Stroke::default().with_width(4.0).with_color(palette::LEAF),
                );

                // The second half unfolds the petals around the tip.
                let petal_progress = ((self.progress - 0.5) * 2.0).max(0.0);
                if petal_progress > 0.0 {
                    let reach = 34.0 * petal_progress;
                    for i in 0..PETALS {
                        #[allow(clippy::cast_precision_loss)]
                        let angle = TAU * i as f32 / PETALS as f32;
                        let petal_center = Point::new(
                            tip.x + reach * angle.cos(),
                            tip.y + reach * angle.sin(),
                        );
                        let petal = Path::circle(petal_center, 14.0 * petal_progress);
                        frame.fill(
                            &petal,
                            Color {
                                a: 0.85,
                                ..palette::PINK_400
                            },
                        );
                    }

                    let heart = Path::circle(tip, 10.0 * petal_progress);
                    frame.fill(&heart, palette::GOLD);
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_saturates_at_one() {
        assert_eq!(bloom_progress(Duration::from_secs(60)), 1.0);
    }

    #[test]
    fn progress_starts_at_zero() {
        assert_eq!(bloom_progress(Duration::ZERO), 0.0);
    }

    #[test]
    fn progress_is_monotonic() {
        let early = bloom_progress(Duration::from_millis(500));
        let late = bloom_progress(Duration::from_millis(2_000));
        assert!(early < late);
    }
}
