// SPDX-License-Identifier: MPL-2.0
//! Canvas painter for the eye scene.
//!
//! Every draw pass re-derives the eye bounding boxes from the canvas layout,
//! resolves each pupil offset against the stored pointer position, and paints
//! sclera, iris, pupil, and highlight from scratch. Nothing is cached: the
//! pointer changes on nearly every frame anyway and the whole scene is a
//! handful of circles.

use crate::ui::design_tokens::{opacity, palette};
use crate::ui::gaze;
use crate::ui::scene::layout;
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{mouse, Color, Point, Rectangle, Renderer, Theme};

/// Outline width around each sclera.
const EYE_OUTLINE_WIDTH: f32 = 4.0;

/// Iris diameter as a fraction of the eye diameter.
const IRIS_RATIO: f32 = 0.5;

/// Pupil diameter as a fraction of the iris diameter.
const PUPIL_RATIO: f32 = 0.375;

/// Iris shading rings, center color outward to the rim, per eye.
/// Stands in for the original artwork's radial gradients.
const IRIS_RINGS: [[Color; 3]; 2] = [
    [
        palette::IRIS_BLUE_400,
        palette::IRIS_BLUE_600,
        palette::IRIS_BLUE_800,
    ],
    [
        palette::IRIS_GREEN_400,
        palette::IRIS_GREEN_600,
        palette::IRIS_GREEN_800,
    ],
];

/// Pulsing background accent dots: relative position, radius, color, and
/// phase offset in radians.
const ACCENTS: [(f32, f32, f32, Color, f32); 3] = [
    (0.25, 0.25, 4.0, palette::ACCENT_BLUE, 0.0),
    (0.75, 0.7, 2.0, palette::ACCENT_GREEN, 2.1),
    (0.7, 0.22, 6.0, palette::ACCENT_PURPLE, 4.2),
];

/// Immutable snapshot of everything a single frame needs.
pub struct EyesCanvas {
    pub pointer: Point,
    pub pulse_phase: f32,
    pub scheme: ColorScheme,
    pub show_accents: bool,
}

impl EyesCanvas {
    fn draw_accents(&self, frame: &mut Frame, area: Rectangle) {
        for (rel_x, rel_y, radius, color, phase_offset) in ACCENTS {
            let wave = 0.5 * (1.0 + (self.pulse_phase + phase_offset).sin());
            let alpha =
                opacity::ACCENT_DIM + (opacity::ACCENT_BRIGHT - opacity::ACCENT_DIM) * wave;

            let center = Point::new(area.width * rel_x, area.height * rel_y);
            frame.fill(&Path::circle(center, radius), Color { a: alpha, ..color });
        }
    }

    fn draw_eye(&self, frame: &mut Frame, local: Rectangle, window: Rectangle, rings: [Color; 3]) {
        let center = gaze::eye_center(local);
        let radius = local.width / 2.0;

        // Sclera with outline
        let sclera = Path::circle(center, radius);
        frame.fill(&sclera, self.scheme.sclera);
        frame.stroke(
            &sclera,
            Stroke::default()
                .with_width(EYE_OUTLINE_WIDTH)
                .with_color(self.scheme.eye_outline),
        );

        // The pointer lives in window coordinates, so the displacement is
        // resolved against the eye center in window space.
        let offset = gaze::pupil_offset(self.pointer, gaze::eye_center(window));
        let iris_center = Point::new(center.x + offset.x, center.y + offset.y);

        // Iris shading rings, rim inward to the center
        let iris_radius = radius * IRIS_RATIO;
        let ring_radii = [iris_radius, iris_radius * 0.82, iris_radius * 0.55];
        for (color, ring_radius) in rings.iter().rev().zip(ring_radii) {
            frame.fill(&Path::circle(iris_center, ring_radius), *color);
        }

        // Pupil rides with the iris
        let pupil_radius = iris_radius * PUPIL_RATIO;
        frame.fill(&Path::circle(iris_center, pupil_radius), self.scheme.pupil);

        // Light reflection, offset toward the upper left of the pupil
        let highlight_center = Point::new(
            iris_center.x - pupil_radius * 0.45,
            iris_center.y - pupil_radius * 0.45,
        );
        frame.fill(
            &Path::circle(highlight_center, pupil_radius * 0.35),
            Color {
                a: opacity::HIGHLIGHT,
                ..self.scheme.highlight
            },
        );
    }
}

impl<Message> canvas::Program<Message> for EyesCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let local_area = Rectangle::new(Point::ORIGIN, bounds.size());
        frame.fill(&Path::rectangle(Point::ORIGIN, bounds.size()), self.scheme.background);

        if self.show_accents {
            self.draw_accents(&mut frame, local_area);
        }

        // Eye boxes are derived fresh from the live layout on every draw;
        // the window-space copies feed the displacement math.
        let local_eyes = layout::eye_rects(local_area);
        let window_eyes = layout::eye_rects(bounds);

        for (index, (local, window)) in local_eyes.into_iter().zip(window_eyes).enumerate() {
            self.draw_eye(&mut frame, local, window, IRIS_RINGS[index]);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iris_rings_darken_toward_the_rim() {
        for rings in IRIS_RINGS {
            let brightness = |c: Color| c.r + c.g + c.b;
            assert!(brightness(rings[0]) > brightness(rings[2]));
        }
    }

    #[test]
    fn accents_sit_inside_the_unit_square() {
        for (rel_x, rel_y, radius, _, _) in ACCENTS {
            assert!((0.0..=1.0).contains(&rel_x));
            assert!((0.0..=1.0).contains(&rel_y));
            assert!(radius > 0.0);
        }
    }

    #[test]
    fn pupil_fits_inside_the_iris() {
        assert!(PUPIL_RATIO < 1.0);
        assert!(IRIS_RATIO < 1.0);
    }
}
