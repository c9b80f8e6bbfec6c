// SPDX-License-Identifier: MPL-2.0
//! Eye placement within the scene.
//!
//! Derives the two eye bounding boxes from the scene rectangle. This is
//! recomputed from the live layout on every draw, so window resizes reshape
//! the eyes without any cached state.

use iced::{Point, Rectangle, Size};

/// Smallest eye diameter, used when the scene gets cramped.
pub const EYE_DIAMETER_MIN: f32 = 96.0;

/// Largest eye diameter, used on spacious scenes.
pub const EYE_DIAMETER_MAX: f32 = 192.0;

/// Fraction of the shorter scene edge an eye occupies before clamping.
const EYE_SCALE: f32 = 0.35;

/// Gap between the eyes, as a fraction of the eye diameter.
const GAP_RATIO: f32 = 0.5;

/// Returns the bounding boxes of the left and right eye, in the same
/// coordinate space as `area`.
#[must_use]
pub fn eye_rects(area: Rectangle) -> [Rectangle; 2] {
    let diameter = (area.width.min(area.height) * EYE_SCALE)
        .clamp(EYE_DIAMETER_MIN, EYE_DIAMETER_MAX);
    let gap = diameter * GAP_RATIO;

    let center_x = area.x + area.width / 2.0;
    let center_y = area.y + area.height / 2.0;
    let half_span = (diameter + gap) / 2.0;

    let size = Size::new(diameter, diameter);
    let top = center_y - diameter / 2.0;

    [
        Rectangle::new(
            Point::new(center_x - half_span - diameter / 2.0, top),
            size,
        ),
        Rectangle::new(
            Point::new(center_x + half_span - diameter / 2.0, top),
            size,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(width: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(width, height))
    }

    #[test]
    fn eyes_have_equal_square_bounds() {
        let [left, right] = eye_rects(scene(800.0, 600.0));
        assert_eq!(left.width, left.height);
        assert_eq!(left.width, right.width);
        assert_eq!(left.height, right.height);
    }

    #[test]
    fn eyes_are_symmetric_about_the_scene_center() {
        let area = scene(800.0, 600.0);
        let [left, right] = eye_rects(area);

        let center_x = area.width / 2.0;
        let left_center = left.x + left.width / 2.0;
        let right_center = right.x + right.width / 2.0;

        assert!((center_x - left_center - (right_center - center_x)).abs() < 1e-3);
        assert!(left_center < right_center);
    }

    #[test]
    fn eyes_do_not_overlap() {
        let [left, right] = eye_rects(scene(800.0, 600.0));
        assert!(left.x + left.width < right.x);
    }

    #[test]
    fn eyes_are_vertically_centered() {
        let area = scene(640.0, 480.0);
        let [left, _] = eye_rects(area);
        let eye_center_y = left.y + left.height / 2.0;
        assert!((eye_center_y - area.height / 2.0).abs() < 1e-3);
    }

    #[test]
    fn diameter_clamps_on_large_scenes() {
        let [left, _] = eye_rects(scene(4000.0, 3000.0));
        assert_eq!(left.width, EYE_DIAMETER_MAX);
    }

    #[test]
    fn diameter_clamps_on_small_scenes() {
        let [left, _] = eye_rects(scene(120.0, 90.0));
        assert_eq!(left.width, EYE_DIAMETER_MIN);
    }

    #[test]
    fn layout_respects_the_scene_origin() {
        let offset_area = Rectangle::new(Point::new(100.0, 50.0), Size::new(800.0, 600.0));
        let origin_area = scene(800.0, 600.0);

        let [offset_left, _] = eye_rects(offset_area);
        let [origin_left, _] = eye_rects(origin_area);

        assert!((offset_left.x - origin_left.x - 100.0).abs() < 1e-3);
        assert!((offset_left.y - origin_left.y - 50.0).abs() < 1e-3);
    }
}
