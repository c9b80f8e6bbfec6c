// SPDX-License-Identifier: MPL-2.0
//! Pupil displacement geometry.
//!
//! Maps the pointer position to a bounded offset for an eye's iris and pupil.
//! The offset always points from the eye center toward the pointer and its
//! magnitude never exceeds [`MAX_PUPIL_TRAVEL`].

use iced::{Point, Rectangle, Vector};

/// Maximum distance in pixels the pupil may travel from the eye center.
pub const MAX_PUPIL_TRAVEL: f32 = 25.0;

/// Returns the geometric center of an eye's bounding box.
#[must_use]
pub fn eye_center(bounds: Rectangle) -> Point {
    Point::new(
        bounds.x + bounds.width / 2.0,
        bounds.y + bounds.height / 2.0,
    )
}

/// Computes the iris/pupil offset for an eye looking at `pointer`.
///
/// The offset is collinear with `pointer - center`: the raw delta when the
/// pointer is within [`MAX_PUPIL_TRAVEL`] of the center, otherwise the delta
/// scaled down to exactly that radius. A pointer sitting on the center
/// yields the zero vector.
#[must_use]
pub fn pupil_offset(pointer: Point, center: Point) -> Vector {
    let delta_x = pointer.x - center.x;
    let delta_y = pointer.y - center.y;

    let distance = delta_x.hypot(delta_y);
    if distance == 0.0 {
        return Vector::new(0.0, 0.0);
    }

    let travel = distance.min(MAX_PUPIL_TRAVEL);
    Vector::new(delta_x / distance * travel, delta_y / distance * travel)
}
