// SPDX-License-Identifier: MPL-2.0
//! Pointer tracking state
//!
//! Holds the most recent cursor position in window coordinates. The position
//! starts at the origin and is overwritten on every cursor-move event; it is
//! kept when the cursor leaves the window so the eyes hold their last gaze.

use iced::Point;

/// Latest known pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Point,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
        }
    }
}

impl PointerState {
    /// Overwrites the stored position with the latest cursor coordinates.
    pub fn record(&mut self, position: Point) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pointer_starts_at_origin() {
        let state = PointerState::default();
        assert_eq!(state.position, Point::ORIGIN);
    }

    #[test]
    fn record_overwrites_position() {
        let mut state = PointerState::default();
        state.record(Point::new(120.0, 48.0));
        assert_eq!(state.position, Point::new(120.0, 48.0));

        state.record(Point::new(3.0, 4.0));
        assert_eq!(state.position, Point::new(3.0, 4.0));
    }
}
