//! Pen state carried from one command to the next.

use crate::types::{Color, Point};

/// Where the pen is, what color it draws with, and whether shapes are filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingState {
    pub position: Point,
    pub pen_color: Color,
    pub fill_mode: bool,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            pen_color: Color::BLACK,
            fill_mode: false,
        }
    }
}

impl DrawingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the pen back to the origin, keeping color and fill mode.
    pub fn reset_position(&mut self) {
        self.position = Point::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = DrawingState::new();
        assert_eq!(state.position, Point::new(0.0, 0.0));
        assert_eq!(state.pen_color, Color::BLACK);
        assert!(!state.fill_mode);
    }

    #[test]
    fn reset_position_keeps_pen() {
        let mut state = DrawingState {
            position: Point::new(3.0, 4.0),
            pen_color: Color::RED,
            fill_mode: true,
        };
        state.reset_position();
        assert_eq!(state.position, Point::ZERO);
        assert_eq!(state.pen_color, Color::RED);
        assert!(state.fill_mode);
    }
}
