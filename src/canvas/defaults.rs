//! Default canvas settings (pixels)

use crate::types::Color;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 450;
pub const STROKE_WIDTH: f32 = 1.0;
/// What `clear` paints with.
pub const BACKGROUND: Color = Color::WHITE;
