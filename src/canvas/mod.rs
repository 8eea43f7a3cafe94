//! Drawing surfaces
//!
//! This module is organized into submodules:
//! - `defaults`: Default canvas size and pen settings
//! - `shapes`: Geometry emitted by the interpreter
//! - `recorder`: A canvas that keeps a display list
//! - `pixmap`: A raster canvas backed by tiny-skia

pub mod defaults;
pub mod pixmap;
pub mod recorder;
pub mod shapes;

use std::fmt;

pub use pixmap::PixmapCanvas;
pub use recorder::Recorder;
pub use shapes::{EllipseShape, PolygonShape, RectangleShape, Shape, ShapeEnum};

use crate::types::{Color, Point};

/// A 2D surface the interpreter paints onto. Nothing is ever read back.
pub trait Canvas {
    /// Paint the whole surface with `color`.
    fn clear(&mut self, color: Color);

    fn stroke_rectangle(&mut self, origin: Point, width: f64, height: f64, color: Color);

    fn fill_rectangle(&mut self, origin: Point, width: f64, height: f64, color: Color);

    fn stroke_ellipse(&mut self, center: Point, radius_x: f64, radius_y: f64, color: Color);

    fn fill_ellipse(&mut self, center: Point, radius_x: f64, radius_y: f64, color: Color);

    fn stroke_polygon(&mut self, points: &[Point], color: Color);

    fn fill_polygon(&mut self, points: &[Point], color: Color);
}

/// One drawing operation, as produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    Shape {
        shape: ShapeEnum,
        color: Color,
        filled: bool,
    },
}

impl DrawOp {
    /// Replay this operation onto a canvas.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        match self {
            DrawOp::Clear(color) => canvas.clear(*color),
            DrawOp::Shape {
                shape,
                color,
                filled: true,
            } => shape.fill(canvas, *color),
            DrawOp::Shape {
                shape,
                color,
                filled: false,
            } => shape.stroke(canvas, *color),
        }
    }
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOp::Clear(color) => write!(f, "clear {color}"),
            DrawOp::Shape {
                shape,
                color,
                filled,
            } => {
                let verb = if *filled { "fill" } else { "stroke" };
                write!(f, "{verb} {shape} {color}")
            }
        }
    }
}

/// Size and pen settings for raster canvases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasOptions {
    pub width: u32,
    pub height: u32,
    /// Outline width in pixels.
    pub stroke_width: f32,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
            height: defaults::HEIGHT,
            stroke_width: defaults::STROKE_WIDTH,
        }
    }
}
