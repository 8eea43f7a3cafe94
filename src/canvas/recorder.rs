//! A canvas that remembers what was drawn on it.

use super::shapes::{EllipseShape, PolygonShape, RectangleShape, Shape, ShapeEnum};
use super::{Canvas, DrawOp};
use crate::types::{Color, Point};

/// Display-list canvas.
///
/// `clear` wipes everything recorded so far, like it wipes pixels on a real
/// surface, then records itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Recorded shapes, skipping clears.
    pub fn shapes(&self) -> impl Iterator<Item = &ShapeEnum> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Shape { shape, .. } => Some(shape),
            DrawOp::Clear(_) => None,
        })
    }

    /// Union of all recorded shape bounds, or `None` if nothing was drawn.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        self.shapes()
            .map(|shape| shape.bounds())
            .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
    }

    /// Replay the display list onto another canvas.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        for op in &self.ops {
            op.paint(canvas);
        }
    }

    /// The display list, one operation per line.
    pub fn to_text(&self) -> String {
        self.ops.iter().map(|op| format!("{op}\n")).collect()
    }

    fn push(&mut self, shape: impl Into<ShapeEnum>, color: Color, filled: bool) {
        self.ops.push(DrawOp::Shape {
            shape: shape.into(),
            color,
            filled,
        });
    }
}

impl Canvas for Recorder {
    fn clear(&mut self, color: Color) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear(color));
    }

    fn stroke_rectangle(&mut self, origin: Point, width: f64, height: f64, color: Color) {
        self.push(RectangleShape::new(origin, width, height), color, false);
    }

    fn fill_rectangle(&mut self, origin: Point, width: f64, height: f64, color: Color) {
        self.push(RectangleShape::new(origin, width, height), color, true);
    }

    fn stroke_ellipse(&mut self, center: Point, radius_x: f64, radius_y: f64, color: Color) {
        let shape = EllipseShape {
            center,
            radius_x,
            radius_y,
        };
        self.push(shape, color, false);
    }

    fn fill_ellipse(&mut self, center: Point, radius_x: f64, radius_y: f64, color: Color) {
        let shape = EllipseShape {
            center,
            radius_x,
            radius_y,
        };
        self.push(shape, color, true);
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color) {
        let shape = PolygonShape {
            points: points.to_vec(),
        };
        self.push(shape, color, false);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let shape = PolygonShape {
            points: points.to_vec(),
        };
        self.push(shape, color, true);
    }
}
