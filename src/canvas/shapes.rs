//! Shape types emitted by drawing commands
//!
//! Each shape knows its bounding box and how to stroke or fill itself on a
//! [`Canvas`]. `ShapeEnum` forwards to the concrete shape through
//! `enum_dispatch`.

use std::fmt;

use enum_dispatch::enum_dispatch;
use glam::dvec2;

use super::Canvas;
use crate::types::{Color, Point};

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    /// Axis-aligned bounds as `(min, max)` corners.
    fn bounds(&self) -> (Point, Point);

    /// Outline the shape.
    fn stroke(&self, canvas: &mut dyn Canvas, color: Color);

    /// Paint the interior of the shape.
    fn fill(&self, canvas: &mut dyn Canvas, color: Color);
}

/// Any shape a command can produce
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEnum {
    Rectangle(RectangleShape),
    Ellipse(EllipseShape),
    Polygon(PolygonShape),
}

impl fmt::Display for ShapeEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeEnum::Rectangle(s) => fmt::Display::fmt(s, f),
            ShapeEnum::Ellipse(s) => fmt::Display::fmt(s, f),
            ShapeEnum::Polygon(s) => fmt::Display::fmt(s, f),
        }
    }
}

fn fmt_point(f: &mut fmt::Formatter<'_>, p: Point) -> fmt::Result {
    write!(f, "({}, {})", p.x, p.y)
}

// ============================================================================
// Rectangle
// ============================================================================

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleShape {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl RectangleShape {
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }
}

impl Shape for RectangleShape {
    fn bounds(&self) -> (Point, Point) {
        let far = self.origin + dvec2(self.width, self.height);
        (self.origin.min(far), self.origin.max(far))
    }

    fn stroke(&self, canvas: &mut dyn Canvas, color: Color) {
        canvas.stroke_rectangle(self.origin, self.width, self.height, color);
    }

    fn fill(&self, canvas: &mut dyn Canvas, color: Color) {
        canvas.fill_rectangle(self.origin, self.width, self.height, color);
    }
}

impl fmt::Display for RectangleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("rectangle at ")?;
        fmt_point(f, self.origin)?;
        write!(f, " size {}x{}", self.width, self.height)
    }
}

// ============================================================================
// Ellipse
// ============================================================================

/// Ellipse given by its center and radii
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseShape {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl EllipseShape {
    pub fn circle(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius_x: radius,
            radius_y: radius,
        }
    }
}

impl Shape for EllipseShape {
    fn bounds(&self) -> (Point, Point) {
        let r = dvec2(self.radius_x, self.radius_y).abs();
        (self.center - r, self.center + r)
    }

    fn stroke(&self, canvas: &mut dyn Canvas, color: Color) {
        canvas.stroke_ellipse(self.center, self.radius_x, self.radius_y, color);
    }

    fn fill(&self, canvas: &mut dyn Canvas, color: Color) {
        canvas.fill_ellipse(self.center, self.radius_x, self.radius_y, color);
    }
}

impl fmt::Display for EllipseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ellipse at ")?;
        fmt_point(f, self.center)?;
        write!(f, " radius {}x{}", self.radius_x, self.radius_y)
    }
}

// ============================================================================
// Polygon
// ============================================================================

/// Closed polygon through its vertices, in order
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub points: Vec<Point>,
}

impl PolygonShape {
    /// Offsets of the fixed isosceles triangle from its apex.
    pub const TRIANGLE_LEGS: [Point; 2] = [Point::new(50.0, 100.0), Point::new(-50.0, 100.0)];

    /// The isosceles triangle hanging down from `apex`.
    pub fn triangle(apex: Point) -> Self {
        let [right, left] = Self::TRIANGLE_LEGS;
        Self {
            points: vec![apex, apex + right, apex + left],
        }
    }
}

impl Shape for PolygonShape {
    fn bounds(&self) -> (Point, Point) {
        let first = self.points.first().copied().unwrap_or(Point::ZERO);
        self.points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)))
    }

    fn stroke(&self, canvas: &mut dyn Canvas, color: Color) {
        canvas.stroke_polygon(&self.points, color);
    }

    fn fill(&self, canvas: &mut dyn Canvas, color: Color) {
        canvas.fill_polygon(&self.points, color);
    }
}

impl fmt::Display for PolygonShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("polygon")?;
        for p in &self.points {
            f.write_str(" ")?;
            fmt_point(f, *p)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
