//! Raster canvas backed by tiny-skia

use std::path::Path;

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::{Canvas, CanvasOptions};
use crate::errors::PendrawError;
use crate::types::{Color, Point};

/// A pixel canvas that can be saved as PNG.
pub struct PixmapCanvas {
    pixmap: Pixmap,
    stroke: Stroke,
}

impl PixmapCanvas {
    /// Create a canvas painted with the default background.
    pub fn new(options: &CanvasOptions) -> Result<Self, PendrawError> {
        let pixmap = Pixmap::new(options.width, options.height).ok_or(
            PendrawError::InvalidCanvasSize {
                width: options.width,
                height: options.height,
            },
        )?;
        let stroke = Stroke {
            width: options.stroke_width,
            ..Stroke::default()
        };
        let mut canvas = Self { pixmap, stroke };
        canvas.clear(super::defaults::BACKGROUND);
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Color of one pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let px = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color {
            r: px.red(),
            g: px.green(),
            b: px.blue(),
            a: px.alpha(),
        })
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, PendrawError> {
        self.pixmap
            .encode_png()
            .map_err(|e| PendrawError::Encode {
                message: e.to_string(),
            })
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), PendrawError> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes).map_err(|source| PendrawError::WriteImage {
            path: path.display().to_string(),
            source,
        })
    }

    fn paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = true;
        paint
    }

    fn draw(&mut self, path: Option<tiny_skia::Path>, color: Color, filled: bool) {
        let Some(path) = path else {
            crate::log::debug!(%color, filled, "skipping degenerate shape");
            return;
        };
        let paint = Self::paint(color);
        if filled {
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        } else {
            self.pixmap
                .stroke_path(&path, &paint, &self.stroke, Transform::identity(), None);
        }
    }

    fn rectangle(&mut self, origin: Point, width: f64, height: f64, color: Color, filled: bool) {
        let path = Rect::from_xywh(origin.x as f32, origin.y as f32, width as f32, height as f32)
            .map(PathBuilder::from_rect);
        self.draw(path, color, filled);
    }

    fn ellipse(&mut self, center: Point, rx: f64, ry: f64, color: Color, filled: bool) {
        let path = Rect::from_xywh(
            (center.x - rx) as f32,
            (center.y - ry) as f32,
            (rx * 2.0) as f32,
            (ry * 2.0) as f32,
        )
        .and_then(PathBuilder::from_oval);
        self.draw(path, color, filled);
    }

    fn polygon(&mut self, points: &[Point], color: Color, filled: bool) {
        let path = match points.split_first() {
            Some((first, rest)) if !rest.is_empty() => {
                let mut pb = PathBuilder::new();
                pb.move_to(first.x as f32, first.y as f32);
                for p in rest {
                    pb.line_to(p.x as f32, p.y as f32);
                }
                pb.close();
                pb.finish()
            }
            _ => None,
        };
        self.draw(path, color, filled);
    }
}

impl Canvas for PixmapCanvas {
    fn clear(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    fn stroke_rectangle(&mut self, origin: Point, width: f64, height: f64, color: Color) {
        self.rectangle(origin, width, height, color, false);
    }

    fn fill_rectangle(&mut self, origin: Point, width: f64, height: f64, color: Color) {
        self.rectangle(origin, width, height, color, true);
    }

    fn stroke_ellipse(&mut self, center: Point, radius_x: f64, radius_y: f64, color: Color) {
        self.ellipse(center, radius_x, radius_y, color, false);
    }

    fn fill_ellipse(&mut self, center: Point, radius_x: f64, radius_y: f64, color: Color) {
        self.ellipse(center, radius_x, radius_y, color, true);
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color) {
        self.polygon(points, color, false);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.polygon(points, color, true);
    }
}
