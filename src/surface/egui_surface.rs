use egui::{Color32, Painter, Pos2, Rect, Shape as EguiShape, Stroke, Vec2};

use super::{Path, Surface};

/// Paints into an egui [`Painter`], placing surface-local coordinates at `origin` on screen.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    size: Vec2,
}

impl<'a> EguiSurface<'a> {
    /// `canvas_rect` is the screen area the surface occupies.
    pub fn new(painter: &'a Painter, canvas_rect: Rect) -> Self {
        Self {
            painter,
            origin: canvas_rect.min,
            size: canvas_rect.size(),
        }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        point + self.origin.to_vec2()
    }
}

impl Surface for EguiSurface<'_> {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        // egui rebuilds its shape list every frame, so there is nothing retained to erase
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.painter
            .rect_filled(rect.translate(self.origin.to_vec2()), 0.0, color);
    }

    fn fill_path(&mut self, path: &Path, color: Color32) {
        for polyline in path.flatten() {
            if polyline.points.len() < 3 {
                continue;
            }
            let points = polyline.points.iter().map(|p| self.to_screen(*p)).collect();
            self.painter
                .add(EguiShape::convex_polygon(points, color, Stroke::NONE));
        }
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        for polyline in path.flatten() {
            let points: Vec<Pos2> = polyline.points.iter().map(|p| self.to_screen(*p)).collect();
            if polyline.closed {
                self.painter.add(EguiShape::closed_line(points, stroke));
            } else {
                self.painter.add(EguiShape::line(points, stroke));
            }
        }
    }
}
