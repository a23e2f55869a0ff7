//! The drawing surface the render loop paints into.
//!
//! A [`Surface`] is an immediate-mode 2D target: it knows how to clear itself,
//! fill rectangles and fill or stroke [`Path`]s. Backends that have no native
//! curves work from [`Path::flatten`].

use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use std::f32::consts::TAU;

mod egui_surface;
mod raster;

pub use egui_surface::EguiSurface;
pub use raster::RasterSurface;

/// Number of straight segments an ellipse is flattened into.
pub const ELLIPSE_SEGMENTS: usize = 64;

/// Immediate-mode drawing target.
pub trait Surface {
    /// Surface dimensions in pixels
    fn size(&self) -> Vec2;

    /// Erase everything painted so far
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Color32);

    /// Fill the interior of every subpath of `path`.
    fn fill_path(&mut self, path: &Path, color: Color32);

    /// Stroke the outline of every subpath of `path`.
    fn stroke_path(&mut self, path: &Path, stroke: Stroke);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Pos2),
    LineTo(Pos2),
    /// Close the current subpath back to its first point
    Close,
    /// A closed rectangular subpath
    Rect(Rect),
    /// A closed full-turn elliptical subpath
    Ellipse { center: Pos2, radius: Vec2 },
}

/// A sequence of subpaths, built with [`PathBuilder`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

/// A flattened subpath
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Pos2>,
    pub closed: bool,
}

impl Path {
    pub fn builder() -> PathBuilder {
        PathBuilder::default()
    }

    /// Open path through `points` in order.
    pub fn polyline(points: &[Pos2]) -> Self {
        let mut builder = PathBuilder::default();
        if let Some((first, rest)) = points.split_first() {
            builder = builder.move_to(*first);
            for point in rest {
                builder = builder.line_to(*point);
            }
        }
        builder.build()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Flatten into straight-edged subpaths. Ellipses become [`ELLIPSE_SEGMENTS`] edges.
    pub fn flatten(&self) -> Vec<Polyline> {
        let mut polylines = Vec::new();
        let mut current: Vec<Pos2> = Vec::new();

        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(point) => {
                    finish(&mut current, false, &mut polylines);
                    current.push(point);
                }
                PathSegment::LineTo(point) => current.push(point),
                PathSegment::Close => {
                    let start = current.first().copied();
                    finish(&mut current, true, &mut polylines);
                    // Drawing continues from the start of the closed subpath
                    current.extend(start);
                }
                PathSegment::Rect(rect) => {
                    finish(&mut current, false, &mut polylines);
                    polylines.push(Polyline {
                        points: vec![
                            rect.left_top(),
                            rect.right_top(),
                            rect.right_bottom(),
                            rect.left_bottom(),
                        ],
                        closed: true,
                    });
                }
                PathSegment::Ellipse { center, radius } => {
                    finish(&mut current, false, &mut polylines);
                    let points = (0..ELLIPSE_SEGMENTS)
                        .map(|i| {
                            let angle = TAU * i as f32 / ELLIPSE_SEGMENTS as f32;
                            Pos2::new(
                                center.x + radius.x * angle.cos(),
                                center.y + radius.y * angle.sin(),
                            )
                        })
                        .collect();
                    polylines.push(Polyline { points, closed: true });
                }
            }
        }

        finish(&mut current, false, &mut polylines);
        polylines
    }
}

/// Move the collected points into a new polyline. A single point carries no geometry and is dropped.
fn finish(current: &mut Vec<Pos2>, closed: bool, polylines: &mut Vec<Polyline>) {
    let points = std::mem::take(current);
    if points.len() > 1 {
        polylines.push(Polyline { points, closed });
    }
}

#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
}

impl PathBuilder {
    pub fn move_to(mut self, point: Pos2) -> Self {
        self.segments.push(PathSegment::MoveTo(point));
        self
    }

    pub fn line_to(mut self, point: Pos2) -> Self {
        self.segments.push(PathSegment::LineTo(point));
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn rect(mut self, rect: Rect) -> Self {
        self.segments.push(PathSegment::Rect(rect));
        self
    }

    pub fn ellipse(mut self, center: Pos2, radius: Vec2) -> Self {
        self.segments.push(PathSegment::Ellipse { center, radius });
        self
    }

    pub fn build(self) -> Path {
        Path {
            segments: self.segments,
        }
    }
}

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    FillRect { rect: Rect, color: Color32 },
    FillPath { path: Path, color: Color32 },
    StrokePath { path: Path, stroke: Stroke },
}

/// Surface that paints nothing and remembers every call, in order.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn fill_path(&mut self, path: &Path, color: Color32) {
        self.calls.push(DrawCall::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        self.calls.push(DrawCall::StrokePath {
            path: path.clone(),
            stroke,
        });
    }
}
