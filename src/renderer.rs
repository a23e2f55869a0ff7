// src/renderer.rs
use egui::{Pos2, Rect};
use log::trace;

use crate::geometry;
use crate::shape::Shape;
use crate::state::SceneModel;
use crate::surface::{Path, Surface};

/// What the last frame painted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Committed shapes painted
    pub shapes: usize,
    /// Whether a live preview was painted on top
    pub preview: bool,
}

/// Repaints the whole surface from the scene on every call.
#[derive(Debug, Default)]
pub struct Renderer {
    frames: u64,
    last_frame: FrameStats,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     scene (SceneModel): The model to draw
    ///     surface (Surface): The surface to repaint
    pub fn render(&mut self, scene: &SceneModel, surface: &mut dyn Surface) -> FrameStats {
        let stats = paint_scene(scene, surface);
        self.frames += 1;
        self.last_frame = stats;
        trace!(
            "Frame {}: {} shapes, preview: {}",
            self.frames, stats.shapes, stats.preview
        );
        stats
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }
}

/// Paint `scene` from scratch: background, committed shapes oldest first,
/// then at most one live preview on top.
pub fn paint_scene(scene: &SceneModel, surface: &mut dyn Surface) -> FrameStats {
    let style = scene.style();
    surface.clear();
    surface.fill_rect(
        Rect::from_min_size(Pos2::ZERO, surface.size()),
        style.background_color,
    );

    for shape in scene.document().iter() {
        paint_shape(surface, shape);
    }

    // Only one of these can exist at a time
    let preview = scene.trail_preview().or_else(|| scene.drag_preview());
    if let Some(shape) = &preview {
        paint_shape(surface, shape);
    }

    FrameStats {
        shapes: scene.document().len(),
        preview: preview.is_some(),
    }
}

/// Paint one shape with its own stored style. Interiors are filled before outlines are stroked.
pub fn paint_shape(surface: &mut dyn Surface, shape: &Shape) {
    let path = shape_path(shape);
    if let Some(fill) = shape.fill() {
        surface.fill_path(&path, fill);
    }
    surface.stroke_path(&path, shape.stroke());
}

/// The outline of a shape as a drawing path
pub fn shape_path(shape: &Shape) -> Path {
    match shape {
        Shape::FreeDraw { points, .. } => Path::polyline(points),
        Shape::Line { origin, delta, .. } => Path::builder()
            .move_to(*origin)
            .line_to(*origin + *delta)
            .build(),
        Shape::Rectangle { bounds, .. } => Path::builder().rect(*bounds).build(),
        Shape::Triangle { bounds, .. } => {
            let [apex, bottom_right, bottom_left] = geometry::triangle_vertices(*bounds);
            Path::builder()
                .move_to(apex)
                .line_to(bottom_right)
                .line_to(bottom_left)
                .close()
                .build()
        }
        Shape::Ellipse { bounds, .. } => {
            let (center, radius) = geometry::ellipse_center_radius(*bounds);
            Path::builder().ellipse(center, radius).build()
        }
    }
}
