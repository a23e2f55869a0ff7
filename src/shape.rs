use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use std::sync::Arc;
use uuid::Uuid;

use crate::geometry;
use crate::tool::ToolKind;

/// Globally unique identifier of a committed shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier carried by live previews, which are never committed.
    pub fn preview() -> Self {
        Self(Uuid::nil())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

/// A drawn shape. Immutable once committed to the document.
///
/// Every variant stores its own stroke (and fill, where it has an interior), so
/// later style changes never recolor shapes that were already placed.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Connected path through at least two points, in draw order
    FreeDraw {
        id: ShapeId,
        points: Vec<Pos2>,
        stroke: Stroke,
    },
    /// Directed segment: `delta` is the signed offset from `origin` to the end point
    Line {
        id: ShapeId,
        origin: Pos2,
        delta: Vec2,
        stroke: Stroke,
    },
    Rectangle {
        id: ShapeId,
        bounds: Rect,
        stroke: Stroke,
        fill: Color32,
    },
    Triangle {
        id: ShapeId,
        bounds: Rect,
        stroke: Stroke,
        fill: Color32,
    },
    Ellipse {
        id: ShapeId,
        bounds: Rect,
        stroke: Stroke,
        fill: Color32,
    },
}

/// Committed shapes are shared between the document and every history snapshot.
pub type ShapeRef = Arc<Shape>;

impl Shape {
    /// Build a free-draw shape from a point trail.
    ///
    /// Returns `None` when the trail has fewer than two points (a click without drag).
    pub fn free_draw(id: ShapeId, points: Vec<Pos2>, stroke: Stroke) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(Shape::FreeDraw { id, points, stroke })
    }

    /// Build the shape a drag tool produces for `anchor` → `release`.
    ///
    /// Bounding-box shapes are normalized; lines keep their signed delta.
    /// Returns `None` for tools that do not drag.
    pub fn from_drag(
        id: ShapeId,
        tool: ToolKind,
        anchor: Pos2,
        release: Pos2,
        stroke: Stroke,
        fill: Color32,
    ) -> Option<Self> {
        let bounds = geometry::normalized_box(anchor, release);
        match tool {
            ToolKind::FreeDraw => None,
            ToolKind::Line => Some(Shape::Line {
                id,
                origin: anchor,
                delta: geometry::line_delta(anchor, release),
                stroke,
            }),
            ToolKind::Rectangle => Some(Shape::Rectangle { id, bounds, stroke, fill }),
            ToolKind::Triangle => Some(Shape::Triangle { id, bounds, stroke, fill }),
            ToolKind::Ellipse => Some(Shape::Ellipse { id, bounds, stroke, fill }),
        }
    }

    pub fn id(&self) -> ShapeId {
        match self {
            Shape::FreeDraw { id, .. }
            | Shape::Line { id, .. }
            | Shape::Rectangle { id, .. }
            | Shape::Triangle { id, .. }
            | Shape::Ellipse { id, .. } => *id,
        }
    }

    /// The tool that creates this kind of shape
    pub fn kind(&self) -> ToolKind {
        match self {
            Shape::FreeDraw { .. } => ToolKind::FreeDraw,
            Shape::Line { .. } => ToolKind::Line,
            Shape::Rectangle { .. } => ToolKind::Rectangle,
            Shape::Triangle { .. } => ToolKind::Triangle,
            Shape::Ellipse { .. } => ToolKind::Ellipse,
        }
    }

    pub fn stroke(&self) -> Stroke {
        match self {
            Shape::FreeDraw { stroke, .. }
            | Shape::Line { stroke, .. }
            | Shape::Rectangle { stroke, .. }
            | Shape::Triangle { stroke, .. }
            | Shape::Ellipse { stroke, .. } => *stroke,
        }
    }

    /// Interior paint, if this kind of shape has one and it is not fully transparent.
    pub fn fill(&self) -> Option<Color32> {
        match self {
            Shape::FreeDraw { .. } | Shape::Line { .. } => None,
            Shape::Rectangle { fill, .. }
            | Shape::Triangle { fill, .. }
            | Shape::Ellipse { fill, .. } => (fill.a() > 0).then_some(*fill),
        }
    }

    /// Axis-aligned box covering the shape geometry, excluding stroke width.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::FreeDraw { points, .. } => geometry::calculate_bounds(points, 0.0),
            Shape::Line { origin, delta, .. } => Rect::from_two_pos(*origin, *origin + *delta),
            Shape::Rectangle { bounds, .. }
            | Shape::Triangle { bounds, .. }
            | Shape::Ellipse { bounds, .. } => *bounds,
        }
    }
}
