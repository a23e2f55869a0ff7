//! The shape-authoring state machine.
//!
//! `SceneModel` owns everything the canvas knows: the committed document,
//! the snapshot history, the active tool and style, the surface size and the
//! in-progress interaction. Host input is routed through the
//! `begin_interaction` / `update_interaction` / `commit_interaction` contract;
//! the renderer only ever reads from it.
//!
//! No operation fails. Calls that make no sense in the current state (undo
//! with empty history, commit while idle, ...) are silent no-ops, and a
//! commit either appends a shape and records history or does neither.

use egui::{Color32, Pos2};
use log::{debug, info};

use super::interaction::InteractionState;
use super::style::{CanvasSize, SizePreset, StyleSettings};
use crate::document::Document;
use crate::history::SnapshotHistory;
use crate::shape::{Shape, ShapeId, ShapeRef};
use crate::tool::ToolKind;

#[derive(Debug, Clone, Default)]
pub struct SceneModel {
    document: Document,
    history: SnapshotHistory,
    tool: ToolKind,
    style: StyleSettings,
    canvas: CanvasSize,
    interaction: InteractionState,
}

impl SceneModel {
    pub fn new(tool: ToolKind, style: StyleSettings, canvas: CanvasSize) -> Self {
        let mut style = style;
        style.set_stroke_width(style.stroke_width);
        Self {
            document: Document::new(),
            history: SnapshotHistory::new(),
            tool,
            style,
            canvas: CanvasSize::new(canvas.width, canvas.height),
            interaction: InteractionState::Idle,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn shapes(&self) -> &[ShapeRef] {
        self.document.shapes()
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn style(&self) -> &StyleSettings {
        &self.style
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_stack().len()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_stack().len()
    }

    // ---- Tool & style ----

    /// Route subsequent input through `tool`. The in-progress interaction is left alone.
    pub fn select_tool(&mut self, tool: ToolKind) {
        if tool != self.tool {
            debug!("Tool changed: {} -> {}", self.tool.name(), tool.name());
        }
        self.tool = tool;
    }

    pub fn set_stroke_color(&mut self, color: Color32) {
        self.style.stroke_color = color;
    }

    pub fn set_fill_color(&mut self, color: Color32) {
        self.style.fill_color = color;
    }

    pub fn set_background_color(&mut self, color: Color32) {
        self.style.background_color = color;
    }

    /// Clamped into `[1, 100]`; non-finite values are ignored.
    pub fn set_stroke_width(&mut self, width: f32) {
        self.style.set_stroke_width(width);
    }

    // ---- Surface size ----

    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        self.canvas = CanvasSize::new(width, height);
        debug!("Canvas resized to {}x{}", self.canvas.width, self.canvas.height);
    }

    pub fn apply_size_preset(&mut self, preset: SizePreset) {
        let size = preset.size();
        self.set_canvas_size(size.width, size.height);
    }

    /// Swap the current width and height.
    pub fn toggle_orientation(&mut self) {
        self.canvas = self.canvas.rotated();
        debug!("Canvas rotated to {}x{}", self.canvas.width, self.canvas.height);
    }

    // ---- Pointer interaction ----

    /// Pointer pressed at `point`. Replaces any interaction already in progress.
    pub fn begin_interaction(&mut self, point: Pos2) {
        self.interaction = if self.tool.is_drag_tool() {
            InteractionState::Dragging {
                anchor: point,
                current: None,
            }
        } else {
            InteractionState::Drawing { trail: vec![point] }
        };
    }

    /// Pointer moved to `point` while pressed.
    pub fn update_interaction(&mut self, point: Pos2) {
        match &mut self.interaction {
            InteractionState::Idle => {}
            InteractionState::Drawing { trail } => trail.push(point),
            InteractionState::Dragging { current, .. } => *current = Some(point),
        }
    }

    /// Pointer released at `point`: turn the in-progress interaction into a
    /// committed shape when it is complete, then return to idle.
    pub fn commit_interaction(&mut self, point: Pos2) {
        let interaction = std::mem::take(&mut self.interaction);
        let taken = interaction.name();
        let shape = match interaction {
            InteractionState::Idle => return,
            InteractionState::Drawing { trail } => {
                Shape::free_draw(ShapeId::new(), trail, self.style.stroke())
            }
            InteractionState::Dragging { anchor, .. } => Shape::from_drag(
                ShapeId::new(),
                self.tool,
                anchor,
                point,
                self.style.stroke(),
                self.style.fill_color,
            ),
        };

        match shape {
            Some(shape) => self.push_shape(shape),
            None => debug!("{}", discard_note(taken)),
        }
    }

    /// The pointer left the surface: commit at the last point the interaction saw.
    pub fn leave_surface(&mut self) {
        if let Some(point) = self.interaction.last_known_point() {
            self.commit_interaction(point);
        }
    }

    fn push_shape(&mut self, shape: Shape) {
        let kind = shape.kind();
        self.history.record(self.document.clone());
        self.document.add_shape(shape);
        info!(
            "Committed {} (shapes: {}, undo depth: {})",
            kind.name(),
            self.document.len(),
            self.undo_depth()
        );
    }

    // ---- History ----

    pub fn undo(&mut self) {
        if let Some(previous) = self.history.undo(&self.document) {
            self.document = previous;
            info!("Undo (shapes: {})", self.document.len());
        }
    }

    pub fn redo(&mut self) {
        if let Some(next) = self.history.redo(&self.document) {
            self.document = next;
            info!("Redo (shapes: {})", self.document.len());
        }
    }

    /// Remove every shape and forget all history. Not undoable.
    pub fn clear(&mut self) {
        self.document = Document::new();
        self.history.clear();
        info!("Canvas cleared");
    }

    // ---- Live previews ----

    /// The free-draw trail as it would be committed now, styled with the current settings.
    pub fn trail_preview(&self) -> Option<Shape> {
        let trail = self.interaction.trail()?;
        Shape::free_draw(ShapeId::preview(), trail.to_vec(), self.style.stroke())
    }

    /// The shape the current drag would commit if released at the live cursor.
    pub fn drag_preview(&self) -> Option<Shape> {
        let (anchor, current) = self.interaction.drag()?;
        Shape::from_drag(
            ShapeId::preview(),
            self.tool,
            anchor,
            current,
            self.style.stroke(),
            self.style.fill_color,
        )
    }
}

/// Log line for an interaction that ended without a shape. Names the interaction,
/// not the tool, since the tool may have changed since it began.
fn discard_note(interaction_name: &str) -> String {
    format!(
        "Discarded incomplete {} interaction",
        interaction_name.to_lowercase()
    )
}
