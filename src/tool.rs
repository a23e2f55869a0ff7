use serde::{Deserialize, Serialize};

/// The shape tools offered by the canvas.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    /// Freehand path following the pointer
    #[default]
    FreeDraw,
    /// Straight line from anchor to release point
    Line,
    Rectangle,
    /// Isosceles triangle inscribed in the dragged box
    Triangle,
    /// Ellipse inscribed in the dragged box
    Ellipse,
}

impl ToolKind {
    /// Every tool, in toolbar order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::FreeDraw,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Triangle,
        ToolKind::Ellipse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::FreeDraw => "free-draw",
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Triangle => "triangle",
            ToolKind::Ellipse => "ellipse",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolKind::FreeDraw => "Free draw",
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Triangle => "Triangle",
            ToolKind::Ellipse => "Ellipse",
        }
    }

    /// Glyph shown on the toolbar button.
    pub fn icon(self) -> &'static str {
        match self {
            ToolKind::FreeDraw => "✏",
            ToolKind::Line => "╱",
            ToolKind::Rectangle => "▭",
            ToolKind::Triangle => "△",
            ToolKind::Ellipse => "◯",
        }
    }

    /// Resolve a tool from its stable name
    pub fn from_name(name: &str) -> Option<ToolKind> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// True for tools that create a shape from an anchor and a release point.
    pub fn is_drag_tool(self) -> bool {
        !matches!(self, ToolKind::FreeDraw)
    }
}
