use egui::Pos2;

/// The in-progress pointer interaction. Transient: never part of history.
///
/// ```text
///            begin (free-draw)          commit / leave
///   ┌──────┐ ─────────────────► Drawing ──────────────┐
///   │ Idle │                                          ▼
///   └──────┘ ─────────────────► Dragging ─────────► Idle
///            begin (drag tool)         commit / leave
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    /// No pointer interaction
    #[default]
    Idle,
    /// Collecting a free-draw trail, in pointer order
    Drawing { trail: Vec<Pos2> },
    /// Dragging out a line or bounding-box shape
    Dragging {
        anchor: Pos2,
        /// Live cursor position, set by the first pointer move
        current: Option<Pos2>,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, InteractionState::Drawing { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging { .. })
    }

    /// The free-draw trail, if one is being collected
    pub fn trail(&self) -> Option<&[Pos2]> {
        match self {
            InteractionState::Drawing { trail } => Some(trail),
            _ => None,
        }
    }

    /// Anchor and live cursor of a drag, once the cursor has moved
    pub fn drag(&self) -> Option<(Pos2, Pos2)> {
        match self {
            InteractionState::Dragging {
                anchor,
                current: Some(current),
            } => Some((*anchor, *current)),
            _ => None,
        }
    }

    /// The most recent pointer position this interaction has seen.
    pub fn last_known_point(&self) -> Option<Pos2> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Drawing { trail } => trail.last().copied(),
            InteractionState::Dragging { anchor, current } => Some(current.unwrap_or(*anchor)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InteractionState::Idle => "Idle",
            InteractionState::Drawing { .. } => "Drawing",
            InteractionState::Dragging { .. } => "Dragging",
        }
    }
}
