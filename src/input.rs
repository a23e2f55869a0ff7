use egui::{Context, Event, PointerButton, Pos2, Rect};

use crate::state::SceneModel;

/// One primary-pointer input from this frame, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Moved(Pos2),
    Pressed(Pos2),
    Released(Pos2),
    /// The pointer left the window
    Gone,
}

/// Every primary-pointer input egui received this frame, in arrival order.
///
/// Built from the event list rather than the held-button state, so a press and
/// a release landing in the same frame are both seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerFrame {
    pub inputs: Vec<PointerInput>,
}

impl PointerFrame {
    pub fn from_context(ctx: &Context) -> Self {
        ctx.input(|input| Self::from_events(&input.events))
    }

    pub fn from_events(events: &[Event]) -> Self {
        let inputs = events
            .iter()
            .filter_map(|event| match event {
                Event::PointerMoved(pos) => Some(PointerInput::Moved(*pos)),
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => Some(if *pressed {
                    PointerInput::Pressed(*pos)
                } else {
                    PointerInput::Released(*pos)
                }),
                Event::PointerGone => Some(PointerInput::Gone),
                _ => None,
            })
            .collect();
        Self { inputs }
    }
}

/// Pointer events on the drawing surface, in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    PointerDown(Pos2),
    PointerMove(Pos2),
    PointerUp(Pos2),
    /// The pointer left the surface while pressed
    PointerLeave,
}

/// Turns a frame's pointer inputs into [`SurfaceEvent`]s for one canvas.
///
/// A press only starts an interaction when it lands on the visible part of the
/// canvas; leaving that area ends it.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    active: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a press that started on the canvas is being tracked
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// `canvas_rect` is the full canvas on screen (it sets the local origin);
    /// `visible_rect` is the part of it the user can actually hit.
    pub fn process(
        &mut self,
        frame: &PointerFrame,
        canvas_rect: Rect,
        visible_rect: Rect,
    ) -> Vec<SurfaceEvent> {
        let hit_rect = canvas_rect.intersect(visible_rect);
        let mut events = Vec::new();

        for input in &frame.inputs {
            match *input {
                PointerInput::Pressed(pos) => {
                    if hit_rect.contains(pos) {
                        events.push(SurfaceEvent::PointerDown(to_surface_local(pos, canvas_rect)));
                        self.active = true;
                    }
                }
                PointerInput::Moved(pos) if self.active => {
                    if !hit_rect.contains(pos) {
                        events.push(SurfaceEvent::PointerLeave);
                        self.active = false;
                    } else if Some(pos) != self.last_pointer_pos {
                        events.push(SurfaceEvent::PointerMove(to_surface_local(pos, canvas_rect)));
                    }
                }
                PointerInput::Released(pos) if self.active => {
                    events.push(if hit_rect.contains(pos) {
                        SurfaceEvent::PointerUp(to_surface_local(pos, canvas_rect))
                    } else {
                        SurfaceEvent::PointerLeave
                    });
                    self.active = false;
                }
                PointerInput::Gone if self.active => {
                    events.push(SurfaceEvent::PointerLeave);
                    self.active = false;
                }
                _ => {}
            }

            self.last_pointer_pos = match *input {
                PointerInput::Moved(pos) | PointerInput::Pressed(pos) | PointerInput::Released(pos) => {
                    Some(pos)
                }
                PointerInput::Gone => None,
            };
        }

        events
    }
}

/// Screen position → surface-local position (origin at the canvas top-left)
pub fn to_surface_local(pos: Pos2, canvas_rect: Rect) -> Pos2 {
    (pos - canvas_rect.min).to_pos2()
}

/// Dispatch a surface event into the scene's interaction contract.
pub fn route_event(event: &SurfaceEvent, scene: &mut SceneModel) {
    match *event {
        SurfaceEvent::PointerDown(pos) => scene.begin_interaction(pos),
        SurfaceEvent::PointerMove(pos) => scene.update_interaction(pos),
        SurfaceEvent::PointerUp(pos) => scene.commit_interaction(pos),
        SurfaceEvent::PointerLeave => scene.leave_surface(),
    }
}
