mod interaction;
mod scene;
mod style;

pub use interaction::InteractionState;
pub use scene::SceneModel;
pub use style::{CanvasSize, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, SizePreset, StyleSettings};
