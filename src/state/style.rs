use egui::{Color32, Stroke, Vec2};
use serde::{Deserialize, Serialize};

pub const MIN_STROKE_WIDTH: f32 = 1.0;
pub const MAX_STROKE_WIDTH: f32 = 100.0;

/// Styling applied to the next committed shape and to live previews.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub stroke_color: Color32,
    /// `Color32::TRANSPARENT` means shapes get no interior paint
    pub fill_color: Color32,
    pub stroke_width: f32,
    pub background_color: Color32,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            stroke_color: Color32::BLACK,
            fill_color: Color32::TRANSPARENT,
            stroke_width: 2.0,
            background_color: Color32::WHITE,
        }
    }
}

impl StyleSettings {
    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.stroke_width, self.stroke_color)
    }

    /// Set the stroke width, clamped into `[MIN_STROKE_WIDTH, MAX_STROKE_WIDTH]`.
    /// Non-finite input is ignored. Returns the width now in effect.
    pub fn set_stroke_width(&mut self, width: f32) -> f32 {
        if width.is_finite() {
            self.stroke_width = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        }
        self.stroke_width
    }
}

/// Drawing surface dimensions in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        SizePreset::Landscape.size()
    }
}

impl CanvasSize {
    /// Build a size, clamping each dimension to at least one pixel.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Build a size from floating point dimensions, rounding to whole pixels.
    pub fn from_f32(width: f32, height: f32) -> Self {
        let to_pixels = |value: f32| {
            if value.is_finite() {
                value.round().clamp(1.0, u32::MAX as f32) as u32
            } else {
                1
            }
        };
        Self::new(to_pixels(width), to_pixels(height))
    }

    /// The same size with width and height swapped
    pub fn rotated(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// The fixed size presets offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizePreset {
    Landscape,
    Square,
    Banner,
}

impl SizePreset {
    pub const ALL: [SizePreset; 3] = [SizePreset::Landscape, SizePreset::Square, SizePreset::Banner];

    pub fn size(self) -> CanvasSize {
        match self {
            SizePreset::Landscape => CanvasSize::new(800, 533),
            SizePreset::Square => CanvasSize::new(600, 600),
            SizePreset::Banner => CanvasSize::new(800, 200),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizePreset::Landscape => "800×533",
            SizePreset::Square => "600×600",
            SizePreset::Banner => "800×200",
        }
    }
}
