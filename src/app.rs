use crate::config::AppConfig;
use crate::export;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::SceneModel;
use crate::util::time::timestamp_secs;

/// The host application: owns the scene and wires egui input and painting to it.
pub struct SketchApp {
    pub(crate) scene: SceneModel,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
    pub(crate) config: AppConfig,
    /// Outcome of the last download, shown under the buttons
    pub(crate) status: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            scene: config.scene_model(),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            config,
            status: None,
        }
    }

    pub fn scene(&self) -> &SceneModel {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneModel {
        &mut self.scene
    }

    /// Export the canvas and hand it to the user. Failures are logged and shown, never raised.
    pub fn download(&mut self) {
        let file_name = export::export_file_name(timestamp_secs());
        self.status = Some(match self.deliver(&file_name) {
            Ok(message) => message,
            Err(err) => {
                log::error!("Download failed: {err}");
                format!("Download failed: {err}")
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn deliver(&self, file_name: &str) -> Result<String, crate::error::ExportError> {
        let bytes = export::export_png(&self.scene)?;
        let path = export::save_png(&bytes, &self.config.export_dir, file_name)?;
        Ok(format!("Saved {}", path.display()))
    }

    #[cfg(target_arch = "wasm32")]
    fn deliver(&self, file_name: &str) -> Result<String, crate::error::ExportError> {
        let bytes = export::export_png(&self.scene)?;
        export::download_png(&bytes, file_name)?;
        Ok(format!("Downloaded {file_name}"))
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        use egui::{Key, KeyboardShortcut, Modifiers};

        let redo_shift_z = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);
        let redo_y = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
        let undo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

        // Check the shifted shortcut first: Cmd+Z also matches logically when Shift is held
        let (redo_pressed, undo_pressed) = ctx.input_mut(|input| {
            let redo = input.consume_shortcut(&redo_shift_z) || input.consume_shortcut(&redo_y);
            let undo = input.consume_shortcut(&undo);
            (redo, undo)
        });

        if redo_pressed {
            self.scene.redo();
        }
        if undo_pressed {
            self.scene.undo();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
