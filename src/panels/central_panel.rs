use crate::SketchApp;
use crate::input::{PointerFrame, route_event};
use crate::surface::EguiSurface;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both()
            .drag_to_scroll(false)
            .show(ui, |ui| {
                let size = app.scene.canvas_size().to_vec2();
                let (canvas_rect, _response) = ui.allocate_exact_size(size, egui::Sense::drag());

                // Handle input
                // Only the part of the canvas inside the scroll viewport is hittable
                let pointer = PointerFrame::from_context(ctx);
                for event in app.input.process(&pointer, canvas_rect, ui.clip_rect()) {
                    route_event(&event, &mut app.scene);
                }

                // Render the canvas
                let painter = ui.painter_at(canvas_rect);
                let mut surface = EguiSurface::new(&painter, canvas_rect);
                app.renderer.render(&app.scene, &mut surface);
            });
    });
}
