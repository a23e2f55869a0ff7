use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::SketchApp;
use crate::components::ToolButton;
use crate::state::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, SizePreset};
use crate::tool::ToolKind;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.scene.tool();
            ui.horizontal_wrapped(|ui| {
                for tool in ToolKind::ALL {
                    if ToolButton::new(tool, tool == active_tool).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", tool.name());
                        app.scene.select_tool(tool);
                    }
                }
            });
            ui.separator();

            style_controls(app, ui);
            ui.separator();

            canvas_controls(app, ui);
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                if ui.add_enabled(app.scene.can_undo(), egui::Button::new("Undo")).clicked() {
                    app.scene.undo();
                }
                if ui.add_enabled(app.scene.can_redo(), egui::Button::new("Redo")).clicked() {
                    app.scene.redo();
                }
                if ui.button("Clear").clicked() {
                    app.scene.clear();
                }
            });
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", app.scene.undo_depth()));
                ui.label(format!("Redo stack size: {}", app.scene.redo_depth()));
            });
            ui.separator();

            if ui.button("Download").clicked() {
                app.download();
            }
            if let Some(status) = &app.status {
                ui.small(status);
            }

            ui.separator();
            let frame = app.renderer.last_frame();
            ui.small(format!(
                "Shapes: {} · {}",
                frame.shapes,
                app.scene.interaction().name()
            ));
        });
}

fn style_controls(app: &mut SketchApp, ui: &mut egui::Ui) {
    let mut style = *app.scene.style();

    egui::Grid::new("style_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Stroke:");
            if color_edit_button_srgba(ui, &mut style.stroke_color, Alpha::Opaque).changed() {
                app.scene.set_stroke_color(style.stroke_color);
            }
            ui.end_row();

            ui.label("Fill:");
            ui.horizontal(|ui| {
                if color_edit_button_srgba(ui, &mut style.fill_color, Alpha::OnlyBlend).changed() {
                    app.scene.set_fill_color(style.fill_color);
                }
                if ui.small_button("No fill").clicked() {
                    app.scene.set_fill_color(egui::Color32::TRANSPARENT);
                }
            });
            ui.end_row();

            ui.label("Background:");
            if color_edit_button_srgba(ui, &mut style.background_color, Alpha::Opaque).changed() {
                app.scene.set_background_color(style.background_color);
            }
            ui.end_row();
        });

    // Brush thickness slider
    ui.horizontal(|ui| {
        ui.label("Thickness:");
        let slider = egui::Slider::new(&mut style.stroke_width, MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH);
        if ui.add(slider).changed() {
            app.scene.set_stroke_width(style.stroke_width);
        }
    });
}

fn canvas_controls(app: &mut SketchApp, ui: &mut egui::Ui) {
    let size = app.scene.canvas_size();
    ui.label(format!("Canvas: {}×{}", size.width, size.height));

    ui.horizontal_wrapped(|ui| {
        for preset in SizePreset::ALL {
            if ui.selectable_label(size == preset.size(), preset.label()).clicked() {
                app.scene.apply_size_preset(preset);
            }
        }
    });
    if ui.button("⟲ Toggle orientation").clicked() {
        app.scene.toggle_orientation();
    }
}
