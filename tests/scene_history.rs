use eframe_sketchpad::{SceneModel, Shape, ToolKind};
use egui::{Pos2, Rect, pos2, vec2};
use std::sync::Arc;

// Helper to commit one rectangle per offset
fn draw_rectangles(scene: &mut SceneModel, count: usize) {
    scene.select_tool(ToolKind::Rectangle);
    for i in 0..count {
        let offset = i as f32 * 10.0;
        scene.begin_interaction(pos2(offset, offset));
        scene.update_interaction(pos2(offset + 5.0, offset + 5.0));
        scene.commit_interaction(pos2(offset + 8.0, offset + 4.0));
    }
}

fn draw_stroke(scene: &mut SceneModel, points: &[Pos2]) {
    scene.select_tool(ToolKind::FreeDraw);
    scene.begin_interaction(points[0]);
    for point in &points[1..] {
        scene.update_interaction(*point);
    }
    scene.commit_interaction(*points.last().unwrap());
}

#[test]
fn test_rectangle_scenario() {
    let mut scene = SceneModel::default();
    scene.select_tool(ToolKind::Rectangle);
    scene.begin_interaction(pos2(0.0, 0.0));
    scene.commit_interaction(pos2(100.0, 60.0));

    assert_eq!(scene.shapes().len(), 1);
    match scene.shapes()[0].as_ref() {
        Shape::Rectangle { bounds, .. } => {
            assert_eq!(*bounds, Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 60.0)));
        }
        other => panic!("expected Rectangle, got {other:?}"),
    }

    let history = scene.history();
    assert_eq!(history.undo_stack().len(), 1);
    assert!(history.undo_stack()[0].is_empty());
    assert!(history.redo_stack().is_empty());
}

#[test]
fn test_undo_all_then_redo_all() {
    let mut scene = SceneModel::default();
    draw_rectangles(&mut scene, 4);
    let committed: Vec<Shape> = scene.document().iter().cloned().collect();

    for _ in 0..4 {
        scene.undo();
    }
    assert!(scene.document().is_empty());
    assert!(!scene.can_undo());

    for _ in 0..4 {
        scene.redo();
    }
    let restored: Vec<Shape> = scene.document().iter().cloned().collect();
    assert_eq!(restored, committed);
    assert!(!scene.can_redo());
}

#[test]
fn test_undo_and_redo_on_empty_history_are_noops() {
    let mut scene = SceneModel::default();
    scene.undo();
    scene.redo();
    assert!(scene.document().is_empty());
    assert_eq!(scene.undo_depth(), 0);
    assert_eq!(scene.redo_depth(), 0);

    draw_rectangles(&mut scene, 1);
    scene.redo();
    assert_eq!(scene.shapes().len(), 1);
    assert_eq!(scene.undo_depth(), 1);
}

#[test]
fn test_new_commit_invalidates_redo() {
    let mut scene = SceneModel::default();
    draw_rectangles(&mut scene, 3);
    scene.undo();
    scene.undo();
    assert_eq!(scene.redo_depth(), 2);

    draw_stroke(&mut scene, &[pos2(1.0, 1.0), pos2(2.0, 2.0)]);

    assert_eq!(scene.redo_depth(), 0);
    assert_eq!(scene.shapes().len(), 2);
    scene.redo();
    assert_eq!(scene.shapes().len(), 2);
}

#[test]
fn test_clear_is_not_undoable() {
    let mut scene = SceneModel::default();
    draw_rectangles(&mut scene, 2);
    scene.undo();

    scene.clear();

    assert!(scene.document().is_empty());
    assert_eq!(scene.undo_depth(), 0);
    assert_eq!(scene.redo_depth(), 0);

    scene.undo();
    assert!(scene.document().is_empty());
    scene.redo();
    assert!(scene.document().is_empty());
}

#[test]
fn test_earlier_snapshots_are_never_altered() {
    let mut scene = SceneModel::default();
    draw_rectangles(&mut scene, 1);
    let first = Arc::clone(&scene.shapes()[0]);

    draw_rectangles(&mut scene, 2);
    let snapshots = scene.history().undo_stack();
    assert_eq!(snapshots.len(), 3);
    assert!(snapshots[0].is_empty());
    assert_eq!(snapshots[1].len(), 1);
    assert!(Arc::ptr_eq(&snapshots[1].shapes()[0], &first));
    assert_eq!(snapshots[2].len(), 2);
}

#[test]
fn test_style_changes_are_not_retroactive() {
    let mut scene = SceneModel::default();
    scene.set_stroke_color(egui::Color32::RED);
    scene.set_stroke_width(4.0);
    draw_stroke(&mut scene, &[pos2(0.0, 0.0), pos2(10.0, 0.0)]);

    scene.set_stroke_color(egui::Color32::GREEN);
    scene.set_stroke_width(30.0);

    let stroke = scene.shapes()[0].stroke();
    assert_eq!(stroke.color, egui::Color32::RED);
    assert_eq!(stroke.width, 4.0);
}

#[test]
fn test_stroke_width_bounds() {
    let mut scene = SceneModel::default();

    scene.set_stroke_width(0.0);
    assert_eq!(scene.style().stroke_width, 1.0);

    scene.set_stroke_width(101.0);
    assert_eq!(scene.style().stroke_width, 100.0);

    scene.set_stroke_width(1.0);
    assert_eq!(scene.style().stroke_width, 1.0);
    scene.set_stroke_width(100.0);
    assert_eq!(scene.style().stroke_width, 100.0);
}

#[test]
fn test_toggle_orientation_twice_restores_size() {
    let mut scene = SceneModel::default();
    scene.set_canvas_size(800, 200);

    scene.toggle_orientation();
    assert_eq!((scene.canvas_size().width, scene.canvas_size().height), (200, 800));

    scene.toggle_orientation();
    assert_eq!((scene.canvas_size().width, scene.canvas_size().height), (800, 200));
}

#[test]
fn test_toggle_orientation_swaps_current_size_after_resize() {
    let mut scene = SceneModel::default();
    scene.toggle_orientation();
    scene.apply_size_preset(eframe_sketchpad::SizePreset::Banner);
    scene.toggle_orientation();

    assert_eq!((scene.canvas_size().width, scene.canvas_size().height), (200, 800));
}
