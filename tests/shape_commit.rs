use eframe_sketchpad::{InteractionState, SceneModel, Shape, ToolKind};
use egui::{Color32, Rect, pos2, vec2};

fn drag(tool: ToolKind, from: egui::Pos2, to: egui::Pos2) -> SceneModel {
    let mut scene = SceneModel::default();
    scene.select_tool(tool);
    scene.begin_interaction(from);
    scene.update_interaction(to);
    scene.commit_interaction(to);
    scene
}

#[test]
fn test_single_point_free_draw_is_discarded() {
    let mut scene = SceneModel::default();
    scene.begin_interaction(pos2(10.0, 10.0));
    scene.commit_interaction(pos2(10.0, 10.0));

    assert!(scene.document().is_empty());
    assert!(!scene.can_undo());
    assert_eq!(scene.interaction(), &InteractionState::Idle);
}

#[test]
fn test_free_draw_keeps_every_point_in_order() {
    let mut scene = SceneModel::default();
    let trail = [
        pos2(0.0, 0.0),
        pos2(1.0, 0.5),
        pos2(1.0, 0.5), // near-duplicates are kept
        pos2(3.0, 2.0),
        pos2(2.0, 5.0),
    ];
    scene.begin_interaction(trail[0]);
    for point in &trail[1..] {
        scene.update_interaction(*point);
    }
    scene.commit_interaction(pos2(2.0, 5.0));

    assert_eq!(scene.shapes().len(), 1);
    match scene.shapes()[0].as_ref() {
        Shape::FreeDraw { points, stroke, .. } => {
            assert_eq!(points.as_slice(), &trail);
            assert_eq!(*stroke, scene.style().stroke());
        }
        other => panic!("expected FreeDraw, got {other:?}"),
    }
    assert!(scene.interaction().is_idle());
}

#[test]
fn test_bounding_box_is_direction_independent() {
    for tool in [ToolKind::Rectangle, ToolKind::Triangle, ToolKind::Ellipse] {
        let forward = drag(tool, pos2(10.0, 10.0), pos2(50.0, 50.0));
        let backward = drag(tool, pos2(50.0, 50.0), pos2(10.0, 10.0));

        let expected = Rect::from_min_size(pos2(10.0, 10.0), vec2(40.0, 40.0));
        assert_eq!(forward.shapes()[0].bounds(), expected, "{}", tool.name());
        assert_eq!(backward.shapes()[0].bounds(), expected, "{}", tool.name());
        assert_eq!(backward.shapes()[0].kind(), tool);
    }
}

#[test]
fn test_zero_size_box_is_committed() {
    let mut scene = SceneModel::default();
    scene.select_tool(ToolKind::Ellipse);
    scene.begin_interaction(pos2(20.0, 20.0));
    scene.commit_interaction(pos2(20.0, 20.0));

    assert_eq!(scene.shapes().len(), 1);
    assert_eq!(scene.shapes()[0].bounds().size(), vec2(0.0, 0.0));
    assert_eq!(scene.undo_depth(), 1);
}

#[test]
fn test_line_keeps_direction() {
    let backward = drag(ToolKind::Line, pos2(50.0, 50.0), pos2(10.0, 10.0));
    let forward = drag(ToolKind::Line, pos2(10.0, 10.0), pos2(50.0, 50.0));

    match backward.shapes()[0].as_ref() {
        Shape::Line { origin, delta, .. } => {
            assert_eq!(*origin, pos2(50.0, 50.0));
            assert_eq!(*delta, vec2(-40.0, -40.0));
        }
        other => panic!("expected Line, got {other:?}"),
    }
    match forward.shapes()[0].as_ref() {
        Shape::Line { origin, delta, .. } => {
            assert_eq!(*origin, pos2(10.0, 10.0));
            assert_eq!(*delta, vec2(40.0, 40.0));
        }
        other => panic!("expected Line, got {other:?}"),
    }
}

#[test]
fn test_drag_commit_uses_release_point_not_last_move() {
    let mut scene = SceneModel::default();
    scene.select_tool(ToolKind::Rectangle);
    scene.begin_interaction(pos2(0.0, 0.0));
    scene.update_interaction(pos2(30.0, 30.0));
    scene.commit_interaction(pos2(20.0, 10.0));

    assert_eq!(
        scene.shapes()[0].bounds(),
        Rect::from_min_size(pos2(0.0, 0.0), vec2(20.0, 10.0))
    );
}

#[test]
fn test_update_does_not_move_anchor() {
    let mut scene = SceneModel::default();
    scene.select_tool(ToolKind::Triangle);
    scene.begin_interaction(pos2(5.0, 5.0));
    scene.update_interaction(pos2(40.0, 10.0));
    scene.update_interaction(pos2(60.0, 30.0));

    assert_eq!(
        scene.interaction(),
        &InteractionState::Dragging {
            anchor: pos2(5.0, 5.0),
            current: Some(pos2(60.0, 30.0)),
        }
    );
    assert!(scene.document().is_empty());
}

#[test]
fn test_shape_captures_fill_at_commit() {
    let mut scene = SceneModel::default();
    scene.set_fill_color(Color32::YELLOW);
    scene.select_tool(ToolKind::Rectangle);
    scene.begin_interaction(pos2(0.0, 0.0));
    scene.set_fill_color(Color32::TRANSPARENT);
    scene.commit_interaction(pos2(4.0, 4.0));

    assert_eq!(scene.shapes()[0].fill(), None);
}

#[test]
fn test_leave_surface_commits_drag_at_live_cursor() {
    let mut scene = SceneModel::default();
    scene.select_tool(ToolKind::Line);
    scene.begin_interaction(pos2(0.0, 0.0));
    scene.update_interaction(pos2(25.0, -5.0));
    scene.leave_surface();

    match scene.shapes()[0].as_ref() {
        Shape::Line { delta, .. } => assert_eq!(*delta, vec2(25.0, -5.0)),
        other => panic!("expected Line, got {other:?}"),
    }
    assert!(scene.interaction().is_idle());

    // Leaving again while idle does nothing
    scene.leave_surface();
    assert_eq!(scene.shapes().len(), 1);
}

#[test]
fn test_ids_are_unique_across_commits() {
    let mut scene = SceneModel::default();
    scene.select_tool(ToolKind::Rectangle);
    for _ in 0..3 {
        scene.begin_interaction(pos2(0.0, 0.0));
        scene.commit_interaction(pos2(1.0, 1.0));
    }
    let ids: std::collections::HashSet<_> = scene.shapes().iter().map(|s| s.id()).collect();
    assert_eq!(ids.len(), 3);
}
