//! Integration tests for dragging scene nodes.

use crate::helpers::{assert_close, at, drag, TestSceneBuilder};
use spatial_canvas::input::Modifiers;
use spatial_canvas::{ContentType, Depth, NodeState, SceneEvent, Vector};

#[test]
fn test_node_renders_at_its_absolute_position() {
    let scene = TestSceneBuilder::new()
        .with_node(ContentType::Jpeg, "/files/a.jpg", (50.0, 50.0))
        .build();

    let node = &scene.children()[0];
    assert_eq!(node.view().left, 50.0);
    assert_eq!(node.view().top, 50.0);
    assert_eq!(node.view().z_index, Depth::SceneItem.z_index());
}

#[test]
fn test_drag_moves_node_by_pointer_delta() {
    let mut scene = TestSceneBuilder::new()
        .with_node(ContentType::Png, "/files/a.png", (300.0, 300.0))
        .build();
    let id = scene.children()[0].id();

    drag(&mut scene, (350.0, 350.0), (450.0, 400.0));

    let node = scene.get(id).unwrap();
    assert_close(node.position(), Vector::new(400.0, 350.0));
    assert_eq!(node.depth(), Depth::SceneItem);
    assert_eq!(node.state(), NodeState::AtRestInScene);
    assert!(scene.input_state().is_idle());
    assert_eq!(scene.take_events(), vec![SceneEvent::LayoutChanged]);
}

#[test]
fn test_dragged_node_is_focused_until_release() {
    let mut scene = TestSceneBuilder::new()
        .with_node(ContentType::Png, "/files/a.png", (300.0, 300.0))
        .build();
    let id = scene.children()[0].id();

    assert!(scene.handle_pointer_down(&at(320.0, 320.0)));
    assert!(scene.handle_pointer_move(&at(330.0, 340.0)));

    let node = scene.get(id).unwrap();
    assert_eq!(node.depth(), Depth::Focused);
    assert_eq!(node.view().z_index, Depth::Focused.z_index());
    assert_eq!(node.state(), NodeState::DraggingInScene);
    assert_eq!(scene.input_state().dragged_node(), Some(id));

    scene.handle_pointer_up(&at(330.0, 340.0));
    assert_eq!(scene.get(id).unwrap().depth(), Depth::SceneItem);
}

#[test]
fn test_drag_at_zoom_converts_pixels_to_absolute_units() {
    let mut scene = TestSceneBuilder::new()
        .with_node(ContentType::Png, "/files/a.png", (200.0, 200.0))
        .with_scale(2.0)
        .build();
    let id = scene.children()[0].id();
    assert_eq!(scene.get(id).unwrap().view().left, 400.0);

    drag(&mut scene, (450.0, 450.0), (550.0, 450.0));

    let node = scene.get(id).unwrap();
    assert_close(node.position(), Vector::new(250.0, 200.0));
    assert_eq!(node.view().left, 500.0);
}

#[test]
fn test_release_is_handled_anywhere_in_the_window() {
    let mut scene = TestSceneBuilder::new()
        .with_node(ContentType::Png, "/files/a.png", (300.0, 300.0))
        .build();
    let id = scene.children()[0].id();

    scene.handle_pointer_down(&at(310.0, 310.0));
    scene.handle_pointer_move(&at(5000.0, 4000.0));
    assert!(scene.handle_pointer_up(&at(5000.0, 4000.0)));

    assert!(scene.input_state().is_idle());
    let node = scene.get(id).unwrap();
    assert!(!node.is_dragging());
    assert_close(node.position(), Vector::new(4990.0, 3990.0));
}

#[test]
fn test_moves_without_a_drag_are_ignored() {
    let mut scene = TestSceneBuilder::new()
        .with_node(ContentType::Png, "/files/a.png", (300.0, 300.0))
        .build();

    assert!(!scene.handle_pointer_move(&at(320.0, 320.0)));
    assert!(!scene.handle_pointer_up(&at(320.0, 320.0)));
    assert_close(scene.children()[0].position(), Vector::new(300.0, 300.0));
}

#[test]
fn test_click_does_not_announce_a_layout_change() {
    let mut scene = TestSceneBuilder::new()
        .with_node(ContentType::Png, "/files/a.png", (300.0, 300.0))
        .build();

    drag(&mut scene, (320.0, 320.0), (321.0, 321.0));

    assert!(scene.take_events().is_empty());
    assert_eq!(scene.children().len(), 1);
}

#[test]
fn test_topmost_node_is_dragged() {
    let mut scene = TestSceneBuilder::new()
        .with_node(ContentType::Png, "/files/under.png", (300.0, 300.0))
        .with_node(ContentType::Png, "/files/over.png", (350.0, 350.0))
        .build();
    let under = scene.children()[0].id();
    let over = scene.children()[1].id();

    drag(&mut scene, (375.0, 375.0), (475.0, 375.0));

    assert_close(scene.get(over).unwrap().position(), Vector::new(450.0, 350.0));
    assert_close(scene.get(under).unwrap().position(), Vector::new(300.0, 300.0));
}

#[test]
fn test_alt_press_deletes_node() {
    let mut scene = TestSceneBuilder::new()
        .with_node(ContentType::Png, "/files/a.png", (300.0, 300.0))
        .build();
    let id = scene.children()[0].id();

    let press = at(320.0, 320.0).with_modifiers(Modifiers::alt());
    assert!(scene.handle_pointer_down(&press));

    assert!(!scene.contains(id));
    assert!(scene.input_state().is_idle());
    assert_eq!(scene.node_at(Vector::new(320.0, 320.0)), None);
    assert_eq!(scene.take_events(), vec![SceneEvent::LayoutChanged]);

    // Second removal is a no-op.
    assert!(!scene.delete_node(id));
    assert!(scene.take_events().is_empty());
}

#[test]
fn test_removing_dragged_node_stops_routing() {
    let mut scene = TestSceneBuilder::new()
        .with_node(ContentType::Png, "/files/a.png", (300.0, 300.0))
        .build();
    let id = scene.children()[0].id();

    scene.handle_pointer_down(&at(320.0, 320.0));
    assert!(scene.delete_node(id));

    assert!(scene.input_state().is_idle());
    assert!(!scene.handle_pointer_move(&at(400.0, 400.0)));
    assert!(!scene.handle_pointer_up(&at(400.0, 400.0)));
}

#[test]
fn test_press_without_release_finishes_previous_drag() {
    let mut scene = TestSceneBuilder::new()
        .with_node(ContentType::Png, "/files/a.png", (300.0, 300.0))
        .with_node(ContentType::Png, "/files/b.png", (600.0, 300.0))
        .build();
    let a = scene.children()[0].id();
    let b = scene.children()[1].id();

    scene.handle_pointer_down(&at(310.0, 310.0));
    scene.handle_pointer_move(&at(320.0, 310.0));
    scene.handle_pointer_down(&at(610.0, 310.0));

    // The stale node rests where the last move left it.
    let stale = scene.get(a).unwrap();
    assert!(!stale.is_dragging());
    assert!(!stale.in_stage());
    assert_eq!(stale.depth(), Depth::SceneItem);
    assert_close(stale.position(), Vector::new(310.0, 300.0));
    assert_eq!(scene.node_at(Vector::new(315.0, 305.0)), Some(a));
    assert_eq!(scene.input_state().dragged_node(), Some(b));
}

#[test]
fn test_press_on_stage_during_stale_drag_keeps_node_in_scene() {
    let mut scene = TestSceneBuilder::new()
        .with_template(ContentType::Png, "/files/template.png")
        .with_node(ContentType::Png, "/files/a.png", (300.0, 300.0))
        .build();
    let a = scene.children()[0].id();

    scene.handle_pointer_down(&at(310.0, 310.0));
    scene.handle_pointer_move(&at(320.0, 310.0));
    assert!(scene.handle_pointer_down(&at(50.0, 50.0)));

    assert!(scene.contains(a));
    assert!(scene.stage().get(a).is_none());
    assert_eq!(scene.stage().len(), 1);
    assert_close(scene.get(a).unwrap().position(), Vector::new(310.0, 300.0));

    // The press on the template started a fresh clone drag.
    let dragged = scene.input_state().dragged_node().unwrap();
    assert_ne!(dragged, a);
    assert!(scene.get(dragged).unwrap().is_dragging());
}
