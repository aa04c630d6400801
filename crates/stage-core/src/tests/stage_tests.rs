use super::*;
use crate::{EventMode, Fill, GraphicsNode, SpriteNode};
use stage_graphics::{Color, Texture};
use std::cell::Cell;
use std::rc::Rc;

fn rect_node(stage: &mut Stage, width: f32, height: f32) -> NodeId {
    let mut graphics = GraphicsNode::new();
    graphics.rect(Rect::new(0.0, 0.0, width, height), Fill::solid(Color::WHITE));
    stage.create(graphics)
}

#[test]
fn new_stage_has_root_container() {
    let stage = Stage::new();
    assert_eq!(stage.len(), 1);
    assert!(stage.read_node::<ContainerNode, _>(stage.root(), |_| ()).is_ok());
    assert!(stage.children(stage.root()).unwrap().is_empty());
}

#[test]
fn with_node_reports_type_mismatch() {
    let mut stage = Stage::new();
    let text = stage.create_text("hi", TextStyle::default());
    let err = stage
        .with_node::<SpriteNode, _>(text, |_| ())
        .expect_err("text is not a sprite");
    assert!(matches!(err, NodeError::TypeMismatch { id, .. } if id == text));
    assert_eq!(stage.get(99).err(), Some(NodeError::Missing { id: 99 }));
}

#[test]
fn add_child_enforces_single_parent() {
    let mut stage = Stage::new();
    let a = stage.create(ContainerNode::new());
    let b = stage.create(ContainerNode::new());
    let child = stage.create(ContainerNode::new());
    stage.add_child(a, child).unwrap();
    assert_eq!(
        stage.add_child(b, child),
        Err(NodeError::AlreadyAttached { id: child, parent: a })
    );
    assert_eq!(stage.children(a).unwrap(), vec![child]);
    assert!(stage.children(b).unwrap().is_empty());
    assert_eq!(stage.parent(child), Some(a));
}

#[test]
fn remove_drops_subtree_and_detaches() {
    let mut stage = Stage::new();
    let root = stage.root();
    let group = stage.create(ContainerNode::new());
    let leaf = rect_node(&mut stage, 10.0, 10.0);
    stage.add_child(root, group).unwrap();
    stage.add_child(group, leaf).unwrap();
    assert_eq!(stage.len(), 3);

    stage.remove(group).unwrap();

    assert_eq!(stage.len(), 1);
    assert!(!stage.contains(leaf));
    assert!(stage.children(root).unwrap().is_empty());
}

#[test]
fn rollback_discards_nodes_created_after_checkpoint() {
    let mut stage = Stage::new();
    let root = stage.root();
    let kept = stage.create(ContainerNode::new());
    stage.add_child(root, kept).unwrap();

    let checkpoint = stage.checkpoint();
    let doomed = stage.create(ContainerNode::new());
    stage.add_child(root, doomed).unwrap();
    let nested = stage.create(ContainerNode::new());
    stage.add_child(kept, nested).unwrap();

    stage.rollback(checkpoint);

    assert_eq!(stage.len(), 2);
    assert_eq!(stage.children(root).unwrap(), vec![kept]);
    assert!(stage.children(kept).unwrap().is_empty());
    assert_eq!(stage.create(ContainerNode::new()), doomed);
}

#[test]
fn compact_drops_trailing_empty_slots() {
    let mut stage = Stage::new();
    let root = stage.root();
    let kept = stage.create(ContainerNode::new());
    let gone = stage.create(ContainerNode::new());
    let child = stage.create(ContainerNode::new());
    stage.add_child(root, kept).unwrap();
    stage.add_child(root, gone).unwrap();
    stage.add_child(gone, child).unwrap();

    stage.remove(kept).unwrap();
    assert_eq!(stage.compact(), 0);
    stage.remove(gone).unwrap();
    assert_eq!(stage.slot_count(), 4);
    assert_eq!(stage.compact(), 3);
    assert_eq!(stage.slot_count(), 1);
    assert_eq!(stage.create(ContainerNode::new()), kept);
}

#[test]
fn bounds_include_transformed_children() {
    let mut stage = Stage::new();
    let group = stage.create(ContainerNode::new());
    let leaf = rect_node(&mut stage, 10.0, 10.0);
    stage.add_child(group, leaf).unwrap();
    stage
        .get_mut(leaf)
        .unwrap()
        .base_mut()
        .transform
        .set_position(5.0, 5.0);

    assert_eq!(stage.local_bounds(group).unwrap(), Rect::new(5.0, 5.0, 10.0, 10.0));

    stage.get_mut(group).unwrap().base_mut().transform.set_uniform_scale(2.0);
    assert_eq!(stage.size(group).unwrap(), Size::new(20.0, 20.0));
}

#[test]
fn hidden_children_do_not_contribute_bounds() {
    let mut stage = Stage::new();
    let group = stage.create(ContainerNode::new());
    let shown = rect_node(&mut stage, 10.0, 10.0);
    let hidden = rect_node(&mut stage, 100.0, 100.0);
    stage.add_child(group, shown).unwrap();
    stage.add_child(group, hidden).unwrap();
    stage.get_mut(hidden).unwrap().base_mut().visible = false;

    assert_eq!(stage.size(group).unwrap(), Size::new(10.0, 10.0));
    let empty = stage.create(ContainerNode::new());
    assert_eq!(stage.size(empty).unwrap(), Size::ZERO);
}

#[test]
fn sprite_width_maps_to_scale() {
    let mut sprite = SpriteNode::new(Texture::new("hero.png", 100.0, 50.0));
    sprite.set_width(200.0);
    assert!((sprite.base.transform.scale.x - 2.0).abs() < 1e-6);
    assert!((sprite.width() - 200.0).abs() < 1e-4);
    assert!((sprite.height() - 50.0).abs() < 1e-4);
}

#[test]
fn hit_test_bubbles_to_interactive_ancestor() {
    let mut stage = Stage::new();
    let root = stage.root();
    let group = stage.create(ContainerNode::new());
    let leaf = rect_node(&mut stage, 100.0, 50.0);
    stage.add_child(root, group).unwrap();
    stage.add_child(group, leaf).unwrap();

    assert_eq!(stage.hit_test(Point::new(10.0, 10.0)), None);

    stage.get_mut(group).unwrap().base_mut().interaction.event_mode = EventMode::Static;
    assert_eq!(stage.hit_test(Point::new(10.0, 10.0)), Some(group));
    assert_eq!(stage.hit_test(Point::new(150.0, 10.0)), None);

    stage.get_mut(leaf).unwrap().base_mut().interaction.event_mode = EventMode::Dynamic;
    assert_eq!(stage.hit_test(Point::new(10.0, 10.0)), Some(leaf));
}

#[test]
fn hit_test_prefers_topmost_sibling_and_respects_none() {
    let mut stage = Stage::new();
    let root = stage.root();
    let below = rect_node(&mut stage, 100.0, 100.0);
    let above = rect_node(&mut stage, 100.0, 100.0);
    for id in [below, above] {
        stage.add_child(root, id).unwrap();
        stage.get_mut(id).unwrap().base_mut().interaction.event_mode = EventMode::Static;
    }
    assert_eq!(stage.hit_test(Point::new(50.0, 50.0)), Some(above));

    stage.get_mut(above).unwrap().base_mut().interaction.event_mode = EventMode::None;
    assert_eq!(stage.hit_test(Point::new(50.0, 50.0)), Some(below));
}

#[test]
fn passive_content_does_not_shadow_lower_targets() {
    let mut stage = Stage::new();
    let root = stage.root();
    let group = stage.create(ContainerNode::new());
    let button = stage.create(ContainerNode::new());
    {
        let base = stage.get_mut(button).unwrap().base_mut();
        base.interaction.event_mode = EventMode::Static;
        base.interaction.hit_area = Some(Rect::new(0.0, 0.0, 120.0, 40.0));
    }
    let badge = stage.create_text("badge", TextStyle::default());
    stage
        .get_mut(badge)
        .unwrap()
        .base_mut()
        .transform
        .set_position(50.0, 10.0);
    stage.add_child(root, group).unwrap();
    stage.add_child(group, button).unwrap();
    stage.add_child(group, badge).unwrap();

    assert_eq!(stage.hit_test(Point::new(70.0, 15.0)), Some(button));
    assert_eq!(stage.hit_test(Point::new(10.0, 30.0)), Some(button));
    assert_eq!(stage.hit_test(Point::new(150.0, 30.0)), None);

    let overlay = rect_node(&mut stage, 800.0, 600.0);
    stage.add_child(group, overlay).unwrap();
    assert_eq!(stage.hit_test(Point::new(10.0, 30.0)), Some(button));

    stage.get_mut(group).unwrap().base_mut().interaction.event_mode = EventMode::Static;
    assert_eq!(stage.hit_test(Point::new(10.0, 30.0)), Some(button));
    assert_eq!(stage.hit_test(Point::new(300.0, 300.0)), Some(group));
}

#[test]
fn hit_test_uses_pivot_and_hit_area() {
    let mut stage = Stage::new();
    let root = stage.root();
    let target = stage.create(ContainerNode::new());
    stage.add_child(root, target).unwrap();
    {
        let base = stage.get_mut(target).unwrap().base_mut();
        base.transform.set_position(100.0, 0.0);
        base.transform.pivot = Point::new(50.0, 25.0);
        base.interaction.event_mode = EventMode::Static;
        base.interaction.hit_area = Some(Rect::new(0.0, 0.0, 100.0, 50.0));
    }

    assert_eq!(stage.hit_test(Point::new(60.0, 10.0)), Some(target));
    assert_eq!(stage.hit_test(Point::new(40.0, 10.0)), None);
}

#[test]
fn dispatch_runs_matching_handlers_with_stage_access() {
    let mut stage = Stage::new();
    let node = stage.create(ContainerNode::new());
    let calls = Rc::new(Cell::new(0));
    {
        let calls = Rc::clone(&calls);
        stage.get_mut(node).unwrap().base_mut().interaction.on(
            PointerEventKind::Down,
            Rc::new(move |stage: &mut Stage, id| {
                calls.set(calls.get() + 1);
                stage.get_mut(id).unwrap().base_mut().alpha = 0.5;
            }),
        );
    }

    assert_eq!(stage.dispatch(node, PointerEventKind::Up).unwrap(), 0);
    assert_eq!(stage.dispatch(node, PointerEventKind::Down).unwrap(), 1);
    assert_eq!(calls.get(), 1);
    assert_eq!(stage.get(node).unwrap().base().alpha, 0.5);
}

#[test]
fn dump_tree_lists_nodes_by_depth() {
    let mut stage = Stage::new();
    let root = stage.root();
    let text = stage.create_text("hello", TextStyle::default());
    stage.add_child(root, text).unwrap();
    let dump = stage.dump_tree();
    assert!(dump.starts_with("[0] ContainerNode\n"));
    assert!(dump.contains("  [1] TextNode"));
}
