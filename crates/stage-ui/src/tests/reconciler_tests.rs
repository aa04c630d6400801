use super::*;
use crate::widgets::{Box, Text};
use crate::{component, h};
use stage_core::{ContainerNode, TextNode};
use stage_testing::test_stage;
use std::cell::Cell;
use std::rc::Rc;

fn render(stage: &mut Stage, descriptor: &Descriptor) -> Result<NodeId, ComposeError> {
    let config = UiConfig::default();
    Reconciler::new(stage, &config).render(descriptor)
}

fn text_of(stage: &Stage, id: NodeId) -> String {
    stage
        .read_node::<TextNode, _>(id, |text| text.text.clone())
        .expect("text node")
}

#[test]
fn components_resolve_until_a_primitive() {
    let calls = Rc::new(Cell::new(0));
    let inner_calls = Rc::clone(&calls);
    let inner = component(move |props, _| {
        inner_calls.set(inner_calls.get() + 1);
        let label = props.text("label").unwrap_or("none").to_owned();
        Text(Props::new().with("text", label))
    });
    let outer = component(move |_, _| h(inner.clone(), Props::new().with("label", "hi"), []));

    let mut stage = test_stage();
    let id = render(&mut stage, &h(outer, Props::new(), [])).unwrap();

    assert_eq!(text_of(&stage, id), "hi");
    assert_eq!(calls.get(), 1);
}

#[test]
fn component_output_renders_like_the_returned_descriptor() {
    let direct = Text(Props::new().with("text", "same").with("variant", "title"));
    let wrapped = {
        let direct = direct.clone();
        h(component(move |_, _| direct.clone()), Props::new(), [])
    };

    let mut stage = test_stage();
    let a = render(&mut stage, &direct).unwrap();
    let b = render(&mut stage, &wrapped).unwrap();

    let style = |id| {
        stage
            .read_node::<TextNode, _>(id, |text| (text.text.clone(), text.style.clone()))
            .unwrap()
    };
    assert_eq!(style(a), style(b));
    assert_eq!(
        stage.get(a).unwrap().base().logical_size(),
        stage.get(b).unwrap().base().logical_size()
    );
}

#[test]
fn components_receive_empty_props_and_their_children() {
    let seen = Rc::new(Cell::new((false, 0)));
    let record = Rc::clone(&seen);
    let wrapper = component(move |props, children| {
        record.set((props.is_empty(), children.len()));
        Box(Props::new(), children.to_vec())
    });
    let descriptor = h(
        wrapper,
        None::<Props>,
        [Text(Props::new().with("text", "a")), Text(Props::new().with("text", "b"))],
    );

    let mut stage = test_stage();
    let id = render(&mut stage, &descriptor).unwrap();

    assert_eq!(seen.get(), (true, 2));
    let children = stage.children(id).unwrap();
    assert_eq!(text_of(&stage, children[0]), "a");
    assert_eq!(text_of(&stage, children[1]), "b");
}

#[test]
fn unknown_tag_fails_with_the_tag() {
    let mut stage = test_stage();
    let err = render(&mut stage, &h("Spinner", Props::new(), [])).unwrap_err();
    assert!(matches!(err, ComposeError::UnknownElementKind { ref tag } if tag == "Spinner"));
}

#[test]
fn unknown_tag_deep_in_the_tree_aborts_the_render() {
    let mut stage = test_stage();
    let tree = Box(
        Props::new(),
        [Box(Props::new(), [h("Nope", Props::new(), [])])],
    );
    assert!(matches!(
        render(&mut stage, &tree),
        Err(ComposeError::UnknownElementKind { .. })
    ));
}

#[test]
fn container_is_an_alias_for_box() {
    let mut stage = test_stage();
    let id = render(&mut stage, &h("Container", Props::new(), [])).unwrap();
    assert!(stage.read_node::<ContainerNode, _>(id, |_| ()).is_ok());
}

#[test]
fn explicit_transform_props_are_applied_last() {
    let mut stage = test_stage();
    let descriptor = h(
        "Drawer",
        Props::new()
            .with("isOpen", true)
            .with("x", 0)
            .with("y", 12.5_f32)
            .with("rotation", 0.25_f32),
        [],
    );
    let id = render(&mut stage, &descriptor).unwrap();
    let transform = stage.get(id).unwrap().base().transform;
    assert_eq!(transform.position, stage_core::Point::new(0.0, 12.5));
    assert_eq!(transform.rotation, 0.25);

    let panel = stage.children(id).unwrap()[1];
    let right = h(
        "Drawer",
        Props::new().with("isOpen", true).with("side", "right"),
        [],
    );
    let right = render(&mut stage, &right).unwrap();
    let right_panel = stage.children(right).unwrap()[1];
    assert_eq!(stage.get(panel).unwrap().base().transform.position.x, 0.0);
    assert_eq!(
        stage.get(right_panel).unwrap().base().transform.position.x,
        600.0
    );
}

#[test]
fn list_layout_positions_children_after_they_render() {
    let pinned = component(|_, children| {
        h("Box", Props::new().with("x", 0).with("y", 0), children.to_vec())
    });
    let mut stage = test_stage();
    let column = h(
        "Column",
        Props::new(),
        [Text(Props::new().with("text", "a")), h(pinned, Props::new(), [])],
    );
    let id = render(&mut stage, &column).unwrap();
    let second = stage.children(id).unwrap()[1];
    assert_eq!(
        stage.get(second).unwrap().base().transform.position,
        stage_core::Point::new(0.0, 30.0)
    );
}
