use super::*;
use crate::renderer::HeadlessRenderer;
use crate::widgets::{Box, Button, Text};
use crate::{compose, Props, UiConfig};
use stage_testing::test_stage;

#[test]
fn scene_tree_lists_position_and_sizes() {
    let mut stage = test_stage();
    compose(
        || {
            Box(
                Props::new(),
                [Text(
                    Props::new()
                        .with("text", "hi")
                        .with("x", 5)
                        .with("y", 6),
                )],
            )
        },
        &mut stage,
        &UiConfig::default(),
    )
    .unwrap();

    assert_eq!(
        format_scene_tree(&stage),
        "[0] ContainerNode at (0.0, 0.0) size 20.0x20.0\n\
         \x20 [1] ContainerNode at (0.0, 0.0) size 20.0x20.0\n\
         \x20   [2] TextNode at (5.0, 6.0) size 20.0x20.0 logical 20.0x20.0\n"
    );
}

#[test]
fn hidden_nodes_are_flagged() {
    let mut stage = test_stage();
    let id = stage.create_text("x", Default::default());
    stage.get_mut(id).unwrap().base_mut().visible = false;
    stage.add_child(stage.root(), id).unwrap();
    assert!(format_scene_tree(&stage).contains("[1] TextNode at (0.0, 0.0) size 10.0x20.0 hidden"));
}

#[test]
fn render_scene_lines_follow_paint_order() {
    let mut stage = test_stage();
    compose(
        || {
            Button(
                Props::new()
                    .with("text", "Go")
                    .with("x", 60)
                    .with("y", 20),
            )
        },
        &mut stage,
        &UiConfig::default(),
    )
    .unwrap();
    let scene = HeadlessRenderer::new(&stage).render().unwrap();
    let dump = format_render_scene(&scene);
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "fill #1 #007AFF a=1.00 (0.0, 0.0, 120.0, 40.0)");
    assert_eq!(lines[1], "text #2 \"Go\" (50.0, 10.0, 20.0, 20.0)");
}

#[test]
fn logging_helpers_do_not_panic_without_a_logger() {
    let stage = test_stage();
    log_scene_tree(&stage);
    log_render_scene(&RecordedRenderScene::default());
}
