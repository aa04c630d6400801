//! Human-readable dumps of the stage and of recorded scenes.

use std::fmt::Write;

use stage_core::{NodeId, Stage};

use crate::renderer::{RecordedRenderScene, RenderOp};

/// One line per node: id, node type, position and displayed size.
pub fn format_scene_tree(stage: &Stage) -> String {
    let mut output = String::new();
    write_node(stage, stage.root(), 0, &mut output);
    output
}

fn write_node(stage: &Stage, id: NodeId, depth: usize, output: &mut String) {
    let indent = "  ".repeat(depth);
    let node = match stage.get(id) {
        Ok(node) => node,
        Err(err) => {
            let _ = writeln!(output, "{indent}[{id}] <{err}>");
            return;
        }
    };
    let base = node.base();
    let position = base.transform.position;
    let _ = write!(
        output,
        "{indent}[{id}] {} at ({:.1}, {:.1})",
        node.label(),
        position.x,
        position.y
    );
    if let Ok(size) = stage.size(id) {
        let _ = write!(output, " size {:.1}x{:.1}", size.width, size.height);
    }
    if let Some(logical) = base.logical_size() {
        let _ = write!(output, " logical {:.1}x{:.1}", logical.width, logical.height);
    }
    if !base.visible {
        output.push_str(" hidden");
    }
    output.push('\n');
    for child in base.children() {
        write_node(stage, child, depth + 1, output);
    }
}

pub fn format_render_scene(scene: &RecordedRenderScene) -> String {
    let mut output = String::new();
    for op in scene.operations() {
        let rect = op.rect();
        let _ = match op {
            RenderOp::Fill { color, alpha, .. } => writeln!(
                output,
                "fill #{} {color:?} a={alpha:.2} ({:.1}, {:.1}, {:.1}, {:.1})",
                op.node_id(),
                rect.x,
                rect.y,
                rect.width,
                rect.height
            ),
            RenderOp::Text { value, .. } => writeln!(
                output,
                "text #{} {value:?} ({:.1}, {:.1}, {:.1}, {:.1})",
                op.node_id(),
                rect.x,
                rect.y,
                rect.width,
                rect.height
            ),
            RenderOp::Sprite { source, .. } => writeln!(
                output,
                "sprite #{} {} ({:.1}, {:.1}, {:.1}, {:.1})",
                op.node_id(),
                source.as_deref().unwrap_or("<placeholder>"),
                rect.x,
                rect.y,
                rect.width,
                rect.height
            ),
        };
    }
    output
}

pub fn log_scene_tree(stage: &Stage) {
    for line in format_scene_tree(stage).lines() {
        log::info!("{line}");
    }
}

pub fn log_render_scene(scene: &RecordedRenderScene) {
    for line in format_render_scene(scene).lines() {
        log::info!("{line}");
    }
}

#[cfg(test)]
#[path = "tests/debug_tests.rs"]
mod tests;
