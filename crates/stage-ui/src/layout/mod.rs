//! Stacked list and grid containers.
//!
//! Children are fully rendered before any of them is placed, since a list's
//! cross-axis extent depends on the largest child.

use stage_core::{ContainerNode, NodeError, NodeId, Point, Stage};
use stage_layout::{place_grid, place_list, Axis, ChildFrame, CrossAlignment, GridSpec, ListSpec};

use crate::descriptor::{Descriptor, Props};
use crate::reconciler::Reconciler;
use crate::ComposeError;

/// Reads what placement needs from a rendered child, preferring its logical
/// size over raw bounds.
pub fn child_frame(stage: &Stage, id: NodeId) -> Result<ChildFrame, NodeError> {
    let node = stage.get(id)?;
    let size = match node.base().logical_size() {
        Some(size) => size,
        None => stage.size(id)?,
    };
    Ok(ChildFrame::new(size)
        .anchor(node.anchor().unwrap_or(Point::ZERO))
        .pivot(node.base().transform.pivot))
}

pub fn list_spec(props: &Props, axis: Axis) -> ListSpec {
    let defaults = ListSpec::default();
    let align = match props.text("align") {
        Some(name) => CrossAlignment::parse(axis, name).unwrap_or_else(|| {
            log::warn!("unknown {axis:?} list alignment `{name}`; using start");
            CrossAlignment::Start
        }),
        None => defaults.align,
    };
    ListSpec::new()
        .spacing(props.number("spacing").unwrap_or(defaults.spacing))
        .padding(props.number("padding").unwrap_or(defaults.padding))
        .align(align)
}

pub fn grid_spec(props: &Props) -> GridSpec {
    let defaults = GridSpec::default();
    let columns = props
        .number("columns")
        .map(|columns| if columns.is_finite() { columns.max(0.0) as usize } else { 0 })
        .unwrap_or(defaults.columns);
    GridSpec::new()
        .columns(columns)
        .spacing(props.number("spacing").unwrap_or(defaults.spacing))
}

fn render_frames(
    reconciler: &mut Reconciler<'_>,
    children: &[Descriptor],
) -> Result<Vec<(NodeId, ChildFrame)>, ComposeError> {
    let mut rendered = Vec::with_capacity(children.len());
    for child in children {
        let id = reconciler.render(child)?;
        let frame = child_frame(reconciler.stage(), id)?;
        rendered.push((id, frame));
    }
    Ok(rendered)
}

fn attach_placed(
    stage: &mut Stage,
    container: NodeId,
    rendered: &[(NodeId, ChildFrame)],
    positions: &[Point],
) -> Result<(), ComposeError> {
    for ((id, _), position) in rendered.iter().zip(positions) {
        stage.get_mut(*id)?.base_mut().transform.position = *position;
        stage.add_child(container, *id)?;
    }
    Ok(())
}

pub(crate) fn layout_list(
    reconciler: &mut Reconciler<'_>,
    props: &Props,
    children: &[Descriptor],
    axis: Axis,
) -> Result<NodeId, ComposeError> {
    let spec = list_spec(props, axis);
    let rendered = render_frames(reconciler, children)?;
    let frames: Vec<ChildFrame> = rendered.iter().map(|(_, frame)| *frame).collect();
    let placement = place_list(axis, &spec, &frames);

    let stage = reconciler.stage();
    let container = stage.create(ContainerNode::new());
    attach_placed(stage, container, &rendered, &placement.positions)?;
    Ok(container)
}

pub(crate) fn layout_grid(
    reconciler: &mut Reconciler<'_>,
    props: &Props,
    children: &[Descriptor],
) -> Result<NodeId, ComposeError> {
    let spec = grid_spec(props);
    let rendered = render_frames(reconciler, children)?;
    let frames: Vec<ChildFrame> = rendered.iter().map(|(_, frame)| *frame).collect();
    let placement = place_grid(&spec, &frames);

    let stage = reconciler.stage();
    let container = stage.create(ContainerNode::new());
    attach_placed(stage, container, &rendered, &placement.positions)?;
    Ok(container)
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
