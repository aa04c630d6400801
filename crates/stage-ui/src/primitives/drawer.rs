use stage_core::{ContainerNode, Fill, GraphicsNode, NodeId, Rect, Size};
use stage_graphics::Color;

use crate::descriptor::{Descriptor, Props};
use crate::reconciler::Reconciler;
use crate::ComposeError;

const DEFAULT_PANEL_SIZE: f32 = 200.0;
const DEFAULT_BACKDROP_ALPHA: f32 = 0.5;

/// Edge the drawer panel is flush against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DrawerSide {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl DrawerSide {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(DrawerSide::Left),
            "right" => Some(DrawerSide::Right),
            "top" => Some(DrawerSide::Top),
            "bottom" => Some(DrawerSide::Bottom),
            _ => None,
        }
    }
}

/// Overlay drawer. The panel content is always rendered, so a closed drawer
/// still reports structural errors and queues its image loads; only the
/// attachment is skipped and the container stays empty.
pub(crate) fn create_drawer(
    reconciler: &mut Reconciler<'_>,
    props: &Props,
    children: &[Descriptor],
) -> Result<NodeId, ComposeError> {
    let container = reconciler.stage().create(ContainerNode::new());
    let viewport = reconciler.config().viewport;
    let width = props.number("width").unwrap_or(viewport.width);
    let height = props.number("height").unwrap_or(viewport.height);
    let size = props.number("size").unwrap_or(DEFAULT_PANEL_SIZE);
    let side = match props.text("side") {
        Some(name) => DrawerSide::from_name(name).unwrap_or_else(|| {
            log::warn!("unknown drawer side `{name}`; using left");
            DrawerSide::Left
        }),
        None => DrawerSide::Left,
    };

    let mut backdrop = GraphicsNode::new();
    backdrop.rect(
        Rect::new(0.0, 0.0, width, height),
        Fill {
            color: Color::BLACK,
            alpha: props
                .number("backdropAlpha")
                .unwrap_or(DEFAULT_BACKDROP_ALPHA),
        },
    );
    let backdrop = reconciler.stage().create(backdrop);

    let mut panel = ContainerNode::new();
    match side {
        DrawerSide::Left | DrawerSide::Top => {}
        DrawerSide::Right => panel.base.transform.position.x = width - size,
        DrawerSide::Bottom => panel.base.transform.position.y = height - size,
    }
    panel.base.set_logical_size(match side {
        DrawerSide::Left | DrawerSide::Right => Size::new(size, height),
        DrawerSide::Top | DrawerSide::Bottom => Size::new(width, size),
    });
    let panel = reconciler.stage().create(panel);
    reconciler.render_children_into(panel, children)?;

    let stage = reconciler.stage();
    if !props.flag("isOpen").unwrap_or(false) {
        stage.remove(backdrop)?;
        stage.remove(panel)?;
        return Ok(container);
    }
    stage.add_child(container, backdrop)?;
    stage.add_child(container, panel)?;
    Ok(container)
}

#[cfg(test)]
#[path = "tests/drawer_tests.rs"]
mod tests;
