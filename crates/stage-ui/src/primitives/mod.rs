//! One constructor per primitive tag.

mod button;
mod drawer;
mod image;
mod text;

pub use button::{
    transition, ButtonColors, ButtonEvent, ButtonNode, ButtonPalette, ButtonState,
    ButtonStateMachine, ButtonTransition, ButtonVariant, BUTTON_CORNER_RADIUS, BUTTON_FONT_SIZE,
};
pub use drawer::DrawerSide;
pub use image::{attach_loaded_texture, ImageSizing, ScaleMode};
pub use text::{text_style_from_props, variant_style};

pub(crate) use button::create_button;
pub(crate) use drawer::create_drawer;
pub(crate) use image::create_image;
pub(crate) use text::create_text;

use stage_core::{ContainerNode, NodeId};

use crate::descriptor::Descriptor;
use crate::reconciler::Reconciler;
use crate::ComposeError;

/// Plain container with its children appended in order.
pub(crate) fn create_box(
    reconciler: &mut Reconciler<'_>,
    children: &[Descriptor],
) -> Result<NodeId, ComposeError> {
    let container = reconciler.stage().create(ContainerNode::new());
    reconciler.render_children_into(container, children)?;
    Ok(container)
}
