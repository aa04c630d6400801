//! Declarative layer of stage-compose: descriptors, the reconciler that turns
//! them into stage nodes, primitive widgets and stacked/grid layout.

mod compose;
mod config;
mod debug;
mod descriptor;
mod element;
mod error;
mod layout;
mod primitives;
mod reconciler;
mod renderer;
pub mod widgets;

pub use compose::{compose, Composition};
pub use config::UiConfig;
pub use debug::{format_render_scene, format_scene_tree, log_render_scene, log_scene_tree};
pub use descriptor::{component, h, Callback, Component, Descriptor, Kind, PropValue, Props};
pub use element::ElementKind;
pub use error::{ComposeError, ImageError};
pub use layout::{child_frame, grid_spec, list_spec};
pub use primitives::{
    attach_loaded_texture, text_style_from_props, transition, variant_style, ButtonColors,
    ButtonEvent, ButtonNode, ButtonPalette, ButtonState, ButtonStateMachine, ButtonTransition,
    ButtonVariant, DrawerSide, ImageSizing, ScaleMode, BUTTON_CORNER_RADIUS, BUTTON_FONT_SIZE,
};
pub use reconciler::{PendingTexture, Reconciler};
pub use renderer::{HeadlessRenderer, RecordedRenderScene, RenderOp};

pub use stage_core::{NodeId, Stage};
pub use stage_graphics::{Color, Point, Size, Texture};

pub mod prelude {
    pub use crate::widgets::*;
    pub use crate::{compose, component, h, Descriptor, PropValue, Props, UiConfig};
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
