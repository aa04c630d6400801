//! Walks a descriptor tree and materializes it into stage nodes.

use std::borrow::Cow;

use stage_core::{NodeId, Stage};
use stage_layout::Axis;

use crate::descriptor::{Descriptor, Kind, Props};
use crate::element::ElementKind;
use crate::primitives::{self, ImageSizing};
use crate::{layout, ComposeError, UiConfig};

/// An image placeholder waiting for its texture.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingTexture {
    pub node: NodeId,
    pub src: String,
    pub sizing: ImageSizing,
}

/// One composition pass over a stage. Not reentrant; create one per pass.
pub struct Reconciler<'a> {
    stage: &'a mut Stage,
    config: &'a UiConfig,
    pending_textures: Vec<PendingTexture>,
}

impl<'a> Reconciler<'a> {
    pub fn new(stage: &'a mut Stage, config: &'a UiConfig) -> Self {
        Self {
            stage,
            config,
            pending_textures: Vec::new(),
        }
    }

    pub fn stage(&mut self) -> &mut Stage {
        self.stage
    }

    pub fn config(&self) -> &UiConfig {
        self.config
    }

    pub fn pending_textures(&self) -> &[PendingTexture] {
        &self.pending_textures
    }

    pub fn into_pending_textures(self) -> Vec<PendingTexture> {
        self.pending_textures
    }

    pub(crate) fn request_texture(&mut self, request: PendingTexture) {
        log::debug!("image {} waits for `{}`", request.node, request.src);
        self.pending_textures.push(request);
    }

    /// Renders `descriptor` into a detached node and returns its id.
    pub fn render(&mut self, descriptor: &Descriptor) -> Result<NodeId, ComposeError> {
        let empty = Props::new();
        let mut current = Cow::Borrowed(descriptor);
        loop {
            let props = current.props().unwrap_or(&empty);
            let next = match current.kind() {
                Kind::Component(component) => component.call(props, current.children()),
                Kind::Element(tag) => {
                    let kind = ElementKind::from_tag(tag)
                        .ok_or_else(|| ComposeError::UnknownElementKind { tag: tag.clone() })?;
                    let node = self.render_element(kind, props, current.children())?;
                    self.apply_transform(node, props)?;
                    return Ok(node);
                }
            };
            current = Cow::Owned(next);
        }
    }

    /// Renders each child in order and appends it to `parent`.
    pub(crate) fn render_children_into(
        &mut self,
        parent: NodeId,
        children: &[Descriptor],
    ) -> Result<(), ComposeError> {
        for child in children {
            let id = self.render(child)?;
            self.stage.add_child(parent, id)?;
        }
        Ok(())
    }

    fn render_element(
        &mut self,
        kind: ElementKind,
        props: &Props,
        children: &[Descriptor],
    ) -> Result<NodeId, ComposeError> {
        log::debug!("render {} with {} child(ren)", kind.tag(), children.len());
        match kind {
            ElementKind::Box => primitives::create_box(self, children),
            ElementKind::Text => primitives::create_text(self, props),
            ElementKind::Button => primitives::create_button(self, props),
            ElementKind::Image => primitives::create_image(self, props, children),
            ElementKind::Column => layout::layout_list(self, props, children, Axis::Vertical),
            ElementKind::Row => layout::layout_list(self, props, children, Axis::Horizontal),
            ElementKind::Grid => layout::layout_grid(self, props, children),
            ElementKind::Drawer => primitives::create_drawer(self, props, children),
        }
    }

    /// Explicit `x`, `y` and `rotation` win over whatever the constructor set.
    fn apply_transform(&mut self, node: NodeId, props: &Props) -> Result<(), ComposeError> {
        let x = props.number("x");
        let y = props.number("y");
        let rotation = props.number("rotation");
        if x.is_none() && y.is_none() && rotation.is_none() {
            return Ok(());
        }
        let transform = &mut self.stage.get_mut(node)?.base_mut().transform;
        if let Some(x) = x {
            transform.position.x = x;
        }
        if let Some(y) = y {
            transform.position.y = y;
        }
        if let Some(rotation) = rotation {
            transform.rotation = rotation;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/reconciler_tests.rs"]
mod tests;
