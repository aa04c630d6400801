use std::any::Any;

use indexmap::IndexSet;
use stage_graphics::{Point, Rect, Size};

use crate::{Interaction, NodeId, Transform};

/// Type-erased access used by [`crate::Stage::with_node`] for downcasting.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A retained drawable stored in the [`crate::Stage`].
pub trait Node: AsAny {
    fn base(&self) -> &NodeBase;
    fn base_mut(&mut self) -> &mut NodeBase;

    /// Rectangle covered by the node's own drawing, in local space, excluding children.
    fn content_bounds(&self) -> Option<Rect> {
        None
    }

    /// Fractional anchor of the node's content, for nodes that have one.
    fn anchor(&self) -> Option<Point> {
        None
    }

    fn label(&self) -> &'static str {
        let name = std::any::type_name::<Self>();
        name.rsplit("::").next().unwrap_or(name)
    }
}

/// State shared by every node kind.
#[derive(Clone, Debug)]
pub struct NodeBase {
    pub transform: Transform,
    pub visible: bool,
    pub alpha: f32,
    pub interaction: Interaction,
    logical_size: Option<Size>,
    children: IndexSet<NodeId>,
    parent: Option<NodeId>,
}

impl Default for NodeBase {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            visible: true,
            alpha: 1.0,
            interaction: Interaction::default(),
            logical_size: None,
            children: IndexSet::new(),
            parent: None,
        }
    }
}

impl NodeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the layout engine uses instead of the raw bounds.
    pub fn logical_size(&self) -> Option<Size> {
        self.logical_size
    }

    /// Records the layout size. Only the first write is kept.
    pub fn set_logical_size(&mut self, size: Size) {
        if let Some(existing) = self.logical_size {
            log::warn!("logical size already set to {existing:?}; ignoring {size:?}");
            return;
        }
        self.logical_size = Some(size);
    }

    pub fn children(&self) -> Vec<NodeId> {
        self.children.iter().copied().collect()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn insert_child(&mut self, child: NodeId) {
        self.children.insert(child);
    }

    pub(crate) fn remove_child(&mut self, child: NodeId) {
        self.children.shift_remove(&child);
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }
}
