use std::fmt;

use stage_graphics::{Affine, Point, Rect, Size, TextStyle};

use crate::{
    ApproximateTextMeasurer, ContainerNode, Node, NodeError, NodeId, PointerEventKind,
    TextMeasurer, TextNode,
};

/// Marker returned by [`Stage::checkpoint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageCheckpoint(usize);

enum Hit {
    Miss,
    /// Drawn content was hit but nothing interactive claimed it yet.
    Content,
    Target(NodeId),
}

/// Arena owning every retained node. Slot `0` is the root container that
/// composed trees are attached to.
pub struct Stage {
    nodes: Vec<Option<Box<dyn Node>>>,
    root: NodeId,
    measurer: Box<dyn TextMeasurer>,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("root", &self.root)
            .field("nodes", &self.len())
            .finish()
    }
}

impl Stage {
    pub fn new() -> Self {
        Self::with_measurer(ApproximateTextMeasurer::default())
    }

    pub fn with_measurer(measurer: impl TextMeasurer + 'static) -> Self {
        let mut stage = Self {
            nodes: Vec::new(),
            root: 0,
            measurer: Box::new(measurer),
        };
        stage.root = stage.create(ContainerNode::new());
        stage
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn create(&mut self, node: impl Node) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Some(Box::new(node)));
        id
    }

    pub fn measure_text(&self, text: &str, style: &TextStyle) -> Size {
        self.measurer.measure(text, style)
    }

    /// Creates a [`TextNode`] measured by this stage's measurer.
    pub fn create_text(&mut self, text: impl Into<String>, style: TextStyle) -> NodeId {
        let text = text.into();
        let measured = self.measure_text(&text, &style);
        self.create(TextNode::new(text, style, measured))
    }

    pub fn get(&self, id: NodeId) -> Result<&dyn Node, NodeError> {
        self.nodes
            .get(id)
            .and_then(|slot| slot.as_deref())
            .ok_or(NodeError::Missing { id })
    }

    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut dyn Node, NodeError> {
        match self.nodes.get_mut(id) {
            Some(Some(node)) => Ok(node.as_mut()),
            _ => Err(NodeError::Missing { id }),
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_ok()
    }

    pub fn with_node<N: Node, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut N) -> R,
    ) -> Result<R, NodeError> {
        let node = self.get_mut(id)?;
        let typed = node
            .as_any_mut()
            .downcast_mut::<N>()
            .ok_or(NodeError::TypeMismatch {
                id,
                expected: std::any::type_name::<N>(),
            })?;
        Ok(f(typed))
    }

    pub fn read_node<N: Node, R>(
        &self,
        id: NodeId,
        f: impl FnOnce(&N) -> R,
    ) -> Result<R, NodeError> {
        let node = self.get(id)?;
        let typed = node
            .as_any()
            .downcast_ref::<N>()
            .ok_or(NodeError::TypeMismatch {
                id,
                expected: std::any::type_name::<N>(),
            })?;
        Ok(f(typed))
    }

    /// Appends `child` to `parent`. A node can only ever have one parent.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), NodeError> {
        self.get(parent)?;
        let child_node = self.get_mut(child)?;
        if let Some(existing) = child_node.base().parent() {
            return Err(NodeError::AlreadyAttached {
                id: child,
                parent: existing,
            });
        }
        child_node.base_mut().set_parent(Some(parent));
        self.get_mut(parent)?.base_mut().insert_child(child);
        Ok(())
    }

    pub fn children(&self, id: NodeId) -> Result<Vec<NodeId>, NodeError> {
        Ok(self.get(id)?.base().children())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).ok().and_then(|node| node.base().parent())
    }

    /// Removes a node and its whole subtree, detaching it from its parent.
    pub fn remove(&mut self, id: NodeId) -> Result<(), NodeError> {
        let parent = self.get(id)?.base().parent();
        if let Some(parent) = parent {
            if let Ok(parent_node) = self.get_mut(parent) {
                parent_node.base_mut().remove_child(id);
            }
        }
        self.remove_subtree(id);
        Ok(())
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let children = match self.get(id) {
            Ok(node) => node.base().children(),
            Err(_) => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
        if let Some(slot) = self.nodes.get_mut(id) {
            slot.take();
        }
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of id slots handed out so far, removed nodes included.
    pub fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    /// Drops the empty slots at the end of the arena so their ids are handed
    /// out again. Ids of removed nodes held elsewhere may then alias new nodes.
    pub fn compact(&mut self) -> usize {
        let live = self
            .nodes
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |last| last + 1);
        let dropped = self.nodes.len() - live;
        self.nodes.truncate(live);
        dropped
    }

    pub fn checkpoint(&self) -> StageCheckpoint {
        StageCheckpoint(self.nodes.len())
    }

    /// Discards every node created after `checkpoint` and unlinks them from older parents.
    pub fn rollback(&mut self, checkpoint: StageCheckpoint) {
        let StageCheckpoint(mark) = checkpoint;
        if mark >= self.nodes.len() {
            return;
        }
        for slot in self.nodes.iter_mut().take(mark).flatten() {
            let stale: Vec<NodeId> = slot
                .base()
                .children()
                .into_iter()
                .filter(|child| *child >= mark)
                .collect();
            for child in stale {
                slot.base_mut().remove_child(child);
            }
        }
        self.nodes.truncate(mark);
    }

    /// Bounds of the node's content and visible children, in the node's own space.
    pub fn local_bounds(&self, id: NodeId) -> Result<Rect, NodeError> {
        let node = self.get(id)?;
        let mut bounds = node.content_bounds();
        for child in node.base().children() {
            let child_node = self.get(child)?;
            if !child_node.base().visible {
                continue;
            }
            let child_bounds = self.local_bounds(child)?;
            let in_parent = child_node
                .base()
                .transform
                .matrix()
                .transform_rect(&child_bounds);
            bounds = Some(match bounds {
                Some(acc) => acc.union(&in_parent),
                None => in_parent,
            });
        }
        Ok(bounds.unwrap_or(Rect::ZERO))
    }

    /// Displayed size: local bounds scaled by the node's own scale.
    pub fn size(&self, id: NodeId) -> Result<Size, NodeError> {
        let bounds = self.local_bounds(id)?;
        let scale = self.get(id)?.base().transform.scale;
        Ok(Size::new(
            bounds.width * scale.x.abs(),
            bounds.height * scale.y.abs(),
        ))
    }

    /// Transform from the node's local space to stage space.
    pub fn world_matrix(&self, id: NodeId) -> Result<Affine, NodeError> {
        let node = self.get(id)?;
        let local = node.base().transform.matrix();
        match node.base().parent() {
            Some(parent) => Ok(self.world_matrix(parent)?.then(&local)),
            None => Ok(local),
        }
    }

    /// Topmost interactive node under `point`, in stage coordinates.
    pub fn hit_test(&self, point: Point) -> Option<NodeId> {
        match self.hit_node(self.root, &Affine::IDENTITY, point) {
            Hit::Target(id) => Some(id),
            Hit::Content | Hit::Miss => None,
        }
    }

    fn hit_node(&self, id: NodeId, parent: &Affine, point: Point) -> Hit {
        let Ok(node) = self.get(id) else {
            return Hit::Miss;
        };
        let base = node.base();
        if !base.visible || base.interaction.event_mode == crate::EventMode::None {
            return Hit::Miss;
        }
        let world = parent.then(&base.transform.matrix());
        let Some(local) = world.inverse().map(|inverse| inverse.apply(point)) else {
            return Hit::Miss;
        };
        if let Some(area) = base.interaction.hit_area {
            if !area.contains(local) {
                return Hit::Miss;
            }
        }

        // Passive content never shadows an interactive sibling below it.
        let mut content_hit = false;
        for child in base.children().into_iter().rev() {
            match self.hit_node(child, &world, point) {
                Hit::Target(target) => return Hit::Target(target),
                Hit::Content => content_hit = true,
                Hit::Miss => {}
            }
        }

        let own_hit = content_hit
            || base.interaction.hit_area.is_some()
            || node
                .content_bounds()
                .is_some_and(|bounds| bounds.contains(local));
        match (own_hit, base.interaction.is_interactive()) {
            (true, true) => Hit::Target(id),
            (true, false) => Hit::Content,
            (false, _) => Hit::Miss,
        }
    }

    /// Invokes the handlers `target` registered for `kind`. Returns how many ran.
    pub fn dispatch(&mut self, target: NodeId, kind: PointerEventKind) -> Result<usize, NodeError> {
        let handlers = self.get(target)?.base().interaction.handlers_for(kind);
        for handler in &handlers {
            handler(self, target);
        }
        Ok(handlers.len())
    }

    pub fn dump_tree(&self) -> String {
        let mut output = String::new();
        self.dump_node(&mut output, self.root, 0);
        output
    }

    fn dump_node(&self, output: &mut String, id: NodeId, depth: usize) {
        let indent = "  ".repeat(depth);
        match self.get(id) {
            Ok(node) => {
                output.push_str(&format!("{}[{}] {}\n", indent, id, node.label()));
                for child in node.base().children() {
                    self.dump_node(output, child, depth + 1);
                }
            }
            Err(_) => output.push_str(&format!("{}[{}] (missing)\n", indent, id)),
        }
    }
}

#[cfg(test)]
#[path = "tests/stage_tests.rs"]
mod tests;
