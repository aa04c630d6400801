use stage_core::{
    Affine, GraphicsCommand, GraphicsNode, NodeError, NodeId, Rect, SpriteNode, Stage, TextNode,
};
use stage_graphics::Color;

/// A draw operation recorded by the headless renderer. Rectangles are in stage space.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    Fill {
        node_id: NodeId,
        rect: Rect,
        color: Color,
        /// Fill alpha times the accumulated node alpha.
        alpha: f32,
        corner_radius: f32,
    },
    Text {
        node_id: NodeId,
        rect: Rect,
        value: String,
        color: Color,
        alpha: f32,
    },
    Sprite {
        node_id: NodeId,
        rect: Rect,
        source: Option<String>,
        tint: Color,
        alpha: f32,
    },
}

impl RenderOp {
    pub fn node_id(&self) -> NodeId {
        match self {
            RenderOp::Fill { node_id, .. }
            | RenderOp::Text { node_id, .. }
            | RenderOp::Sprite { node_id, .. } => *node_id,
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            RenderOp::Fill { rect, .. }
            | RenderOp::Text { rect, .. }
            | RenderOp::Sprite { rect, .. } => *rect,
        }
    }
}

/// A collection of render operations for a composed scene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedRenderScene {
    operations: Vec<RenderOp>,
}

impl RecordedRenderScene {
    pub fn new(operations: Vec<RenderOp>) -> Self {
        Self { operations }
    }

    /// Returns a slice of recorded render operations in paint order.
    pub fn operations(&self) -> &[RenderOp] {
        &self.operations
    }

    pub fn into_operations(self) -> Vec<RenderOp> {
        self.operations
    }

    /// Text values in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().filter_map(|op| match op {
            RenderOp::Text { value, .. } => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn sprites(&self) -> impl Iterator<Item = &RenderOp> {
        self.operations
            .iter()
            .filter(|op| matches!(op, RenderOp::Sprite { .. }))
    }
}

/// Walks the stage from its root and records what a backend would draw.
pub struct HeadlessRenderer<'a> {
    stage: &'a Stage,
}

impl<'a> HeadlessRenderer<'a> {
    pub fn new(stage: &'a Stage) -> Self {
        Self { stage }
    }

    pub fn render(&self) -> Result<RecordedRenderScene, NodeError> {
        let mut operations = Vec::new();
        self.render_node(self.stage.root(), &Affine::IDENTITY, 1.0, &mut operations)?;
        Ok(RecordedRenderScene::new(operations))
    }

    fn render_node(
        &self,
        id: NodeId,
        parent: &Affine,
        parent_alpha: f32,
        operations: &mut Vec<RenderOp>,
    ) -> Result<(), NodeError> {
        let node = self.stage.get(id)?;
        let base = node.base();
        if !base.visible {
            return Ok(());
        }
        let world = parent.then(&base.transform.matrix());
        let alpha = parent_alpha * base.alpha;
        let any = node.as_any();

        if let Some(graphics) = any.downcast_ref::<GraphicsNode>() {
            for command in graphics.commands() {
                let fill = command.fill();
                let corner_radius = match command {
                    GraphicsCommand::RoundRect { radius, .. } => *radius,
                    GraphicsCommand::Rect { .. } => 0.0,
                };
                operations.push(RenderOp::Fill {
                    node_id: id,
                    rect: world.transform_rect(&command.rect()),
                    color: fill.color,
                    alpha: alpha * fill.alpha,
                    corner_radius,
                });
            }
        } else if let Some(text) = any.downcast_ref::<TextNode>() {
            if let Some(bounds) = node.content_bounds() {
                operations.push(RenderOp::Text {
                    node_id: id,
                    rect: world.transform_rect(&bounds),
                    value: text.text.clone(),
                    color: text.style.fill.unwrap_or(Color::WHITE),
                    alpha,
                });
            }
        } else if let Some(sprite) = any.downcast_ref::<SpriteNode>() {
            if let Some(bounds) = node.content_bounds() {
                operations.push(RenderOp::Sprite {
                    node_id: id,
                    rect: world.transform_rect(&bounds),
                    source: sprite.texture.source().map(str::to_owned),
                    tint: sprite.tint,
                    alpha,
                });
            }
        }

        for child in base.children() {
            self.render_node(child, &world, alpha, operations)?;
        }
        Ok(())
    }
}
