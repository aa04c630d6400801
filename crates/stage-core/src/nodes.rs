//! Built-in primitive nodes: container, text, vector graphics and sprite.

use stage_graphics::{BlendMode, Color, Point, Rect, Size, TextStyle, Texture};

use crate::{Node, NodeBase};

/// Plain group node with no drawing of its own.
#[derive(Clone, Debug, Default)]
pub struct ContainerNode {
    pub base: NodeBase,
}

impl ContainerNode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for ContainerNode {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }
}

/// Single run of styled text with a measured natural size.
#[derive(Clone, Debug)]
pub struct TextNode {
    pub base: NodeBase,
    pub text: String,
    pub style: TextStyle,
    pub anchor: Point,
    measured: Size,
}

impl TextNode {
    /// `measured` comes from the stage's [`crate::TextMeasurer`]; see [`crate::Stage::create_text`].
    pub fn new(text: impl Into<String>, style: TextStyle, measured: Size) -> Self {
        Self {
            base: NodeBase::new(),
            text: text.into(),
            style,
            anchor: Point::ZERO,
            measured,
        }
    }

    pub fn measured_size(&self) -> Size {
        self.measured
    }

    pub fn set_fill(&mut self, color: Color) {
        self.style.fill = Some(color);
    }
}

impl Node for TextNode {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn content_bounds(&self) -> Option<Rect> {
        Some(Rect::new(
            -self.anchor.x * self.measured.width,
            -self.anchor.y * self.measured.height,
            self.measured.width,
            self.measured.height,
        ))
    }

    fn anchor(&self) -> Option<Point> {
        Some(self.anchor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub color: Color,
    pub alpha: f32,
}

impl Fill {
    pub fn solid(color: Color) -> Self {
        Self { color, alpha: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GraphicsCommand {
    Rect { rect: Rect, fill: Fill },
    RoundRect { rect: Rect, radius: f32, fill: Fill },
}

impl GraphicsCommand {
    pub fn rect(&self) -> Rect {
        match self {
            GraphicsCommand::Rect { rect, .. } | GraphicsCommand::RoundRect { rect, .. } => *rect,
        }
    }

    pub fn fill(&self) -> Fill {
        match self {
            GraphicsCommand::Rect { fill, .. } | GraphicsCommand::RoundRect { fill, .. } => *fill,
        }
    }
}

/// Retained list of filled shapes.
#[derive(Clone, Debug, Default)]
pub struct GraphicsNode {
    pub base: NodeBase,
    commands: Vec<GraphicsCommand>,
}

impl GraphicsNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn rect(&mut self, rect: Rect, fill: Fill) -> &mut Self {
        self.commands.push(GraphicsCommand::Rect { rect, fill });
        self
    }

    pub fn round_rect(&mut self, rect: Rect, radius: f32, fill: Fill) -> &mut Self {
        self.commands
            .push(GraphicsCommand::RoundRect { rect, radius, fill });
        self
    }

    pub fn commands(&self) -> &[GraphicsCommand] {
        &self.commands
    }
}

impl Node for GraphicsNode {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn content_bounds(&self) -> Option<Rect> {
        self.commands
            .iter()
            .map(GraphicsCommand::rect)
            .reduce(|acc, rect| acc.union(&rect))
    }
}

/// Textured quad. Displayed size is the texture size times the node scale.
#[derive(Clone, Debug)]
pub struct SpriteNode {
    pub base: NodeBase,
    pub texture: Texture,
    pub anchor: Point,
    pub tint: Color,
    pub blend_mode: BlendMode,
    pub round_pixels: bool,
}

impl SpriteNode {
    pub fn new(texture: Texture) -> Self {
        Self {
            base: NodeBase::new(),
            texture,
            anchor: Point::ZERO,
            tint: Color::WHITE,
            blend_mode: BlendMode::Normal,
            round_pixels: false,
        }
    }

    pub fn width(&self) -> f32 {
        self.texture.width() * self.base.transform.scale.x.abs()
    }

    pub fn height(&self) -> f32 {
        self.texture.height() * self.base.transform.scale.y.abs()
    }

    pub fn set_width(&mut self, width: f32) {
        if self.texture.width() > 0.0 {
            self.base.transform.scale.x = width / self.texture.width();
        }
    }

    pub fn set_height(&mut self, height: f32) {
        if self.texture.height() > 0.0 {
            self.base.transform.scale.y = height / self.texture.height();
        }
    }
}

impl Node for SpriteNode {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn content_bounds(&self) -> Option<Rect> {
        let size = self.texture.size();
        Some(Rect::new(
            -self.anchor.x * size.width,
            -self.anchor.y * size.height,
            size.width,
            size.height,
        ))
    }

    fn anchor(&self) -> Option<Point> {
        Some(self.anchor)
    }
}
