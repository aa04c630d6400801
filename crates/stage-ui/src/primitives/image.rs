//! Sprites from a ready texture or from a source that loads later.
//!
//! A source-backed image is built in two phases: a placeholder sprite now,
//! then [`attach_loaded_texture`] once the host resolves the load. The node id
//! stays the same across the swap.

use std::rc::Rc;

use stage_core::{
    ContainerNode, EventMode, NodeError, NodeId, Point, PointerEventKind, Size, SpriteNode, Stage,
};
use stage_graphics::{BlendMode, Texture};

use crate::descriptor::{Descriptor, PropValue, Props};
use crate::reconciler::{PendingTexture, Reconciler};
use crate::{ComposeError, ImageError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleMode {
    /// Uniform, limited by the tighter axis. Never overflows the target.
    Fit,
    /// Uniform, limited by the looser axis. Covers the target.
    Fill,
    /// Width and height set independently.
    Stretch,
    None,
}

impl ScaleMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fit" => Some(ScaleMode::Fit),
            "fill" => Some(ScaleMode::Fill),
            "stretch" => Some(ScaleMode::Stretch),
            "none" => Some(ScaleMode::None),
            _ => None,
        }
    }
}

/// Requested sizing of an image, re-applied whenever its texture changes.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ImageSizing {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub scale_mode: Option<ScaleMode>,
    pub scale: Option<Point>,
}

impl ImageSizing {
    pub fn from_props(props: &Props) -> Self {
        let scale_mode = props.text("scaleMode").and_then(|name| {
            let mode = ScaleMode::from_name(name);
            if mode.is_none() {
                log::warn!("unknown scale mode `{name}`; ignoring");
            }
            mode
        });
        Self {
            width: props.number("width"),
            height: props.number("height"),
            scale_mode,
            scale: props.point_or_uniform("scale"),
        }
    }

    pub fn has_target(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }

    /// Resets the sprite's scale, then sizes it against its current texture.
    pub fn apply(&self, sprite: &mut SpriteNode) {
        sprite.base.transform.scale = Point::splat(1.0);
        match self.scale_mode {
            Some(mode) if self.has_target() => self.apply_scale_mode(sprite, mode),
            _ => {
                if let Some(width) = self.width {
                    sprite.set_width(width);
                }
                if let Some(height) = self.height {
                    sprite.set_height(height);
                }
                if let Some(scale) = self.scale {
                    sprite.base.transform.scale = scale;
                }
            }
        }
    }

    fn apply_scale_mode(&self, sprite: &mut SpriteNode, mode: ScaleMode) {
        let natural = sprite.texture.size();
        if natural.width <= 0.0 || natural.height <= 0.0 {
            return;
        }
        let target_width = self.width.unwrap_or(natural.width);
        let target_height = self.height.unwrap_or(natural.height);
        let ratio_x = target_width / natural.width;
        let ratio_y = target_height / natural.height;
        match mode {
            ScaleMode::Fit => sprite.base.transform.set_uniform_scale(ratio_x.min(ratio_y)),
            ScaleMode::Fill => sprite.base.transform.set_uniform_scale(ratio_x.max(ratio_y)),
            ScaleMode::Stretch => {
                sprite.set_width(target_width);
                sprite.set_height(target_height);
            }
            ScaleMode::None => {}
        }
    }
}

/// Second phase of a source-backed image: swap in the texture and re-apply sizing.
///
/// The logical size recorded at construction is left as is.
pub fn attach_loaded_texture(
    stage: &mut Stage,
    node: NodeId,
    texture: Texture,
    sizing: &ImageSizing,
) -> Result<(), NodeError> {
    stage.with_node::<SpriteNode, _>(node, |sprite| {
        sprite.texture = texture;
        sizing.apply(sprite);
    })
}

enum ImageSource<'p> {
    Ready(&'p Texture),
    Deferred(&'p str),
}

fn image_source(props: &Props) -> Option<ImageSource<'_>> {
    if let Some(texture) = props.texture("texture") {
        return Some(ImageSource::Ready(texture));
    }
    match props.get("src")? {
        PropValue::Text(src) if !src.is_empty() => Some(ImageSource::Deferred(src)),
        PropValue::Texture(texture) => Some(ImageSource::Ready(texture)),
        PropValue::Text(_) => None,
        other => {
            log::warn!("prop `src` expected text or texture, found {other:?}; ignoring");
            None
        }
    }
}

fn apply_style(sprite: &mut SpriteNode, style: &Props) {
    if let Some(tint) = style.color("tint") {
        sprite.tint = tint;
    }
    if let Some(alpha) = style.number("alpha") {
        sprite.base.alpha = alpha;
    }
    if let Some(visible) = style.flag("visible") {
        sprite.base.visible = visible;
    }
    if let Some(name) = style.text("blendMode") {
        match BlendMode::from_name(name) {
            Some(mode) => sprite.blend_mode = mode,
            None => log::warn!("unknown blend mode `{name}`; ignoring"),
        }
    }
    if let Some(round) = style.flag("roundPixels") {
        sprite.round_pixels = round;
    }
}

fn event_mode(props: &Props) -> Option<EventMode> {
    let name = props.text("eventMode")?;
    let mode = EventMode::from_name(name);
    if mode.is_none() {
        log::warn!("unknown event mode `{name}`; ignoring");
    }
    mode
}

fn apply_interaction(sprite: &mut SpriteNode, props: &Props) {
    let interaction = &mut sprite.base.interaction;
    let cursor = props.text("cursor").map(str::to_owned);
    match props.callback("onClick") {
        Some(on_click) => {
            interaction.event_mode = event_mode(props).unwrap_or(EventMode::Static);
            interaction.cursor = cursor.or_else(|| Some("pointer".to_owned()));
            interaction.on(
                PointerEventKind::Tap,
                Rc::new(move |_: &mut Stage, _: NodeId| on_click()),
            );
        }
        None => {
            if let Some(mode) = event_mode(props) {
                interaction.event_mode = mode;
                if cursor.is_some() {
                    interaction.cursor = cursor;
                }
            }
        }
    }
}

pub(crate) fn create_image(
    reconciler: &mut Reconciler<'_>,
    props: &Props,
    children: &[Descriptor],
) -> Result<NodeId, ComposeError> {
    let Some(source) = image_source(props) else {
        log::error!("{}", ImageError::MissingImageSource);
        return Ok(reconciler.stage().create(ContainerNode::new()));
    };
    let sizing = ImageSizing::from_props(props);
    let config = *reconciler.config();

    let (mut sprite, logical_size, deferred) = match source {
        ImageSource::Ready(texture) => {
            let mut sprite = SpriteNode::new(texture.clone());
            sizing.apply(&mut sprite);
            let size = Size::new(sprite.width(), sprite.height());
            (sprite, size, None)
        }
        ImageSource::Deferred(src) => {
            let fallback = if sizing.scale_mode.is_some() {
                config.scaled_image_placeholder
            } else {
                config.image_placeholder
            };
            let size = Size::new(
                sizing.width.unwrap_or(fallback.width),
                sizing.height.unwrap_or(fallback.height),
            );
            let mut sprite = SpriteNode::new(Texture::empty());
            sprite.set_width(size.width);
            sprite.set_height(size.height);
            (sprite, size, Some(src.to_owned()))
        }
    };
    sprite.anchor = props
        .point_or_uniform("anchor")
        .unwrap_or(Point::splat(0.5));
    if let Some(style) = props.map("style") {
        apply_style(&mut sprite, style);
    }
    apply_interaction(&mut sprite, props);
    sprite.base.set_logical_size(logical_size);

    let id = reconciler.stage().create(sprite);
    reconciler.render_children_into(id, children)?;
    if let Some(src) = deferred {
        reconciler.request_texture(PendingTexture {
            node: id,
            src,
            sizing,
        });
    }
    Ok(id)
}

#[cfg(test)]
#[path = "tests/image_tests.rs"]
mod tests;
