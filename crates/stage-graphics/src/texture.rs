use std::rc::Rc;

use crate::Size;

/// Handle to decoded image data. Only the identity and natural size matter to
/// the scene graph; pixel storage belongs to the rendering backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    source: Option<Rc<str>>,
    width: f32,
    height: f32,
}

impl Texture {
    /// Stand-in texture used by placeholders before the real asset arrives.
    pub fn empty() -> Self {
        Self {
            source: None,
            width: 1.0,
            height: 1.0,
        }
    }

    pub fn new(source: impl Into<Rc<str>>, width: f32, height: f32) -> Self {
        Self {
            source: Some(source.into()),
            width,
            height,
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_none()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for Texture {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Normal,
    Add,
    Multiply,
    Screen,
}

impl BlendMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(BlendMode::Normal),
            "add" => Some(BlendMode::Add),
            "multiply" => Some(BlendMode::Multiply),
            "screen" => Some(BlendMode::Screen),
            _ => None,
        }
    }
}
