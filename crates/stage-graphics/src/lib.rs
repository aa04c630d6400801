//! Pure math/data for drawing in stage-compose
//!
//! This crate contains geometry primitives, color definitions, text styles
//! and texture handles that are shared by the scene graph, the layout math
//! and the declarative layer.

mod color;
mod geometry;
mod texture;
mod typography;

pub use color::*;
pub use geometry::*;
pub use texture::*;
pub use typography::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Affine, Point, Rect, Size};
    pub use crate::texture::{BlendMode, Texture};
    pub use crate::typography::{FontStyle, FontWeight, TextAlign, TextStyle};
}
