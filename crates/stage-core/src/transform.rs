use stage_graphics::{Affine, Point};

/// Local transform of a node relative to its parent.
///
/// `pivot` is the local point that lands on `position`; rotation and scale are
/// applied around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Point,
    pub rotation: f32,
    pub scale: Point,
    pub pivot: Point,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            rotation: 0.0,
            scale: Point::splat(1.0),
            pivot: Point::ZERO,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Affine {
        Affine::from_components(self.position, self.rotation, self.scale, self.pivot)
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Point::new(x, y);
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Point::splat(scale);
    }
}
