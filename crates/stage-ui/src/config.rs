use stage_graphics::Size;

/// Settings threaded through a composition pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiConfig {
    /// Surface size; a drawer without explicit dimensions covers it.
    pub viewport: Size,
    /// Logical size of an image still loading, when no size or scale mode was requested.
    pub image_placeholder: Size,
    /// Same as `image_placeholder`, for images that declare a scale mode.
    pub scaled_image_placeholder: Size,
}

impl UiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Size::new(width, height);
        self
    }

    pub fn image_placeholder(mut self, size: Size) -> Self {
        self.image_placeholder = size;
        self
    }

    pub fn scaled_image_placeholder(mut self, size: Size) -> Self {
        self.scaled_image_placeholder = size;
        self
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(800.0, 600.0),
            image_placeholder: Size::new(26.0, 37.0),
            scaled_image_placeholder: Size::new(100.0, 100.0),
        }
    }
}
