use crate::CrossAlignment;

/// Configuration of a `Column` or `Row`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListSpec {
    pub spacing: f32,
    pub padding: f32,
    pub align: CrossAlignment,
}

impl ListSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn align(mut self, align: CrossAlignment) -> Self {
        self.align = align;
        self
    }
}

impl Default for ListSpec {
    fn default() -> Self {
        Self {
            spacing: 10.0,
            padding: 0.0,
            align: CrossAlignment::Start,
        }
    }
}

/// Configuration of a `Grid`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub columns: usize,
    pub spacing: f32,
}

impl GridSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: 2,
            spacing: 10.0,
        }
    }
}
