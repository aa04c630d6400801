//! Text styling.

use crate::Color;

/// Font size used when neither a variant nor an explicit style provides one.
pub const DEFAULT_FONT_SIZE: f32 = 26.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
    Lighter,
    Bolder,
}

impl FontWeight {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(FontWeight::Normal),
            "bold" => Some(FontWeight::Bold),
            "lighter" => Some(FontWeight::Lighter),
            "bolder" => Some(FontWeight::Bolder),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(FontStyle::Normal),
            "italic" => Some(FontStyle::Italic),
            "oblique" => Some(FontStyle::Oblique),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(TextAlign::Left),
            "center" => Some(TextAlign::Center),
            "right" => Some(TextAlign::Right),
            _ => None,
        }
    }
}

/// Sparse text style. Unset fields fall through to the renderer defaults, which
/// keeps shallow merging trivial: the overlay wins wherever it has a value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStyle {
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
    pub fill: Option<Color>,
    pub align: Option<TextAlign>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub line_height: Option<f32>,
    pub letter_spacing: Option<f32>,
    pub word_wrap: Option<bool>,
    pub word_wrap_width: Option<f32>,
    pub stroke: Option<Color>,
    pub stroke_thickness: Option<f32>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn resolved_font_size(&self) -> f32 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Returns a new style with every field set in `overlay` taking precedence.
    pub fn merged(&self, overlay: &TextStyle) -> TextStyle {
        TextStyle {
            font_size: overlay.font_size.or(self.font_size),
            font_family: overlay
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            fill: overlay.fill.or(self.fill),
            align: overlay.align.or(self.align),
            font_weight: overlay.font_weight.or(self.font_weight),
            font_style: overlay.font_style.or(self.font_style),
            line_height: overlay.line_height.or(self.line_height),
            letter_spacing: overlay.letter_spacing.or(self.letter_spacing),
            word_wrap: overlay.word_wrap.or(self.word_wrap),
            word_wrap_width: overlay.word_wrap_width.or(self.word_wrap_width),
            stroke: overlay.stroke.or(self.stroke),
            stroke_thickness: overlay.stroke_thickness.or(self.stroke_thickness),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_overlay_and_keeps_base_elsewhere() {
        let base = TextStyle::new()
            .font_size(24.0)
            .fill(Color::WHITE)
            .font_weight(FontWeight::Bold);
        let overlay = TextStyle::new().fill(Color(0xFF0000));

        let merged = base.merged(&overlay);

        assert_eq!(merged.fill, Some(Color(0xFF0000)));
        assert_eq!(merged.font_size, Some(24.0));
        assert_eq!(merged.font_weight, Some(FontWeight::Bold));
        assert_eq!(base.fill, Some(Color::WHITE));
    }
}
