use stage_graphics::{Size, TextStyle};

/// Measures the natural size of a text run. Backends plug in their font engine here.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Size;
}

/// Font-agnostic estimate: fixed advance per character, fixed line height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproximateTextMeasurer {
    pub advance_ratio: f32,
    pub line_height_ratio: f32,
}

impl Default for ApproximateTextMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasurer for ApproximateTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let font_size = style.resolved_font_size();
        let letter_spacing = style.letter_spacing.unwrap_or(0.0);
        let line_height = style
            .line_height
            .unwrap_or(font_size * self.line_height_ratio);
        let wrap_width = match (style.word_wrap, style.word_wrap_width) {
            (Some(true), Some(limit)) if limit > 0.0 => Some(limit),
            _ => None,
        };
        let mut lines = 0.0_f32;
        let mut widest = 0.0_f32;
        for line in text.lines() {
            let chars = line.chars().count() as f32;
            let spacing = if chars > 1.0 {
                letter_spacing * (chars - 1.0)
            } else {
                0.0
            };
            let width = chars * font_size * self.advance_ratio + spacing;
            match wrap_width {
                Some(limit) if width > limit => {
                    lines += (width / limit).ceil();
                    widest = widest.max(limit);
                }
                _ => {
                    lines += 1.0;
                    widest = widest.max(width);
                }
            }
        }
        Size::new(widest, lines.max(1.0) * line_height)
    }
}
