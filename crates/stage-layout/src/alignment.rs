use crate::Axis;

/// Cross-axis placement of children in a stacked list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CrossAlignment {
    /// Leading edge at the padding (`left` in a column, `top` in a row).
    #[default]
    Start,
    /// All children share one center line.
    Center,
    /// Trailing edge at `padding + max cross size`.
    End,
}

impl CrossAlignment {
    /// Parses an `align` value. Columns use `left|center|right`, rows use
    /// `top|center|bottom`; `start`/`end` are accepted for both.
    pub fn parse(axis: Axis, name: &str) -> Option<Self> {
        match name {
            "start" => Some(CrossAlignment::Start),
            "center" => Some(CrossAlignment::Center),
            "end" => Some(CrossAlignment::End),
            "left" if axis.is_vertical() => Some(CrossAlignment::Start),
            "right" if axis.is_vertical() => Some(CrossAlignment::End),
            "top" if axis.is_horizontal() => Some(CrossAlignment::Start),
            "bottom" if axis.is_horizontal() => Some(CrossAlignment::End),
            _ => None,
        }
    }
}
