use stage_core::{NodeId, TextNode};
use stage_graphics::{Color, FontStyle, FontWeight, TextAlign, TextStyle};

use crate::descriptor::Props;
use crate::reconciler::Reconciler;
use crate::ComposeError;

/// Base style of a named text variant. Unknown or missing variants only set a white fill.
pub fn variant_style(variant: Option<&str>) -> TextStyle {
    match variant {
        Some("body") => TextStyle::new().font_size(16.0).fill(Color::WHITE),
        Some("heading") => TextStyle::new()
            .font_size(24.0)
            .fill(Color::WHITE)
            .font_weight(FontWeight::Bold),
        Some("title") => TextStyle::new()
            .font_size(32.0)
            .fill(Color::WHITE)
            .font_weight(FontWeight::Bold),
        Some("caption") => TextStyle::new().font_size(12.0).fill(Color::from_hex(0xCCCCCC)),
        Some(other) => {
            log::warn!("unknown text variant `{other}`");
            TextStyle::new().fill(Color::WHITE)
        }
        None => TextStyle::new().fill(Color::WHITE),
    }
}

/// Reads an explicit `style` map. Keys that are absent stay unset.
pub fn text_style_from_props(style: &Props) -> TextStyle {
    TextStyle {
        font_size: style.number("fontSize"),
        font_family: style.text("fontFamily").map(str::to_owned),
        fill: style.color("fill"),
        align: style.text("align").and_then(|name| {
            let align = TextAlign::from_name(name);
            if align.is_none() {
                log::warn!("unknown text align `{name}`");
            }
            align
        }),
        font_weight: style.text("fontWeight").and_then(|name| {
            let weight = FontWeight::from_name(name);
            if weight.is_none() {
                log::warn!("unknown font weight `{name}`");
            }
            weight
        }),
        font_style: style.text("fontStyle").and_then(|name| {
            let font_style = FontStyle::from_name(name);
            if font_style.is_none() {
                log::warn!("unknown font style `{name}`");
            }
            font_style
        }),
        line_height: style.number("lineHeight"),
        letter_spacing: style.number("letterSpacing"),
        word_wrap: style.flag("wordWrap"),
        word_wrap_width: style.number("wordWrapWidth"),
        stroke: style.color("stroke"),
        stroke_thickness: style.number("strokeThickness"),
    }
}

pub(crate) fn create_text(
    reconciler: &mut Reconciler<'_>,
    props: &Props,
) -> Result<NodeId, ComposeError> {
    let base = variant_style(props.text("variant"));
    let style = match props.map("style") {
        Some(overlay) => base.merged(&text_style_from_props(overlay)),
        None => base,
    };
    let text = props.text("text").unwrap_or_default();

    let stage = reconciler.stage();
    let id = stage.create_text(text, style);
    let measured = stage.read_node::<TextNode, _>(id, TextNode::measured_size)?;
    stage.get_mut(id)?.base_mut().set_logical_size(measured);
    Ok(id)
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
