//! The only stateful primitive: a pressable, hoverable button.

use std::rc::Rc;

use stage_core::{
    EventMode, Fill, GraphicsNode, Node, NodeBase, NodeError, NodeId, Point, PointerEventKind,
    Rect, Size, Stage, TextNode,
};
use stage_graphics::{Color, TextStyle};

use crate::descriptor::{Callback, Props};
use crate::reconciler::Reconciler;
use crate::ComposeError;

pub const BUTTON_FONT_SIZE: f32 = 16.0;
pub const BUTTON_CORNER_RADIUS: f32 = 8.0;
const DEFAULT_SIZE: Size = Size::new(120.0, 40.0);
const PRESSED_SCALE: f32 = 0.95;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Hovered,
    Pressed,
    Disabled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    PointerOver,
    PointerOut,
    PointerDown,
    PointerUp,
    /// Full press/release cycle on the button.
    PointerTap,
}

impl ButtonEvent {
    fn from_pointer(kind: PointerEventKind) -> Self {
        match kind {
            PointerEventKind::Over => ButtonEvent::PointerOver,
            PointerEventKind::Out => ButtonEvent::PointerOut,
            PointerEventKind::Down => ButtonEvent::PointerDown,
            PointerEventKind::Up => ButtonEvent::PointerUp,
            PointerEventKind::Tap => ButtonEvent::PointerTap,
        }
    }
}

/// Pure transition table. `Disabled` is absorbing.
pub fn transition(state: ButtonState, event: ButtonEvent) -> ButtonState {
    match (state, event) {
        (ButtonState::Disabled, _) => ButtonState::Disabled,
        (ButtonState::Pressed, ButtonEvent::PointerOver) => ButtonState::Pressed,
        (_, ButtonEvent::PointerOver) => ButtonState::Hovered,
        (_, ButtonEvent::PointerOut) => ButtonState::Normal,
        (_, ButtonEvent::PointerDown) => ButtonState::Pressed,
        (_, ButtonEvent::PointerUp) => ButtonState::Hovered,
        (state, ButtonEvent::PointerTap) => state,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonTransition {
    pub previous: ButtonState,
    pub current: ButtonState,
    /// Whether the click callback should run.
    pub click: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonStateMachine {
    state: ButtonState,
}

impl ButtonStateMachine {
    pub fn new(disabled: bool) -> Self {
        let state = if disabled {
            ButtonState::Disabled
        } else {
            ButtonState::Normal
        };
        Self { state }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn handle(&mut self, event: ButtonEvent) -> ButtonTransition {
        let previous = self.state;
        self.state = transition(previous, event);
        ButtonTransition {
            previous,
            current: self.state,
            click: event == ButtonEvent::PointerTap && previous != ButtonState::Disabled,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonColors {
    pub bg: Color,
    pub text: Color,
}

impl ButtonColors {
    const fn new(bg: u32, text: u32) -> Self {
        Self {
            bg: Color::from_hex(bg),
            text: Color::from_hex(text),
        }
    }

    /// Per-key overlay from a `{ bg, text }` map.
    fn merged(self, overlay: &Props) -> Self {
        Self {
            bg: overlay.color("bg").unwrap_or(self.bg),
            text: overlay.color("text").unwrap_or(self.text),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Filled,
    Tonal,
}

impl ButtonVariant {
    /// Anything other than `filled` selects the tonal palette.
    pub fn from_name(name: &str) -> Self {
        match name {
            "filled" => ButtonVariant::Filled,
            "tonal" => ButtonVariant::Tonal,
            other => {
                log::warn!("unknown button variant `{other}`; using tonal");
                ButtonVariant::Tonal
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonPalette {
    pub normal: ButtonColors,
    pub hovered: ButtonColors,
    pub pressed: ButtonColors,
    pub disabled: ButtonColors,
}

impl ButtonPalette {
    pub const FILLED: ButtonPalette = ButtonPalette {
        normal: ButtonColors::new(0x007AFF, 0xFFFFFF),
        hovered: ButtonColors::new(0x0062CC, 0xFFFFFF),
        pressed: ButtonColors::new(0x004999, 0xFFFFFF),
        disabled: ButtonColors::new(0xCCCCCC, 0x999999),
    };

    pub const TONAL: ButtonPalette = ButtonPalette {
        normal: ButtonColors::new(0xE5F1FF, 0x007AFF),
        hovered: ButtonColors::new(0xCCE4FF, 0x0062CC),
        pressed: ButtonColors::new(0xB3D7FF, 0x004999),
        disabled: ButtonColors::new(0xF5F5F5, 0xCCCCCC),
    };

    pub fn for_variant(variant: ButtonVariant) -> Self {
        match variant {
            ButtonVariant::Filled => Self::FILLED,
            ButtonVariant::Tonal => Self::TONAL,
        }
    }

    /// Applies a `colors` prop: each state may override `bg` and/or `text`.
    pub fn with_overrides(self, colors: &Props) -> Self {
        let state = |name: &str, base: ButtonColors| match colors.map(name) {
            Some(overlay) => base.merged(overlay),
            None => base,
        };
        Self {
            normal: state("normal", self.normal),
            hovered: state("hovered", self.hovered),
            pressed: state("pressed", self.pressed),
            disabled: state("disabled", self.disabled),
        }
    }

    pub fn colors(&self, state: ButtonState) -> ButtonColors {
        match state {
            ButtonState::Normal => self.normal,
            ButtonState::Hovered => self.hovered,
            ButtonState::Pressed => self.pressed,
            ButtonState::Disabled => self.disabled,
        }
    }
}

/// Button root. Owns its state machine; draws through a background and a label child.
pub struct ButtonNode {
    pub base: NodeBase,
    machine: ButtonStateMachine,
    palette: ButtonPalette,
    size: Size,
    background: NodeId,
    label: NodeId,
    on_click: Option<Callback>,
}

impl ButtonNode {
    pub fn state(&self) -> ButtonState {
        self.machine.state()
    }

    pub fn palette(&self) -> &ButtonPalette {
        &self.palette
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn background_node(&self) -> NodeId {
        self.background
    }

    pub fn label_node(&self) -> NodeId {
        self.label
    }
}

impl Node for ButtonNode {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }
}

/// Redraws background, label color and press scale for the current state.
fn apply_visuals(stage: &mut Stage, id: NodeId) -> Result<(), NodeError> {
    let (state, colors, size, background, label) =
        stage.read_node::<ButtonNode, _>(id, |button| {
            let state = button.state();
            (
                state,
                button.palette.colors(state),
                button.size,
                button.background,
                button.label,
            )
        })?;
    stage.with_node::<GraphicsNode, _>(background, |graphics| {
        graphics.clear();
        graphics.round_rect(
            Rect::from_size(size),
            BUTTON_CORNER_RADIUS,
            Fill::solid(colors.bg),
        );
    })?;
    stage.with_node::<TextNode, _>(label, |text| text.set_fill(colors.text))?;
    let scale = if state == ButtonState::Pressed {
        PRESSED_SCALE
    } else {
        1.0
    };
    stage
        .get_mut(id)?
        .base_mut()
        .transform
        .set_uniform_scale(scale);
    Ok(())
}

fn handle_pointer(stage: &mut Stage, id: NodeId, kind: PointerEventKind) -> Result<(), NodeError> {
    let event = ButtonEvent::from_pointer(kind);
    let (step, on_click) = stage.with_node::<ButtonNode, _>(id, |button| {
        (button.machine.handle(event), button.on_click.clone())
    })?;
    if step.previous != step.current {
        log::debug!("button {id}: {:?} -> {:?}", step.previous, step.current);
        apply_visuals(stage, id)?;
    }
    if step.click {
        if let Some(on_click) = on_click {
            on_click();
        }
    }
    Ok(())
}

pub(crate) fn create_button(
    reconciler: &mut Reconciler<'_>,
    props: &Props,
) -> Result<NodeId, ComposeError> {
    let size = Size::new(
        props.number("width").unwrap_or(DEFAULT_SIZE.width),
        props.number("height").unwrap_or(DEFAULT_SIZE.height),
    );
    let variant = props
        .text("variant")
        .map(ButtonVariant::from_name)
        .unwrap_or(ButtonVariant::Filled);
    let palette = match props.map("colors") {
        Some(colors) => ButtonPalette::for_variant(variant).with_overrides(colors),
        None => ButtonPalette::for_variant(variant),
    };
    let disabled = props.flag("disabled").unwrap_or(false);
    let text = props.text("text").unwrap_or("Button");

    let stage = reconciler.stage();
    let background = stage.create(GraphicsNode::new());
    let label = stage.create_text(text, TextStyle::new().font_size(BUTTON_FONT_SIZE));
    stage.with_node::<TextNode, _>(label, |text| {
        text.anchor = Point::splat(0.5);
        text.base.transform.set_position(size.width / 2.0, size.height / 2.0);
    })?;

    let mut base = NodeBase::new();
    base.transform.pivot = Point::new(size.width / 2.0, size.height / 2.0);
    base.interaction.hit_area = Some(Rect::from_size(size));
    base.set_logical_size(size);
    if !disabled {
        base.interaction.event_mode = EventMode::Static;
        base.interaction.cursor = Some("pointer".to_owned());
        for kind in [
            PointerEventKind::Over,
            PointerEventKind::Out,
            PointerEventKind::Down,
            PointerEventKind::Up,
            PointerEventKind::Tap,
        ] {
            base.interaction.on(
                kind,
                Rc::new(move |stage: &mut Stage, id| {
                    if let Err(err) = handle_pointer(stage, id, kind) {
                        log::warn!("button {id} failed to handle {kind:?}: {err}");
                    }
                }),
            );
        }
    }

    let id = stage.create(ButtonNode {
        base,
        machine: ButtonStateMachine::new(disabled),
        palette,
        size,
        background,
        label,
        on_click: props.callback("onClick"),
    });
    stage.add_child(id, background)?;
    stage.add_child(id, label)?;
    apply_visuals(stage, id)?;
    Ok(id)
}

#[cfg(test)]
#[path = "tests/button_tests.rs"]
mod tests;
