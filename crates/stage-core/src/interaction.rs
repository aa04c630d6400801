//! Pointer interaction state attached to every node.

use std::fmt;
use std::rc::Rc;

use stage_graphics::Rect;

use crate::{NodeId, Stage};

/// How a node participates in hit testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EventMode {
    /// Node and subtree are ignored.
    None,
    /// Node is never a target, children still are.
    #[default]
    Passive,
    /// Same as passive for this scene graph.
    Auto,
    /// Node is a hit target.
    Static,
    /// Node is a hit target.
    Dynamic,
}

impl EventMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(EventMode::None),
            "passive" => Some(EventMode::Passive),
            "auto" => Some(EventMode::Auto),
            "static" => Some(EventMode::Static),
            "dynamic" => Some(EventMode::Dynamic),
            _ => None,
        }
    }

    pub fn is_interactive(self) -> bool {
        matches!(self, EventMode::Static | EventMode::Dynamic)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Over,
    Out,
    Down,
    Up,
    /// A full down/up cycle on the same target.
    Tap,
}

/// Pointer callback. Receives the stage so it can update the node it is attached to.
pub type PointerHandler = Rc<dyn Fn(&mut Stage, NodeId)>;

#[derive(Clone, Default)]
pub struct Interaction {
    pub event_mode: EventMode,
    pub cursor: Option<String>,
    /// Local-space rectangle replacing the content test when set.
    pub hit_area: Option<Rect>,
    handlers: Vec<(PointerEventKind, PointerHandler)>,
}

impl Interaction {
    pub fn on(&mut self, kind: PointerEventKind, handler: PointerHandler) {
        self.handlers.push((kind, handler));
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn handlers_for(&self, kind: PointerEventKind) -> Vec<PointerHandler> {
        self.handlers
            .iter()
            .filter(|(registered, _)| *registered == kind)
            .map(|(_, handler)| Rc::clone(handler))
            .collect()
    }

    pub fn is_interactive(&self) -> bool {
        self.event_mode.is_interactive()
    }
}

impl fmt::Debug for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interaction")
            .field("event_mode", &self.event_mode)
            .field("cursor", &self.cursor)
            .field("hit_area", &self.hit_area)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
