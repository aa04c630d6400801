#![doc = r"Retained scene graph for stage-compose: node storage, transforms, bounds, hit testing and pointer dispatch."]

mod interaction;
mod node;
mod nodes;
mod stage;
mod text_metrics;
mod transform;

pub use interaction::{EventMode, Interaction, PointerEventKind, PointerHandler};
pub use node::{AsAny, Node, NodeBase};
pub use nodes::{ContainerNode, Fill, GraphicsCommand, GraphicsNode, SpriteNode, TextNode};
pub use stage::{Stage, StageCheckpoint};
pub use text_metrics::{ApproximateTextMeasurer, TextMeasurer};
pub use transform::Transform;

pub use stage_graphics::{Affine, Color, Point, Rect, Size, Texture, TextStyle};

pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("node {id} missing")]
    Missing { id: NodeId },
    #[error("node {id} type mismatch; expected {expected}")]
    TypeMismatch { id: NodeId, expected: &'static str },
    #[error("node {id} is already attached to {parent}")]
    AlreadyAttached { id: NodeId, parent: NodeId },
}
