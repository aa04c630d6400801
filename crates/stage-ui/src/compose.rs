use stage_core::{NodeId, Stage};

use crate::descriptor::Descriptor;
use crate::reconciler::{PendingTexture, Reconciler};
use crate::{ComposeError, UiConfig};

/// Result of a successful composition pass.
#[derive(Debug)]
pub struct Composition {
    /// Node attached under the stage root.
    pub root: NodeId,
    /// Image loads the host should start.
    pub pending_textures: Vec<PendingTexture>,
}

/// Calls `root` once, renders the descriptor and attaches it under the stage root.
///
/// On failure every node created by the pass is discarded before the error is returned.
pub fn compose(
    root: impl FnOnce() -> Descriptor,
    stage: &mut Stage,
    config: &UiConfig,
) -> Result<Composition, ComposeError> {
    let checkpoint = stage.checkpoint();
    let descriptor = root();
    let mut reconciler = Reconciler::new(stage, config);
    let rendered = reconciler.render(&descriptor);
    let pending_textures = reconciler.into_pending_textures();

    let attached = rendered.and_then(|node| {
        stage.add_child(stage.root(), node)?;
        Ok(node)
    });
    match attached {
        Ok(root) => {
            log::debug!(
                "composed node {root} with {} pending texture(s)",
                pending_textures.len()
            );
            Ok(Composition {
                root,
                pending_textures,
            })
        }
        Err(err) => {
            stage.rollback(checkpoint);
            Err(err)
        }
    }
}
