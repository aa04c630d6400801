use stage_assets::AssetError;
use stage_core::NodeError;

/// Failure of a composition pass. The pass is aborted and nothing is attached.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("unknown element kind `{tag}`")]
    UnknownElementKind { tag: String },
    #[error(transparent)]
    Node(#[from] NodeError),
}

/// Image problems that are logged and contained to the offending node.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Image requires either `src` or `texture`")]
    MissingImageSource,
    #[error("failed to load image `{src}`")]
    AssetLoadFailure {
        src: String,
        #[source]
        error: AssetError,
    },
}
