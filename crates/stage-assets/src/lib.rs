//! Asset loading and management for stage-compose.
//!
//! Loads are futures driven by the host's event loop; nothing here blocks the
//! render pass.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};
use hashbrown::HashMap;
use stage_graphics::Texture;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("asset `{src}` not found")]
    NotFound { src: String },
    #[error("asset `{src}` could not be decoded: {reason}")]
    Decode { src: String, reason: String },
    #[error("load of `{src}` was dropped before completing")]
    Cancelled { src: String },
}

pub type TextureFuture = LocalBoxFuture<'static, Result<Texture, AssetError>>;

/// Resolves a source identifier into a texture.
pub trait TextureLoader {
    fn load(&self, src: &str) -> TextureFuture;
}

/// Caching front for a [`TextureLoader`]. Clones share the loader and cache.
#[derive(Clone)]
pub struct AssetManager {
    loader: Rc<dyn TextureLoader>,
    cache: Rc<RefCell<HashMap<String, Texture>>>,
}

impl AssetManager {
    pub fn new(loader: impl TextureLoader + 'static) -> Self {
        Self {
            loader: Rc::new(loader),
            cache: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Starts loading `src`. Cached textures resolve immediately.
    pub fn load(&self, src: &str) -> TextureFuture {
        if let Some(texture) = self.cached(src) {
            log::debug!("texture cache hit for `{src}`");
            return future::ready(Ok(texture)).boxed_local();
        }
        let pending = self.loader.load(src);
        let cache = Rc::clone(&self.cache);
        let key = src.to_owned();
        async move {
            let texture = pending.await?;
            cache.borrow_mut().insert(key, texture.clone());
            Ok(texture)
        }
        .boxed_local()
    }

    pub fn cached(&self, src: &str) -> Option<Texture> {
        self.cache.borrow().get(src).cloned()
    }

    pub fn cached_count(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl Default for AssetManager {
    fn default() -> Self {
        Self::new(FsTextureLoader::default())
    }
}

/// Loader backed by an in-memory table of texture sizes.
#[derive(Default)]
pub struct MemoryTextureLoader {
    textures: RefCell<HashMap<String, Texture>>,
}

impl MemoryTextureLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_texture(self, src: &str, width: f32, height: f32) -> Self {
        self.register(src, width, height);
        self
    }

    pub fn register(&self, src: &str, width: f32, height: f32) {
        self.textures
            .borrow_mut()
            .insert(src.to_owned(), Texture::new(src, width, height));
    }
}

impl TextureLoader for MemoryTextureLoader {
    fn load(&self, src: &str) -> TextureFuture {
        let result = self
            .textures
            .borrow()
            .get(src)
            .cloned()
            .ok_or_else(|| AssetError::NotFound { src: src.to_owned() });
        future::ready(result).boxed_local()
    }
}

/// Reads image headers from disk on the blocking thread pool.
#[derive(Clone, Debug)]
pub struct FsTextureLoader {
    root: PathBuf,
}

impl FsTextureLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for FsTextureLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl TextureLoader for FsTextureLoader {
    fn load(&self, src: &str) -> TextureFuture {
        let path = self.root.join(src);
        let src = src.to_owned();
        async move {
            let dimensions = blocking::unblock(move || image::image_dimensions(&path)).await;
            match dimensions {
                Ok((width, height)) => Ok(Texture::new(src, width as f32, height as f32)),
                Err(image::ImageError::IoError(err))
                    if err.kind() == std::io::ErrorKind::NotFound =>
                {
                    Err(AssetError::NotFound { src })
                }
                Err(err) => Err(AssetError::Decode {
                    src,
                    reason: err.to_string(),
                }),
            }
        }
        .boxed_local()
    }
}

#[cfg(test)]
#[path = "tests/asset_tests.rs"]
mod tests;
