use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::FutureExt;
use stage_assets::{AssetError, TextureFuture, TextureLoader};
use stage_core::{Stage, TextMeasurer};
use stage_graphics::{Size, TextStyle, Texture};

/// Font-independent measurer: every character is `char_width` wide, every line
/// `line_height` tall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedTextMeasurer {
    pub char_width: f32,
    pub line_height: f32,
}

impl FixedTextMeasurer {
    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl Default for FixedTextMeasurer {
    fn default() -> Self {
        Self::new(10.0, 20.0)
    }
}

impl TextMeasurer for FixedTextMeasurer {
    fn measure(&self, text: &str, _style: &TextStyle) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let longest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        let lines = text.lines().count().max(1);
        Size::new(
            longest as f32 * self.char_width,
            lines as f32 * self.line_height,
        )
    }
}

/// Stage measuring text with [`FixedTextMeasurer::default`].
pub fn test_stage() -> Stage {
    Stage::with_measurer(FixedTextMeasurer::default())
}

type Responder = oneshot::Sender<Result<Texture, AssetError>>;

#[derive(Default)]
struct ManualState {
    requested: Vec<String>,
    pending: Vec<(String, Responder)>,
}

/// Loader whose requests stay pending until the test resolves them.
/// Clones share the same queue.
#[derive(Clone, Default)]
pub struct ManualTextureLoader {
    state: Rc<RefCell<ManualState>>,
}

impl ManualTextureLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every source ever requested, in order.
    pub fn requested(&self) -> Vec<String> {
        self.state.borrow().requested.clone()
    }

    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Resolves the oldest pending request for `src`. Returns false if there was none.
    pub fn complete(&self, src: &str, width: f32, height: f32) -> bool {
        self.respond(src, Ok(Texture::new(src, width, height)))
    }

    pub fn fail(&self, src: &str, error: AssetError) -> bool {
        self.respond(src, Err(error))
    }

    /// Drops every pending request; their futures resolve as cancelled.
    pub fn drop_pending(&self) {
        self.state.borrow_mut().pending.clear();
    }

    fn respond(&self, src: &str, result: Result<Texture, AssetError>) -> bool {
        let responder = {
            let mut state = self.state.borrow_mut();
            let index = state.pending.iter().position(|(pending, _)| pending == src);
            index.map(|index| state.pending.remove(index).1)
        };
        match responder {
            Some(responder) => responder.send(result).is_ok(),
            None => false,
        }
    }
}

impl TextureLoader for ManualTextureLoader {
    fn load(&self, src: &str) -> TextureFuture {
        let (sender, receiver) = oneshot::channel();
        {
            let mut state = self.state.borrow_mut();
            state.requested.push(src.to_owned());
            state.pending.push((src.to_owned(), sender));
        }
        let src = src.to_owned();
        async move {
            match receiver.await {
                Ok(result) => result,
                Err(oneshot::Canceled) => Err(AssetError::Cancelled { src }),
            }
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn fixed_measurer_uses_longest_line() {
        let size = FixedTextMeasurer::default().measure("ab\nabcd", &TextStyle::default());
        assert_eq!(size, Size::new(40.0, 40.0));
    }

    #[test]
    fn manual_loader_resolves_on_demand() {
        let loader = ManualTextureLoader::new();
        let pending = loader.load("a.png");
        assert_eq!(loader.requested(), vec!["a.png".to_owned()]);
        assert!(loader.complete("a.png", 8.0, 4.0));
        let texture = block_on(pending).unwrap();
        assert_eq!(texture.size(), Size::new(8.0, 4.0));
        assert!(!loader.complete("a.png", 8.0, 4.0));
    }

    #[test]
    fn dropped_requests_resolve_as_cancelled() {
        let loader = ManualTextureLoader::new();
        let pending = loader.load("b.png");
        loader.drop_pending();
        assert_eq!(
            block_on(pending),
            Err(AssetError::Cancelled { src: "b.png".into() })
        );
    }
}
