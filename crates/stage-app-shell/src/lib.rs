use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use stage_assets::{AssetError, AssetManager};
use stage_core::{NodeError, NodeId, Point, PointerEventKind, Stage};
use stage_ui::{
    attach_loaded_texture, compose, log_render_scene, log_scene_tree, ComposeError, Descriptor,
    HeadlessRenderer, ImageError, PendingTexture, RecordedRenderScene, Texture, UiConfig,
};

struct LoadCompletion {
    request: PendingTexture,
    result: Result<Texture, AssetError>,
}

/// Single-threaded host loop: owns the stage, recomposes on demand, drives
/// texture loads and turns raw pointer input into node events.
pub struct AppShell {
    stage: Stage,
    config: UiConfig,
    assets: AssetManager,
    pool: LocalPool,
    completions: Rc<RefCell<Vec<LoadCompletion>>>,
    loads_in_flight: usize,
    composed: Option<NodeId>,
    cursor: Point,
    hovered: Option<NodeId>,
    pressed: Option<NodeId>,
    redraw_requested: bool,
}

impl AppShell {
    pub fn new(assets: AssetManager) -> Self {
        Self::with_stage(Stage::new(), UiConfig::default(), assets)
    }

    pub fn with_stage(stage: Stage, config: UiConfig, assets: AssetManager) -> Self {
        Self {
            stage,
            config,
            assets,
            pool: LocalPool::new(),
            completions: Rc::new(RefCell::new(Vec::new())),
            loads_in_flight: 0,
            composed: None,
            cursor: Point::ZERO,
            hovered: None,
            pressed: None,
            redraw_requested: false,
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn assets(&self) -> &AssetManager {
        &self.assets
    }

    /// Takes effect on the next [`AppShell::compose`].
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.config = self.config.viewport(width, height);
    }

    pub fn composed_root(&self) -> Option<NodeId> {
        self.composed
    }

    /// Replaces the current tree with a fresh composition of `root`.
    ///
    /// Loads started for the previous tree keep running; their results are
    /// dropped once they find their node gone. The freed ids are only reused
    /// when no load is outstanding.
    pub fn compose(&mut self, root: impl FnOnce() -> Descriptor) -> Result<NodeId, ComposeError> {
        if let Some(previous) = self.composed.take() {
            if let Err(err) = self.stage.remove(previous) {
                log::warn!("failed to remove previous tree {previous}: {err}");
            }
        }
        if !self.has_pending_loads() {
            let freed = self.stage.compact();
            log::debug!("compacted {freed} stale node slot(s)");
        }
        self.hovered = None;
        self.pressed = None;
        self.redraw_requested = true;

        match compose(root, &mut self.stage, &self.config) {
            Ok(composition) => {
                self.composed = Some(composition.root);
                for request in composition.pending_textures {
                    self.spawn_load(request);
                }
                Ok(composition.root)
            }
            Err(err) => {
                log::error!("composition failed: {err}");
                Err(err)
            }
        }
    }

    fn spawn_load(&mut self, request: PendingTexture) {
        let src = request.src.clone();
        let load = self.assets.load(&request.src);
        let completions = Rc::clone(&self.completions);
        let task = async move {
            let result = load.await;
            completions
                .borrow_mut()
                .push(LoadCompletion { request, result });
        };
        match self.pool.spawner().spawn_local(task) {
            Ok(()) => self.loads_in_flight += 1,
            Err(err) => log::error!("failed to start load of `{src}`: {err}"),
        }
    }

    /// Polls outstanding loads and attaches every texture that arrived.
    pub fn update(&mut self) {
        self.pool.run_until_stalled();
        let completions = std::mem::take(&mut *self.completions.borrow_mut());
        for LoadCompletion { request, result } in completions {
            self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
            let texture = match result {
                Ok(texture) => texture,
                Err(error) => {
                    let failure = ImageError::AssetLoadFailure {
                        src: request.src,
                        error,
                    };
                    log::error!("{failure}: {}", failure_reason(&failure));
                    continue;
                }
            };
            match attach_loaded_texture(&mut self.stage, request.node, texture, &request.sizing) {
                Ok(()) => {
                    log::debug!("attached `{}` to image {}", request.src, request.node);
                    self.redraw_requested = true;
                }
                Err(NodeError::Missing { id }) => {
                    log::debug!("image {id} is gone; dropping `{}`", request.src);
                }
                Err(err) => log::warn!("could not attach `{}`: {err}", request.src),
            }
        }
    }

    pub fn has_pending_loads(&self) -> bool {
        self.loads_in_flight > 0
    }

    /// Returns whether anything changed since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Cursor icon requested by the hovered node, if any.
    pub fn cursor_icon(&self) -> Option<&str> {
        let hovered = self.hovered?;
        let node = self.stage.get(hovered).ok()?;
        node.base().interaction.cursor.as_deref()
    }

    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = Point::new(x, y);
        let target = self.stage.hit_test(self.cursor);
        if target == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered {
            self.dispatch(previous, PointerEventKind::Out);
        }
        if let Some(next) = target {
            self.dispatch(next, PointerEventKind::Over);
        }
        self.hovered = target;
    }

    pub fn pointer_pressed(&mut self) {
        self.pressed = self.stage.hit_test(self.cursor);
        if let Some(target) = self.pressed {
            self.dispatch(target, PointerEventKind::Down);
        }
    }

    pub fn pointer_released(&mut self) {
        let pressed = self.pressed.take();
        let Some(target) = self.stage.hit_test(self.cursor) else {
            return;
        };
        self.dispatch(target, PointerEventKind::Up);
        if pressed == Some(target) {
            self.dispatch(target, PointerEventKind::Tap);
        }
    }

    fn dispatch(&mut self, target: NodeId, kind: PointerEventKind) {
        match self.stage.dispatch(target, kind) {
            Ok(0) => {}
            Ok(_) => self.redraw_requested = true,
            Err(err) => log::debug!("dropping {kind:?} for {target}: {err}"),
        }
    }

    pub fn scene(&self) -> Result<RecordedRenderScene, NodeError> {
        HeadlessRenderer::new(&self.stage).render()
    }

    pub fn log_debug_info(&self) {
        log::info!("──── scene tree ────");
        log_scene_tree(&self.stage);
        match self.scene() {
            Ok(scene) => {
                log::info!("──── render scene ────");
                log_render_scene(&scene);
            }
            Err(err) => log::error!("failed to render scene for debug: {err}"),
        }
    }
}

fn failure_reason(failure: &ImageError) -> String {
    use std::error::Error;

    failure
        .source()
        .map(ToString::to_string)
        .unwrap_or_default()
}
