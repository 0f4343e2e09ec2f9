use glam::DVec3;
use nav_marker_models::{
    config::NavMarkerConfig,
    marker::{Marker, MarkerColor},
    messages::MessageToRenderer,
    render::RenderInstruction,
};
use tracing::{error, info, trace, warn};

use crate::{
    cache::SegmentCache,
    error::Result,
    intersect::{nearest_intersection, Intersection, Ray},
    io::MarkerPersistence,
    lod::{compute_render_params, render_instruction, DisplayFlags},
    store::MarkerStore,
};

/// Whatever draws the markers. The session never draws by itself.
pub trait RenderSink {
    fn send(&mut self, message: MessageToRenderer);
}

impl RenderSink for std::sync::mpsc::Sender<MessageToRenderer> {
    fn send(&mut self, message: MessageToRenderer) {
        if let Err(e) = std::sync::mpsc::Sender::send(self, message) {
            warn!(?e, "renderer is gone, dropping message");
        }
    }
}

/// State of the markers for one game session.
/// The host owns it and calls it from its tick, its save hooks and its commands. Nothing in here is shared.
pub struct NavMarkerSession<P: MarkerPersistence> {
    persistence: P,
    store: MarkerStore,
    enabled: bool,
    flags: DisplayFlags,
    cache: SegmentCache,
}

impl<P: MarkerPersistence> NavMarkerSession<P> {
    /// An empty disabled session. Call [Self::load] to restore what was saved.
    pub fn new(persistence: P) -> Self {
        Self {
            persistence,
            store: MarkerStore::new(),
            enabled: false,
            flags: DisplayFlags::default(),
            cache: SegmentCache::new(),
        }
    }

    /// Restores the saved markers and flags.
    /// Missing data keeps the session empty. Unreadable data resets it to an empty disabled session.
    pub fn load(&mut self) {
        self.cache.clear();
        match self.persistence.load() {
            Ok(Some(data)) => {
                self.enabled = data.enabled;
                self.flags = DisplayFlags {
                    show_only_close: data.show_only_close_markers,
                    show_partial: data.show_partial_markers,
                };
                self.store = MarkerStore::from_markers(data.markers);
                info!(markers = self.store.len(), enabled = self.enabled, "loaded nav markers");
            }
            Ok(None) => {
                info!("no existing nav marker data, a new file will be created on first save");
                self.reset();
            }
            Err(e) => {
                error!(?e, "failed to load marker data");
                self.reset();
            }
        }
    }

    fn reset(&mut self) {
        self.store = MarkerStore::new();
        self.enabled = false;
        self.flags = DisplayFlags::default();
    }

    /// Writes markers and flags, whether or not a save was queued.
    /// A failed write queues the save again, so the next tick retries it.
    pub fn save(&mut self) -> Result<()> {
        self.store.take_save_queued();
        let data = self
            .store
            .to_data(self.enabled, self.flags.show_only_close, self.flags.show_partial);
        let result = self.persistence.save(&data);
        if result.is_err() {
            self.store.mark_dirty();
        }
        result
    }

    pub fn add_marker(
        &mut self,
        name: &str,
        position: DVec3,
        radius: f32,
        color: MarkerColor,
    ) -> Result<()> {
        self.store.add(name, position, radius, color)?;
        info!(name, radius, "added a new marker");
        Ok(())
    }

    pub fn remove_marker(&mut self, name: &str) -> Result<()> {
        self.store.remove(name)?;
        self.cache.invalidate(name);
        info!(name, "removed nav marker");
        Ok(())
    }

    pub fn list_markers(&self) -> impl Iterator<Item = &Marker> {
        self.store.list()
    }

    pub fn store(&self) -> &MarkerStore {
        &self.store
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn display_flags(&self) -> DisplayFlags {
        self.flags
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.store.mark_dirty();
    }

    pub fn set_show_only_close(&mut self, show_only_close: bool) {
        self.flags.show_only_close = show_only_close;
        self.store.mark_dirty();
    }

    pub fn set_show_partial(&mut self, show_partial: bool) {
        self.flags.show_partial = show_partial;
        self.store.mark_dirty();
    }

    pub fn is_save_queued(&self) -> bool {
        self.store.is_save_queued()
    }

    /// (hits, misses) of the wireframe cache.
    pub fn cache_stats(&self) -> (u64, u64) {
        self.cache.stats()
    }

    /// What to draw for every marker, in store order. Hidden markers are left out.
    pub fn compute_render_instructions(
        &mut self,
        viewer: DVec3,
        config: &NavMarkerConfig,
    ) -> Vec<RenderInstruction> {
        let mut instructions = Vec::with_capacity(self.store.len());
        for marker in self.store.list() {
            let params = compute_render_params(viewer, marker, config, self.flags);
            trace!(marker = %marker.name, ?params, "render params");
            match render_instruction(viewer, marker, &params, config, &mut self.cache) {
                Ok(Some(instruction)) => instructions.push(instruction),
                Ok(None) => {}
                Err(e) => {
                    warn!(?e, marker = %marker.name, "skipping marker");
                }
            }
        }
        instructions
    }

    pub fn query_nearest_intersection(&self, ray: &Ray) -> Option<Intersection> {
        let hit = nearest_intersection(ray, self.store.list());
        if let Some(hit) = &hit {
            info!(
                "Intersected {} marker at distance of {}m",
                hit.marker_name, hit.distance
            );
        }
        hit
    }

    /// Called once per simulation tick.
    /// 1. a queued save is written, once, however many mutations queued it
    /// 2. if markers are enabled, the instructions of this tick are sent, followed by a swap
    pub fn tick(&mut self, viewer: DVec3, config: &NavMarkerConfig, sink: &mut impl RenderSink) {
        if self.store.is_save_queued() {
            if let Err(e) = self.save() {
                error!(?e, "failed to save marker data");
            }
        }
        if !self.enabled {
            return;
        }
        let instructions = self.compute_render_instructions(viewer, config);
        sink.send(MessageToRenderer::BulkInstructions(instructions));
        sink.send(MessageToRenderer::RenderSwapChain);
    }
}
