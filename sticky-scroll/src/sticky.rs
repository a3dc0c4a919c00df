use alloc::sync::Arc;

use crate::key::StickyKey;
use crate::resolver::resolve_into;
use crate::{
    Axis, ElementFrame, GeometryRegistry, Insets, Point, Rect, ScrollGeometry, ScrollState, Size,
    StickyBehavior, StickyEdge, StickyOptions, StuckSet,
};

/// A headless sticky-element engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by reporting element frames after layout and scroll geometry on
///   every scroll event.
/// - Every input mutation recomputes the stuck set right away; read it back with
///   [`stuck`](Self::stuck) and apply each entry's offset and opacity to the drawn element.
///
/// Geometry that is transiently bogus (NaN, negative or zero extents, an unmeasured viewport)
/// never errors: the affected elements are simply not stuck for that pass.
///
/// For programmatic scrolling (scroll-to, tap-to-section), see the `sticky-scroll-adapter` crate.
#[derive(Clone, Debug)]
pub struct StickyScroll<K> {
    options: StickyOptions<K>,
    registry: GeometryRegistry<K>,
    state: ScrollState,
    stuck: StuckSet<K>,

    notify_depth: usize,
    notify_pending: bool,
}

impl<K: StickyKey> StickyScroll<K> {
    pub fn new(options: StickyOptions<K>) -> Self {
        sdebug!(
            axis = ?options.axis,
            behavior = ?options.behavior,
            "StickyScroll::new"
        );
        Self {
            registry: GeometryRegistry::new(),
            state: ScrollState::new(options.axis),
            stuck: StuckSet::new(),
            options,
            notify_depth: 0,
            notify_pending: false,
        }
    }

    pub fn options(&self) -> &StickyOptions<K> {
        &self.options
    }

    pub fn axis(&self) -> Axis {
        self.options.axis
    }

    pub fn behavior(&self) -> StickyBehavior {
        self.options.behavior
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&StickyScroll<K>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    /// Batches multiple updates into a single recompute + `on_change` notification.
    ///
    /// A layout pass typically reports many frames, and a scroll event may change offset and
    /// sizes together. Without batching, each of those recomputes the stuck set.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.notify_depth = self.notify_depth.saturating_add(1);

        f(self);

        debug_assert!(self.notify_depth > 0, "notify_depth underflow");
        self.notify_depth = self.notify_depth.saturating_sub(1);

        if self.notify_depth == 0 && core::mem::take(&mut self.notify_pending) {
            self.notify_now();
        }
    }

    fn notify(&mut self) {
        if self.notify_depth > 0 {
            self.notify_pending = true;
            return;
        }
        self.notify_now();
    }

    fn notify_now(&mut self) {
        self.recompute();
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    /// Recomputes the stuck set from the current frames and scroll geometry.
    ///
    /// Mutators already call this; it is exposed for hosts that want to force a pass.
    pub fn recompute(&mut self) -> &StuckSet<K> {
        let geometry = self.state.current_geometry();
        resolve_into(
            self.registry.snapshot(),
            &geometry,
            self.options.behavior,
            self.options.edges_ignoring_safe_area,
            &mut self.stuck,
        );
        if !geometry.is_measured() {
            strace!("recompute: container not measured");
        }
        strace!(
            frames = self.registry.len(),
            stuck = self.stuck.len(),
            "recompute"
        );
        &self.stuck
    }

    /// The stuck set as of the last recompute.
    pub fn stuck(&self) -> &StuckSet<K> {
        &self.stuck
    }

    /// Displacement to apply to `key`; zero when it is not stuck.
    pub fn render_offset(&self, key: &K) -> f64 {
        self.stuck.render_offset(key)
    }

    /// Opacity to apply to `key`; fully opaque when it is not stuck.
    pub fn opacity(&self, key: &K) -> f64 {
        self.stuck.opacity(key)
    }

    pub fn registry(&self) -> &GeometryRegistry<K> {
        &self.registry
    }

    pub fn frame(&self, key: &K) -> Option<&ElementFrame<K>> {
        self.registry.get(key)
    }

    /// Reports the natural frame of a sticky-eligible element, replacing any previous report.
    pub fn report(&mut self, key: K, bounds: Rect, edge: StickyEdge) {
        if self.registry.report(key, bounds, edge) {
            strace!(
                x = bounds.x,
                y = bounds.y,
                width = bounds.width,
                height = bounds.height,
                edge = ?edge,
                "report"
            );
            self.notify();
        }
    }

    /// Reports a whole layout pass with a single recompute.
    pub fn report_many(&mut self, frames: impl IntoIterator<Item = (K, Rect, StickyEdge)>) {
        self.batch_update(|s| {
            for (key, bounds, edge) in frames {
                s.report(key, bounds, edge);
            }
        });
    }

    /// Forgets an element that left the content.
    pub fn retract(&mut self, key: &K) -> Option<ElementFrame<K>> {
        let removed = self.registry.retract(key)?;
        strace!(remaining = self.registry.len(), "retract");
        self.notify();
        Some(removed)
    }

    /// Keeps only the frames for which `f` returns `true`.
    pub fn retain_frames(&mut self, f: impl FnMut(&ElementFrame<K>) -> bool) {
        let before = self.registry.len();
        self.registry.retain(f);
        if self.registry.len() != before {
            self.notify();
        }
    }

    pub fn clear_frames(&mut self) {
        if self.registry.is_empty() {
            return;
        }
        self.registry.clear();
        self.notify();
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.state
    }

    pub fn geometry(&self) -> ScrollGeometry {
        self.state.current_geometry()
    }

    pub fn is_measured(&self) -> bool {
        self.state.is_measured()
    }

    pub fn update_offset(&mut self, offset: Point) {
        if self.state.update_offset(offset) {
            self.notify();
        }
    }

    pub fn update_content_size(&mut self, size: Size) {
        if self.state.update_content_size(size) {
            self.notify();
        }
    }

    pub fn update_container_size(&mut self, size: Size) {
        if self.state.update_container_size(size) {
            self.notify();
        }
    }

    pub fn update_insets(&mut self, insets: Insets) {
        if self.state.update_insets(insets) {
            self.notify();
        }
    }

    /// Re-applies a geometry snapshot in a single update. The configured axis is kept.
    pub fn restore_geometry(&mut self, geometry: ScrollGeometry) {
        if self.state.restore(geometry) {
            self.notify();
        }
    }

    /// Clamps an offset along the scroll axis to the reachable range.
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        self.state.clamp_offset(offset)
    }
}
