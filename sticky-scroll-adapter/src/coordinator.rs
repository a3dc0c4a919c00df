use alloc::sync::Arc;

use sticky_scroll::{
    ElementFrame, Insets, Point, Rect, ScrollGeometry, Size, StickyEdge, StickyKey, StickyOptions,
    StickyScroll, StuckSet,
};

use crate::key::KeySet;
use crate::{ScrollRequest, ScrollRequestCallback};

/// A framework-neutral coordinator that wraps a `sticky_scroll::StickyScroll` and mediates
/// between the host toolkit and the engine.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_offset` / `on_content_size` / `on_container_size` / `on_insets` when the toolkit
///   reports scroll geometry
/// - `report_frame` / `retract_frame` from each layout pass
///
/// Programmatic scrolling (`scroll_to`, `scroll_by`, `scroll_to_element`, `tap`) never touches
/// the offset directly. It produces a [`ScrollRequest`] for the host to carry out, either pushed
/// to the `on_scroll_request` sink or left pending for `take_scroll_request`.
#[derive(Clone)]
pub struct ScrollCoordinator<K> {
    s: StickyScroll<K>,
    pending: Option<ScrollRequest>,
    on_scroll_request: Option<ScrollRequestCallback>,
    untappable: KeySet<K>,
}

impl<K: core::fmt::Debug> core::fmt::Debug for ScrollCoordinator<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollCoordinator")
            .field("s", &self.s)
            .field("pending", &self.pending)
            .field("on_scroll_request", &self.on_scroll_request.as_ref().map(|_| ".."))
            .field("untappable", &self.untappable)
            .finish()
    }
}

impl<K: StickyKey> ScrollCoordinator<K> {
    pub fn new(options: StickyOptions<K>) -> Self {
        Self::from_sticky(StickyScroll::new(options))
    }

    pub fn from_sticky(s: StickyScroll<K>) -> Self {
        Self {
            s,
            pending: None,
            on_scroll_request: None,
            untappable: KeySet::default(),
        }
    }

    pub fn sticky(&self) -> &StickyScroll<K> {
        &self.s
    }

    pub fn sticky_mut(&mut self) -> &mut StickyScroll<K> {
        &mut self.s
    }

    pub fn into_sticky(self) -> StickyScroll<K> {
        self.s
    }

    /// Routes future scroll requests to `sink` instead of leaving them pending.
    pub fn set_on_scroll_request(
        &mut self,
        sink: Option<impl Fn(ScrollRequest) + Send + Sync + 'static>,
    ) {
        self.on_scroll_request = sink.map(|f| Arc::new(f) as _);
    }

    pub fn stuck(&self) -> &StuckSet<K> {
        self.s.stuck()
    }

    pub fn geometry(&self) -> ScrollGeometry {
        self.s.geometry()
    }

    pub fn on_offset(&mut self, offset: Point) {
        self.s.update_offset(offset);
    }

    pub fn on_content_size(&mut self, size: Size) {
        self.s.update_content_size(size);
    }

    pub fn on_container_size(&mut self, size: Size) {
        self.s.update_container_size(size);
    }

    pub fn on_insets(&mut self, insets: Insets) {
        self.s.update_insets(insets);
    }

    /// Applies a full geometry sample with a single recompute.
    pub fn on_geometry(&mut self, geometry: ScrollGeometry) {
        self.s.restore_geometry(geometry);
    }

    pub fn report_frame(&mut self, key: K, bounds: Rect, edge: StickyEdge) {
        self.s.report(key, bounds, edge);
    }

    pub fn retract_frame(&mut self, key: &K) -> Option<ElementFrame<K>> {
        self.s.retract(key)
    }

    /// Requests a scroll to an absolute content offset.
    ///
    /// Only the scroll-axis component of `offset` is used; it is clamped to the reachable range.
    /// Returns `None` (and requests nothing) while the viewport is not measured yet.
    pub fn scroll_to(&mut self, offset: Point) -> Option<ScrollRequest> {
        let axis = self.s.axis();
        self.scroll_to_main(axis.main(offset))
    }

    /// Same as [`scroll_to`](Self::scroll_to), with the offset given along the scroll axis.
    ///
    /// A NaN target requests nothing. Infinite targets clamp to the matching end.
    pub fn scroll_to_main(&mut self, main: f64) -> Option<ScrollRequest> {
        if !self.s.is_measured() {
            adebug!(main, "scroll_to: viewport not measured, dropping request");
            return None;
        }
        if main.is_nan() {
            adebug!("scroll_to: NaN target, dropping request");
            return None;
        }
        let geometry = self.s.geometry();
        let target = geometry
            .axis
            .with_main(geometry.offset, self.s.clamp_offset(main));
        let request = ScrollRequest { target };
        self.emit(request);
        Some(request)
    }

    /// Requests a scroll by `delta` along the scroll axis.
    ///
    /// The delta is relative to the still-pending request if the host has not drained it yet,
    /// otherwise to the last reported offset, so consecutive calls accumulate.
    pub fn scroll_by(&mut self, delta: f64) -> Option<ScrollRequest> {
        let axis = self.s.axis();
        let base = match self.pending {
            Some(pending) => pending.main(axis),
            None => self.s.geometry().main_offset(),
        };
        self.scroll_to_main(base + delta)
    }

    /// Requests a scroll that brings `key`'s natural position to its sticking edge.
    ///
    /// For a leading element this shows its section from the top (or leading side); for a
    /// trailing element, its section ends at the bottom (or trailing side). Returns `None` for
    /// unknown keys or malformed frames.
    pub fn scroll_to_element(&mut self, key: &K) -> Option<ScrollRequest> {
        let (bounds, edge) = self.s.frame(key).map(|f| (f.bounds, f.edge))?;
        let axis = self.s.axis();
        if !bounds.is_stickable(axis) {
            adebug!("scroll_to_element: malformed frame");
            return None;
        }
        let geometry = self.s.geometry();
        let ignores_safe_area = self
            .s
            .options()
            .edges_ignoring_safe_area
            .contains(edge);
        let line = geometry.sticking_line(edge, ignores_safe_area);
        let anchor = match edge {
            StickyEdge::LeadingStart => bounds.main_start(axis),
            StickyEdge::TrailingEnd => bounds.main_start(axis) + bounds.main_extent(axis),
        };
        self.scroll_to_main(geometry.main_offset() + (anchor - line))
    }

    /// Marks whether `key` reacts to [`tap`](Self::tap). Every key is tappable until marked.
    ///
    /// The flag belongs to the identity, so it survives retracting and re-reporting the frame.
    pub fn set_tappable(&mut self, key: K, tappable: bool) {
        if tappable {
            self.untappable.remove(&key);
        } else {
            self.untappable.insert(key);
        }
    }

    pub fn is_tappable(&self, key: &K) -> bool {
        !self.untappable.contains(key)
    }

    /// Handles a tap on a sticky element.
    ///
    /// Only a tappable element that is currently stuck and visible reacts; it scrolls its
    /// section into place via [`scroll_to_element`](Self::scroll_to_element).
    pub fn tap(&mut self, key: &K) -> Option<ScrollRequest> {
        if !self.is_tappable(key) {
            atrace!("tap: element not tappable");
            return None;
        }
        let visible = self.s.stuck().get(key).is_some_and(|it| it.opacity > 0.0);
        if !visible {
            atrace!("tap: element not stuck");
            return None;
        }
        self.scroll_to_element(key)
    }

    pub fn pending_scroll_request(&self) -> Option<&ScrollRequest> {
        self.pending.as_ref()
    }

    /// Drains the latest undelivered scroll request.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending.take()
    }

    fn emit(&mut self, request: ScrollRequest) {
        atrace!(
            x = request.target.x,
            y = request.target.y,
            "scroll request"
        );
        match &self.on_scroll_request {
            Some(sink) => sink(request),
            None => self.pending = Some(request),
        }
    }
}
