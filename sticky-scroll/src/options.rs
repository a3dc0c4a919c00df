use alloc::sync::Arc;

use crate::sticky::StickyScroll;
use crate::{Axis, EdgeSet, StickyBehavior};

/// A callback fired after the stuck set has been recomputed.
pub type OnChangeCallback<K> = Arc<dyn Fn(&StickyScroll<K>) + Send + Sync>;

/// Configuration for [`crate::StickyScroll`].
///
/// `axis`, `behavior` and `edges_ignoring_safe_area` are fixed for the life of the engine; only
/// `on_change` can be swapped later via [`StickyScroll::set_on_change`].
pub struct StickyOptions<K> {
    pub axis: Axis,
    pub behavior: StickyBehavior,
    /// Edges whose stuck elements may render into the content inset instead of stopping at it.
    pub edges_ignoring_safe_area: EdgeSet,
    /// Optional callback fired once per recompute (coalesced inside `batch_update`).
    pub on_change: Option<OnChangeCallback<K>>,
}

impl<K> StickyOptions<K> {
    pub fn new(axis: Axis, behavior: StickyBehavior) -> Self {
        Self {
            axis,
            behavior,
            edges_ignoring_safe_area: EdgeSet::EMPTY,
            on_change: None,
        }
    }

    pub fn with_edges_ignoring_safe_area(mut self, edges: EdgeSet) -> Self {
        self.edges_ignoring_safe_area = edges;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: impl Fn(&StickyScroll<K>) + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }
}

impl<K> Default for StickyOptions<K> {
    fn default() -> Self {
        Self::new(Axis::default(), StickyBehavior::default())
    }
}

impl<K> Clone for StickyOptions<K> {
    fn clone(&self) -> Self {
        Self {
            axis: self.axis,
            behavior: self.behavior,
            edges_ignoring_safe_area: self.edges_ignoring_safe_area,
            on_change: self.on_change.clone(),
        }
    }
}

impl<K> core::fmt::Debug for StickyOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StickyOptions")
            .field("axis", &self.axis)
            .field("behavior", &self.behavior)
            .field("edges_ignoring_safe_area", &self.edges_ignoring_safe_area)
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .finish()
    }
}
