use alloc::vec::Vec;

use crate::{EdgeSet, ElementFrame, ScrollGeometry, StickyBehavior, StickyEdge};

/// Whether a stuck element is the one owning its edge or the one being displaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StuckRole {
    Primary,
    Predecessor,
}

/// One element the host must draw displaced (and possibly faded) this frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StuckElement<K> {
    pub key: K,
    pub edge: StickyEdge,
    pub role: StuckRole,
    /// Displacement along the scroll axis that puts the element flush with its edge.
    ///
    /// Positive moves the element towards the end of the content.
    pub render_offset: f64,
    /// In `[0, 1]`.
    pub opacity: f64,
}

/// The result of one resolution pass.
///
/// Entries for [`StickyEdge::LeadingStart`] come before [`StickyEdge::TrailingEnd`]. Within an
/// edge the predecessor (if any) comes before the primary, so drawing in order puts the primary
/// on top.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StuckSet<K> {
    items: Vec<StuckElement<K>>,
}

impl<K> Default for StuckSet<K> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<K> StuckSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StuckElement<K>> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[StuckElement<K>] {
        &self.items
    }

    /// Entries for one edge, in draw order.
    pub fn for_edge(&self, edge: StickyEdge) -> impl Iterator<Item = &StuckElement<K>> {
        self.items.iter().filter(move |it| it.edge == edge)
    }

    pub fn primary(&self, edge: StickyEdge) -> Option<&StuckElement<K>> {
        self.find(edge, StuckRole::Primary)
    }

    pub fn predecessor(&self, edge: StickyEdge) -> Option<&StuckElement<K>> {
        self.find(edge, StuckRole::Predecessor)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn find(&self, edge: StickyEdge, role: StuckRole) -> Option<&StuckElement<K>> {
        self.items
            .iter()
            .find(|it| it.edge == edge && it.role == role)
    }
}

impl<K: PartialEq> StuckSet<K> {
    pub fn get(&self, key: &K) -> Option<&StuckElement<K>> {
        self.items.iter().find(|it| it.key == *key)
    }

    /// Displacement to apply to `key`; zero when it is not stuck.
    pub fn render_offset(&self, key: &K) -> f64 {
        self.get(key).map_or(0.0, |it| it.render_offset)
    }

    /// Opacity to apply to `key`; fully opaque when it is not stuck.
    pub fn opacity(&self, key: &K) -> f64 {
        self.get(key).map_or(1.0, |it| it.opacity)
    }
}

impl<'a, K> IntoIterator for &'a StuckSet<K> {
    type Item = &'a StuckElement<K>;
    type IntoIter = core::slice::Iter<'a, StuckElement<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Computes which elements are stuck, where they render, and how opaque they are.
///
/// This is a pure function of its inputs: calling it twice with the same frames and geometry
/// yields the same set. `frames` must be in report order (as [`GeometryRegistry::snapshot`]
/// returns them); that order breaks ties between identical natural positions, the later report
/// counting as the more recently crossed.
///
/// Degradations (no error is ever surfaced):
/// - an unmeasured viewport (see [`ScrollGeometry::is_measured`]) yields an empty set;
/// - frames that are not [stickable](crate::Rect::is_stickable) are ignored for this pass.
///
/// [`GeometryRegistry::snapshot`]: crate::GeometryRegistry::snapshot
pub fn resolve<K: Clone>(
    frames: &[ElementFrame<K>],
    geometry: &ScrollGeometry,
    behavior: StickyBehavior,
    edges_ignoring_safe_area: EdgeSet,
) -> StuckSet<K> {
    let mut out = StuckSet::new();
    resolve_into(
        frames,
        geometry,
        behavior,
        edges_ignoring_safe_area,
        &mut out,
    );
    out
}

/// Same as [`resolve`], but reuses `out`'s allocation.
pub fn resolve_into<K: Clone>(
    frames: &[ElementFrame<K>],
    geometry: &ScrollGeometry,
    behavior: StickyBehavior,
    edges_ignoring_safe_area: EdgeSet,
    out: &mut StuckSet<K>,
) {
    out.clear();
    if !geometry.is_measured() {
        return;
    }
    for edge in StickyEdge::ALL {
        let edge_line = EdgeLine::new(geometry, edge, edges_ignoring_safe_area.contains(edge));
        resolve_edge(frames, geometry, &edge_line, behavior, &mut out.items);
    }
}

/// The sticking boundary of one edge along the scroll axis.
struct EdgeLine {
    edge: StickyEdge,
    /// Viewport coordinate (in content space) elements stick against.
    line: f64,
}

impl EdgeLine {
    fn new(geometry: &ScrollGeometry, edge: StickyEdge, ignores_safe_area: bool) -> Self {
        Self {
            edge,
            line: geometry.sticking_line(edge, ignores_safe_area),
        }
    }

    /// Natural start an element of `extent` must have to sit flush with this edge.
    fn threshold(&self, extent: f64) -> f64 {
        match self.edge {
            StickyEdge::LeadingStart => self.line,
            StickyEdge::TrailingEnd => self.line - extent,
        }
    }

    /// How far past the threshold the element's natural start has moved. Negative: not crossed.
    fn advance(&self, start: f64, extent: f64) -> f64 {
        let threshold = self.threshold(extent);
        match self.edge {
            StickyEdge::LeadingStart => threshold - start,
            StickyEdge::TrailingEnd => start - threshold,
        }
    }

    /// Whether `a` comes after `b` in this edge's scroll order, among crossed elements.
    ///
    /// Either way the last one is the crossed element nearest its threshold: the largest start
    /// on the leading edge, the smallest on the trailing edge. Ties go to `a`, which is always the
    /// later report when this is called.
    fn visits_after_or_ties(&self, a_start: f64, b_start: f64) -> bool {
        match self.edge {
            StickyEdge::LeadingStart => a_start >= b_start,
            StickyEdge::TrailingEnd => a_start <= b_start,
        }
    }
}

#[derive(Clone, Copy)]
struct Crossed {
    slot: usize,
    start: f64,
    extent: f64,
    advance: f64,
}

fn resolve_edge<K: Clone>(
    frames: &[ElementFrame<K>],
    geometry: &ScrollGeometry,
    edge_line: &EdgeLine,
    behavior: StickyBehavior,
    out: &mut Vec<StuckElement<K>>,
) {
    let axis = geometry.axis;

    // The last two crossed elements in scroll order.
    let mut primary: Option<Crossed> = None;
    let mut predecessor: Option<Crossed> = None;

    for (slot, frame) in frames.iter().enumerate() {
        if frame.edge != edge_line.edge || !frame.bounds.is_stickable(axis) {
            continue;
        }
        let start = frame.bounds.main_start(axis);
        let extent = frame.bounds.main_extent(axis);
        let advance = edge_line.advance(start, extent);
        if advance.is_nan() || advance < 0.0 {
            continue;
        }
        let c = Crossed {
            slot,
            start,
            extent,
            advance,
        };
        match primary {
            Some(p) if !edge_line.visits_after_or_ties(start, p.start) => {
                if predecessor.is_none_or(|q| edge_line.visits_after_or_ties(start, q.start)) {
                    predecessor = Some(c);
                }
            }
            _ => {
                predecessor = primary;
                primary = Some(c);
            }
        }
    }

    let Some(primary) = primary else {
        return;
    };

    // The outgoing element only lingers while the primary is within its extent of the edge.
    let predecessor = predecessor.filter(|q| primary.advance < q.extent);

    let primary_opacity = match (behavior, predecessor) {
        (StickyBehavior::Fade, Some(q)) => (primary.advance / q.extent).clamp(0.0, 1.0),
        _ => 1.0,
    };

    if let Some(q) = predecessor {
        let opacity = match behavior {
            StickyBehavior::Replace => 0.0,
            StickyBehavior::Fade => 1.0 - primary_opacity,
        };
        out.push(stuck(frames, edge_line, q, StuckRole::Predecessor, opacity));
    }
    out.push(stuck(
        frames,
        edge_line,
        primary,
        StuckRole::Primary,
        primary_opacity,
    ));
}

fn stuck<K: Clone>(
    frames: &[ElementFrame<K>],
    edge_line: &EdgeLine,
    c: Crossed,
    role: StuckRole,
    opacity: f64,
) -> StuckElement<K> {
    StuckElement {
        key: frames[c.slot].key.clone(),
        edge: edge_line.edge,
        role,
        render_offset: edge_line.threshold(c.extent) - c.start,
        opacity,
    }
}
