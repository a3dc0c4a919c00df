use crate::{Axis, Insets, Point, Size, StickyEdge};

/// A snapshot of the scroll view's geometry, as last sampled from the host toolkit.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollGeometry {
    pub axis: Axis,
    /// Scrolled distance from the content origin. Negative while content insets are exposed.
    pub offset: Point,
    pub content_size: Size,
    /// Size of the visible viewport, insets included.
    pub container_size: Size,
    pub content_insets: Insets,
}

impl ScrollGeometry {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    pub fn main_offset(&self) -> f64 {
        self.axis.main(self.offset)
    }

    pub fn content_extent(&self) -> f64 {
        self.axis.main_size(self.content_size)
    }

    pub fn container_extent(&self) -> f64 {
        self.axis.main_size(self.container_size)
    }

    pub fn leading_inset(&self) -> f64 {
        self.axis.leading_inset(self.content_insets)
    }

    pub fn trailing_inset(&self) -> f64 {
        self.axis.trailing_inset(self.content_insets)
    }

    /// The content-space coordinate elements stuck to `edge` sit flush against.
    ///
    /// Unless the edge ignores the safe area, the line is moved inward by the content inset on
    /// that side.
    pub fn sticking_line(&self, edge: StickyEdge, ignores_safe_area: bool) -> f64 {
        let offset = self.main_offset();
        match edge {
            StickyEdge::LeadingStart if ignores_safe_area => offset,
            StickyEdge::LeadingStart => offset + finite_or_zero(self.leading_inset()),
            StickyEdge::TrailingEnd if ignores_safe_area => offset + self.container_extent(),
            StickyEdge::TrailingEnd => {
                offset + self.container_extent() - finite_or_zero(self.trailing_inset())
            }
        }
    }

    /// Whether the viewport has been measured well enough to place anything against its edges.
    pub fn is_measured(&self) -> bool {
        let extent = self.container_extent();
        extent.is_finite() && extent > 0.0 && self.main_offset().is_finite()
    }

    /// Smallest reachable offset along the axis (the leading inset fully exposed).
    pub fn min_offset(&self) -> f64 {
        0.0 - finite_or_zero(self.leading_inset())
    }

    /// Largest reachable offset along the axis. Never below [`min_offset`](Self::min_offset).
    pub fn max_offset(&self) -> f64 {
        let content = finite_or_zero(self.content_extent());
        let container = finite_or_zero(self.container_extent());
        let trailing = finite_or_zero(self.trailing_inset());
        (content - container + trailing).max(self.min_offset())
    }

    /// Clamps an offset along the axis into `[min_offset, max_offset]`.
    ///
    /// Infinities clamp to the matching end. NaN clamps to `min_offset`.
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return self.min_offset();
        }
        offset.clamp(self.min_offset(), self.max_offset())
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Owned scroll state for one scroll view.
///
/// Every `update_*` is a plain overwrite of one field and reports whether the value changed. The
/// host toolkit is the single writer; no history is retained.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    geometry: ScrollGeometry,
}

impl ScrollState {
    pub fn new(axis: Axis) -> Self {
        Self {
            geometry: ScrollGeometry::new(axis),
        }
    }

    pub fn axis(&self) -> Axis {
        self.geometry.axis
    }

    pub fn update_offset(&mut self, offset: Point) -> bool {
        replace_if_changed(&mut self.geometry.offset, offset)
    }

    pub fn update_content_size(&mut self, size: Size) -> bool {
        replace_if_changed(&mut self.geometry.content_size, size)
    }

    pub fn update_container_size(&mut self, size: Size) -> bool {
        replace_if_changed(&mut self.geometry.container_size, size)
    }

    pub fn update_insets(&mut self, insets: Insets) -> bool {
        replace_if_changed(&mut self.geometry.content_insets, insets)
    }

    /// Overwrites every field from a snapshot. The axis is kept.
    pub fn restore(&mut self, geometry: ScrollGeometry) -> bool {
        let geometry = ScrollGeometry {
            axis: self.geometry.axis,
            ..geometry
        };
        replace_if_changed(&mut self.geometry, geometry)
    }

    pub fn current_geometry(&self) -> ScrollGeometry {
        self.geometry
    }

    pub fn is_measured(&self) -> bool {
        self.geometry.is_measured()
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        self.geometry.clamp_offset(offset)
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
