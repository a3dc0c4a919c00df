use alloc::sync::Arc;

use sticky_scroll::{Axis, Point};

/// A one-way request asking the host toolkit to move the viewport.
///
/// Nothing waits for it to complete: once the host has scrolled, the new offset comes back
/// through the usual offset callback like any other scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    /// Absolute, clamped content offset to scroll to.
    pub target: Point,
}

impl ScrollRequest {
    /// The target offset along `axis`.
    pub fn main(&self, axis: Axis) -> f64 {
        axis.main(self.target)
    }
}

/// A sink for scroll requests, for hosts that prefer push over [`take_scroll_request`] polling.
///
/// [`take_scroll_request`]: crate::ScrollCoordinator::take_scroll_request
pub type ScrollRequestCallback = Arc<dyn Fn(ScrollRequest) + Send + Sync>;
