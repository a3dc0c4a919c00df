//! A headless engine for sticky elements in scrollable content.
//!
//! For programmatic scrolling (scroll-to, tap-to-section), see the `sticky-scroll-adapter` crate.
//!
//! Designated elements "stick" to the leading or trailing edge of the viewport once the user
//! scrolls past them, like sticky table headers, generalized to arbitrary content and either
//! scroll axis. This crate computes, for every frame:
//! - which elements are currently stuck on each edge,
//! - the displacement that renders each of them flush with its edge,
//! - how two elements contending for the same edge hand off ([`StickyBehavior::Replace`] hard
//!   cut, or a [`StickyBehavior::Fade`] cross-fade over the outgoing element's extent).
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the natural frame of each sticky element after every layout pass
//! - scroll offset, content size, container size, and content insets
//!
//! and to apply the resulting offsets and opacities when drawing.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod key;
mod options;
mod registry;
mod resolver;
mod state;
mod sticky;
mod types;


pub use key::StickyKey;
pub use options::{OnChangeCallback, StickyOptions};
pub use registry::{ElementFrame, GeometryRegistry};
pub use resolver::{StuckElement, StuckRole, StuckSet, resolve, resolve_into};
pub use state::{ScrollGeometry, ScrollState};
pub use sticky::StickyScroll;
pub use types::{Axis, EdgeSet, Insets, Point, Rect, Size, StickyBehavior, StickyEdge};
