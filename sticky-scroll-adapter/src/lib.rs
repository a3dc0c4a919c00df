//! Scroll coordination for the `sticky-scroll` crate.
//!
//! The `sticky-scroll` crate is UI-agnostic and focuses on the sticky geometry. This crate
//! provides a small, framework-neutral coordinator that adapters put between their toolkit and
//! the engine:
//!
//! - Forwarding scroll geometry and layout frames from toolkit callbacks
//! - Programmatic scrolling (scroll-to, scroll-by, tap a stuck header to jump to its section)
//!   expressed as fire-and-forget [`ScrollRequest`]s
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod coordinator;
mod key;
mod request;


pub use coordinator::ScrollCoordinator;
pub use request::{ScrollRequest, ScrollRequestCallback};
