#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Slot index of a key inside the registry's report-ordered frame list.
#[cfg(feature = "std")]
pub(crate) type KeySlotMap<K> = HashMap<K, usize>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySlotMap<K> = BTreeMap<K, usize>;

/// Bounds required of element identities.
///
/// With `std` this is `Hash + Eq + Clone`; without it, `Ord + Clone`.
#[cfg(feature = "std")]
pub trait StickyKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> StickyKey for K {}

#[cfg(not(feature = "std"))]
pub trait StickyKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> StickyKey for K {}
