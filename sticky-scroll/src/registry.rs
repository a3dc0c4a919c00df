use alloc::vec::Vec;

use crate::key::{KeySlotMap, StickyKey};
use crate::{Rect, StickyEdge};

/// The latest reported frame of a sticky-eligible element.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementFrame<K> {
    pub key: K,
    /// Natural (unstuck) bounds in the scroll content's coordinate space.
    pub bounds: Rect,
    pub edge: StickyEdge,
}

/// Per-element frames keyed by a stable identity.
///
/// Frames are kept in report order: the first report of a key fixes its slot, later reports
/// overwrite the frame in place. That order is the tie-break when two frames share a natural
/// position.
///
/// The registry never forgets a key on its own. Hosts must [`retract`](Self::retract) elements
/// that leave the content, otherwise stale frames keep taking part in resolution.
#[derive(Clone, Debug)]
pub struct GeometryRegistry<K> {
    frames: Vec<ElementFrame<K>>,
    slots: KeySlotMap<K>,
}

impl<K: StickyKey> Default for GeometryRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StickyKey> GeometryRegistry<K> {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            slots: KeySlotMap::<K>::new(),
        }
    }

    /// Records the frame for `key`, replacing any previous report.
    ///
    /// Returns `true` when the stored frame changed.
    pub fn report(&mut self, key: K, bounds: Rect, edge: StickyEdge) -> bool {
        if let Some(&slot) = self.slots.get(&key) {
            let frame = &mut self.frames[slot];
            if frame.bounds == bounds && frame.edge == edge {
                return false;
            }
            frame.bounds = bounds;
            frame.edge = edge;
            return true;
        }
        self.slots.insert(key.clone(), self.frames.len());
        self.frames.push(ElementFrame { key, bounds, edge });
        true
    }

    /// Removes the frame for `key`, preserving the report order of the remaining frames.
    pub fn retract(&mut self, key: &K) -> Option<ElementFrame<K>> {
        let slot = self.slots.remove(key)?;
        let frame = self.frames.remove(slot);
        self.reindex_from(slot);
        Some(frame)
    }

    /// Keeps only the frames for which `f` returns `true`.
    pub fn retain(&mut self, mut f: impl FnMut(&ElementFrame<K>) -> bool) {
        let before = self.frames.len();
        self.frames.retain(|frame| f(frame));
        if self.frames.len() != before {
            self.slots.clear();
            self.reindex_from(0);
        }
    }

    pub fn clear(&mut self) {
        self.frames.clear();
        self.slots.clear();
    }

    pub fn get(&self, key: &K) -> Option<&ElementFrame<K>> {
        self.slots.get(key).map(|&slot| &self.frames[slot])
    }

    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterates frames in report order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementFrame<K>> {
        self.frames.iter()
    }

    /// The full current frame set, in report order.
    pub fn snapshot(&self) -> &[ElementFrame<K>] {
        &self.frames
    }

    fn reindex_from(&mut self, start: usize) {
        for (slot, frame) in self.frames.iter().enumerate().skip(start) {
            self.slots.insert(frame.key.clone(), slot);
        }
    }
}
