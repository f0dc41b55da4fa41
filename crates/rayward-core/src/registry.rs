// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The slot registry: stable integer slots over raw native handles.
//!
//! One registry exists per resource family (textures, render targets, models,
//! shaders, model animations). A slot index stays valid exactly as long as
//! its entry is live; any use of a stale index after a free fails instead of
//! silently resolving to a different resource. Freed indices are reused
//! lowest-first, so callers must never assume an index is unique across the
//! lifetime of the process.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use crate::error::RayError;
use crate::resources::RawHandle;
use crate::result::RayResult;

/// An application-visible index into a slot registry.
///
/// Distinct from the [`RawHandle`] it wraps; the raw handle never leaves the
/// core.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Slot(usize);

impl Slot {
    /// The numeric index, for diagnostics and messages.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A live registry entry: the native handle plus cached metadata.
#[derive(Debug)]
pub struct SlotEntry<M> {
    /// The raw native handle this slot wraps.
    pub handle: RawHandle,
    /// Resource-family-specific metadata cached at allocation time.
    pub metadata: M,
    live: bool,
}

/// An array-like store mapping slots to live native handles.
///
/// Allocation returns the lowest-numbered free slot; a free list kept as a
/// min-heap avoids scanning on allocate. `live` transitions true→false
/// exactly once per allocation: double frees and stale lookups are reported
/// as validation errors, never masked.
#[derive(Debug)]
pub struct SlotRegistry<M> {
    family: &'static str,
    entries: Vec<SlotEntry<M>>,
    free: BinaryHeap<Reverse<usize>>,
}

impl<M> SlotRegistry<M> {
    /// Creates an empty registry for the named resource family.
    ///
    /// The family name only appears in log lines and error messages.
    pub fn new(family: &'static str) -> Self {
        Self {
            family,
            entries: Vec::new(),
            free: BinaryHeap::new(),
        }
    }

    /// Stores a handle with its metadata and returns the slot index.
    ///
    /// Reuses the lowest-numbered free slot when one exists; otherwise the
    /// store grows by one.
    pub fn allocate(&mut self, handle: RawHandle, metadata: M) -> Slot {
        let slot = match self.free.pop() {
            Some(Reverse(index)) => {
                self.entries[index] = SlotEntry {
                    handle,
                    metadata,
                    live: true,
                };
                Slot(index)
            }
            None => {
                self.entries.push(SlotEntry {
                    handle,
                    metadata,
                    live: true,
                });
                Slot(self.entries.len() - 1)
            }
        };
        log::debug!("{} slot {slot} allocated", self.family);
        slot
    }

    /// Resolves a slot to its entry.
    ///
    /// Never returns a handle for a freed or out-of-range slot.
    pub fn resolve(&self, slot: Slot) -> RayResult<&SlotEntry<M>> {
        match self.entries.get(slot.0) {
            Some(entry) if entry.live => Ok(entry),
            Some(_) => Err(RayError::validation(format!(
                "{} slot {slot} is not live",
                self.family
            ))),
            None => Err(RayError::validation(format!(
                "{} slot {slot} is out of range",
                self.family
            ))),
        }
    }

    /// Like [`resolve`](Self::resolve) but grants mutable access to the
    /// metadata (used for per-shader uniform location caching).
    pub fn resolve_mut(&mut self, slot: Slot) -> RayResult<&mut SlotEntry<M>> {
        match self.entries.get_mut(slot.0) {
            Some(entry) if entry.live => Ok(entry),
            Some(_) => Err(RayError::validation(format!(
                "{} slot {slot} is not live",
                self.family
            ))),
            None => Err(RayError::validation(format!(
                "{} slot {slot} is out of range",
                self.family
            ))),
        }
    }

    /// Marks the slot dead and returns the raw handle so the caller can
    /// release it natively.
    ///
    /// Freeing an already-free or invalid slot is always an error; silent
    /// success here would mask a use-after-free bug in caller code.
    pub fn free(&mut self, slot: Slot) -> RayResult<RawHandle> {
        match self.entries.get_mut(slot.0) {
            Some(entry) if entry.live => {
                entry.live = false;
                self.free.push(Reverse(slot.0));
                log::debug!("{} slot {slot} freed", self.family);
                Ok(entry.handle)
            }
            Some(_) => Err(RayError::validation(format!(
                "{} slot {slot} is already free",
                self.family
            ))),
            None => Err(RayError::validation(format!(
                "{} slot {slot} is out of range",
                self.family
            ))),
        }
    }

    /// Number of currently-live entries.
    pub fn count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.live).count()
    }

    /// Marks every live entry dead and returns their handles for native
    /// release. Idempotent: a second call returns an empty list.
    pub fn drain_live(&mut self) -> Vec<RawHandle> {
        let mut handles = Vec::new();
        for (index, entry) in self.entries.iter_mut().enumerate() {
            if entry.live {
                entry.live = false;
                self.free.push(Reverse(index));
                handles.push(entry.handle);
            }
        }
        if !handles.is_empty() {
            log::debug!("{}: drained {} live slots", self.family, handles.len());
        }
        handles
    }

    /// The resource family name this registry serves.
    pub fn family(&self) -> &'static str {
        self.family
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn registry() -> SlotRegistry<String> {
        SlotRegistry::new("test")
    }

    #[test]
    fn resolve_after_allocate_returns_stored_metadata() {
        let mut reg = registry();
        let slot = reg.allocate(RawHandle::new(7), "seven".to_string());
        let entry = reg.resolve(slot).unwrap();
        assert_eq!(entry.handle, RawHandle::new(7));
        assert_eq!(entry.metadata, "seven");
    }

    #[test]
    fn resolve_after_free_fails_with_validation_error() {
        let mut reg = registry();
        let slot = reg.allocate(RawHandle::new(1), "one".to_string());
        reg.free(slot).unwrap();
        let err = reg.resolve(slot).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn resolve_out_of_range_fails() {
        let reg = registry();
        let err = reg.resolve(Slot(3)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.message().contains("out of range"));
    }

    #[test]
    fn double_free_is_an_error() {
        let mut reg = registry();
        let slot = reg.allocate(RawHandle::new(1), "one".to_string());
        assert!(reg.free(slot).is_ok());
        let err = reg.free(slot).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.message().contains("already free"));
    }

    #[test]
    fn count_tracks_allocates_minus_frees() {
        let mut reg = registry();
        let slots: Vec<_> = (0..5)
            .map(|i| reg.allocate(RawHandle::new(i), format!("{i}")))
            .collect();
        assert_eq!(reg.count(), 5);
        reg.free(slots[1]).unwrap();
        reg.free(slots[3]).unwrap();
        assert_eq!(reg.count(), 3);
    }

    #[test]
    fn freed_slots_are_reused_lowest_first() {
        let mut reg = registry();
        let slots: Vec<_> = (0..4)
            .map(|i| reg.allocate(RawHandle::new(i), format!("{i}")))
            .collect();
        reg.free(slots[2]).unwrap();
        reg.free(slots[0]).unwrap();

        let reused = reg.allocate(RawHandle::new(100), "new".to_string());
        assert_eq!(reused, slots[0]);
        let reused_next = reg.allocate(RawHandle::new(101), "newer".to_string());
        assert_eq!(reused_next, slots[2]);
    }

    #[test]
    fn reuse_does_not_resurrect_old_metadata() {
        let mut reg = registry();
        let slot = reg.allocate(RawHandle::new(1), "old".to_string());
        reg.free(slot).unwrap();
        let reused = reg.allocate(RawHandle::new(2), "new".to_string());
        assert_eq!(reused, slot);
        let entry = reg.resolve(reused).unwrap();
        assert_eq!(entry.handle, RawHandle::new(2));
        assert_eq!(entry.metadata, "new");
    }

    #[test]
    fn drain_live_empties_the_registry_and_is_idempotent() {
        let mut reg = registry();
        for i in 0..3 {
            reg.allocate(RawHandle::new(i), format!("{i}"));
        }
        let drained = reg.drain_live();
        assert_eq!(drained.len(), 3);
        assert_eq!(reg.count(), 0);
        assert!(reg.drain_live().is_empty());
    }

    #[test]
    fn allocation_after_drain_reuses_lowest_index() {
        let mut reg = registry();
        for i in 0..3 {
            reg.allocate(RawHandle::new(i), format!("{i}"));
        }
        reg.drain_live();
        let slot = reg.allocate(RawHandle::new(9), "fresh".to_string());
        assert_eq!(slot.index(), 0);
    }
}
