//! Slot-based arena with stable handles.
//!
//! `SlotArena<T>` stores values in a `Vec<Option<T>>` and hands out `SlotId`
//! handles that stay valid until the slot is removed. Freed slots are recycled
//! through a free list, so a long-lived arena does not grow beyond its peak
//! occupancy. Holding a `SlotId` instead of a reference is what lets the hash
//! index and the recency list point at the same entry without aliasing.

/// Stable handle to a slot in a [`SlotArena`].
///
/// A `SlotId` is only meaningful for the arena that issued it. After the slot
/// is removed the id becomes dangling and lookups return `None`; the index may
/// later be reused for a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Raw index of the slot, mainly useful for debug output.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Arena of recyclable slots addressed by [`SlotId`].
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty arena with space reserved for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value` and returns a stable handle to it.
    ///
    /// Reuses a freed slot when one is available, otherwise appends.
    pub fn insert(&mut self, value: T) -> SlotId {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(value);
                idx
            },
            None => {
                self.slots.push(Some(value));
                self.slots.len() - 1
            },
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Removes the value at `id`, returning it if the slot was occupied.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let value = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(value)
    }

    /// Returns the value at `id`, if the slot is occupied.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Returns a mutable reference to the value at `id`, if occupied.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Returns `true` if `id` currently refers to an occupied slot.
    pub fn contains(&self, id: SlotId) -> bool {
        matches!(self.slots.get(id.0), Some(Some(_)))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value and forgets the free list.
    ///
    /// Allocated storage is kept for reuse.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
