//! Doubly-linked list backed by a [`SlotArena`].
//!
//! Nodes live in the arena and link to each other by [`SlotId`], so every node
//! has a stable handle that outside structures (such as a hash index) can keep
//! and use for O(1) detach and relocation. No raw pointers are involved; a
//! stale id simply fails the arena lookup.
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                 │
//!   ├────────┼────────────────────────────────────────────┤
//!   │ id_0   │ { value: A, prev: None,  next: Some(id_1)} │
//!   │ id_1   │ { value: B, prev: id_0,  next: Some(id_2)} │
//!   │ id_2   │ { value: C, prev: id_1,  next: None      } │
//!   └────────┴────────────────────────────────────────────┘
//!
//!   front ─► [id_0] ◄──► [id_1] ◄──► [id_2] ◄─ back
//! ```
//!
//! All structural operations (`push_front`, `pop_back`, `remove`,
//! `move_to_front`) are O(1).

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Doubly-linked list whose nodes are addressed by stable [`SlotId`] handles.
#[derive(Debug)]
pub struct IntrusiveList<T> {
    arena: SlotArena<Node<T>>,
    front: Option<SlotId>,
    back: Option<SlotId>,
}

impl<T> IntrusiveList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            front: None,
            back: None,
        }
    }

    /// Creates an empty list with node storage reserved for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            front: None,
            back: None,
        }
    }

    /// Number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Value at the front of the list.
    pub fn front(&self) -> Option<&T> {
        self.front.and_then(|id| self.get(id))
    }

    /// Value at the back of the list.
    pub fn back(&self) -> Option<&T> {
        self.back.and_then(|id| self.get(id))
    }

    /// Value stored at `id`, if present.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Mutable value stored at `id`, if present.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Inserts a node at the front and returns its handle.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: self.front,
        });
        match self.front {
            Some(old) => {
                if let Some(node) = self.arena.get_mut(old) {
                    node.prev = Some(id);
                }
            },
            None => self.back = Some(id),
        }
        self.front = Some(id);
        id
    }

    /// Removes and returns the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.back?;
        self.remove(id)
    }

    /// Unlinks the node `id` and returns its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Relocates an existing node to the front; `false` if `id` is not present.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.front == Some(id) {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.front = None;
        self.back = None;
    }

    /// Iterates over values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.front,
        }
    }

    /// Iterates over `SlotId`s from front to back.
    pub fn iter_ids(&self) -> IdIter<'_, T> {
        IdIter {
            list: self,
            current: self.front,
        }
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.arena.get_mut(prev_id) {
                    prev_node.next = next;
                }
            },
            None => self.front = next,
        }

        match next {
            Some(next_id) => {
                if let Some(next_node) = self.arena.get_mut(next_id) {
                    next_node.prev = prev;
                }
            },
            None => self.back = prev,
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }
        Some(())
    }

    fn attach_front(&mut self, id: SlotId) {
        let old_front = self.front;
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = old_front;
        } else {
            return;
        }
        match old_front {
            Some(old) => {
                if let Some(node) = self.arena.get_mut(old) {
                    node.prev = Some(id);
                }
            },
            None => self.back = Some(id),
        }
        self.front = Some(id);
    }

    /// Walks the list and asserts linkage consistency. Test/debug builds only.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate(&self) {
        if self.front.is_none() || self.back.is_none() {
            assert!(self.front.is_none());
            assert!(self.back.is_none());
            assert_eq!(self.len(), 0);
            return;
        }

        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut prev = None;
        let mut current = self.front;

        while let Some(id) = current {
            assert!(seen.insert(id), "cycle at {:?}", id);
            let node = self.arena.get(id).expect("linked node missing from arena");
            assert_eq!(node.prev, prev);
            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len());
        }

        assert_eq!(prev, self.back);
        assert_eq!(count, self.len());
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back value iterator over an [`IntrusiveList`].
pub struct Iter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

/// Front-to-back handle iterator over an [`IntrusiveList`].
pub struct IdIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<T> Iterator for IdIter<'_, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.list.arena.get(id).and_then(|node| node.next);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Copy>(list: &IntrusiveList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn push_front_orders_newest_first() {
        let mut list = IntrusiveList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);
        assert_eq!(collect(&list), vec![3, 2, 1]);
        list.debug_validate();
    }

    #[test]
    fn front_and_back_track_the_ends() {
        let mut list = IntrusiveList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);
        assert_eq!(collect(&list), vec![3, 2, 1]);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&1));
        list.debug_validate();
    }

    #[test]
    fn pop_back_returns_oldest_first() {
        let mut list = IntrusiveList::new();
        list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        assert_eq!(list.pop_back(), Some("a"));
        assert_eq!(list.pop_back(), Some("b"));
        assert_eq!(list.pop_back(), Some("c"));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        list.debug_validate();
    }

    #[test]
    fn move_to_front_relinks() {
        let mut list = IntrusiveList::new();
        let a = list.push_front(1);
        let b = list.push_front(2);
        let _c = list.push_front(3);

        assert!(list.move_to_front(a));
        assert_eq!(collect(&list), vec![1, 3, 2]);

        assert!(list.move_to_front(b));
        assert_eq!(collect(&list), vec![2, 1, 3]);
        list.debug_validate();
    }

    #[test]
    fn move_front_node_to_front_is_noop() {
        let mut list = IntrusiveList::new();
        list.push_front(2);
        let a = list.push_front(1);
        assert!(list.move_to_front(a));
        assert_eq!(collect(&list), vec![1, 2]);
        list.debug_validate();
    }

    #[test]
    fn remove_middle_node() {
        let mut list = IntrusiveList::new();
        list.push_front(3);
        let b = list.push_front(2);
        list.push_front(1);

        assert_eq!(list.remove(b), Some(2));
        assert_eq!(collect(&list), vec![1, 3]);
        assert!(!list.contains(b));
        list.debug_validate();
    }

    #[test]
    fn remove_only_node_empties_list() {
        let mut list = IntrusiveList::new();
        let a = list.push_front(1);
        assert_eq!(list.remove(a), Some(1));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        list.debug_validate();
    }

    #[test]
    fn stale_handle_operations_fail_cleanly() {
        let mut list = IntrusiveList::new();
        let a = list.push_front(1);
        list.remove(a);

        assert!(!list.move_to_front(a));
        assert_eq!(list.remove(a), None);
        list.debug_validate();
    }

    #[test]
    fn iter_ids_matches_values() {
        let mut list = IntrusiveList::new();
        let a = list.push_front(10);
        let b = list.push_front(20);
        assert_eq!(list.iter_ids().collect::<Vec<_>>(), vec![b, a]);
    }

    #[test]
    fn clear_then_reuse() {
        let mut list = IntrusiveList::new();
        list.push_front(1);
        list.push_front(2);
        list.clear();
        assert!(list.is_empty());

        list.push_front(9);
        assert_eq!(collect(&list), vec![9]);
        list.debug_validate();
    }
}
