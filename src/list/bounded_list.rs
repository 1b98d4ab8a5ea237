//! Fixed-capacity doubly-linked list with O(1) lookup.

use std::collections::HashMap;
use std::fmt;

use crate::common::{Error, Result};
use crate::list::{Keyed, NodeId};

/// One entry of the list. Links are handles into the arena, never owners.
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// An arena slot. `node` is `None` while the slot sits on the free list.
struct Slot<T> {
    generation: u64,
    node: Option<Node<T>>,
}

/// A doubly-linked list that never grows past `capacity` entries.
///
/// The front is the least recently used end, the back the most recently
/// used one. A `HashMap` from [`Keyed::key`] to [`NodeId`] makes
/// membership checks and lookups O(1), and every relinking operation
/// (`remove`, `move_to_front`, `move_to_back`) is O(1) given a handle.
///
/// # Architecture
/// ```text
///            head                                    tail
///             │                                        │
///             ▼                                        ▼
///   slots: [ Node A ] ◀──▶ [ Node B ] ◀──▶ ... ◀──▶ [ Node Z ]
///   (LRU)                                              (MRU)
///
///   lookup: key(A) → NodeId(A), key(B) → NodeId(B), ...
///   free:   recycled slot indices
/// ```
///
/// # Duplicate keys
/// Registering a key that is already in the lookup map is a no-op: the
/// first node ever associated with a key stays the one `find` returns,
/// even if a second node with an equal key is spliced into the list.
/// Removing that second node leaves the lookup entry alone; removing the
/// first one drops the key.
///
/// # Example
/// ```
/// use pagesim::list::BoundedList;
///
/// let mut list: BoundedList<i32> = BoundedList::new(3);
/// list.append(1).unwrap();
/// list.append(2).unwrap();
/// list.append(3).unwrap();
/// assert!(list.append(4).is_err());
///
/// list.move_value_to_back(&1);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3, 1]);
/// ```
pub struct BoundedList<T: Keyed> {
    /// Maximum number of entries (immutable after construction).
    capacity: usize,

    /// Number of live nodes.
    len: usize,

    /// Node arena, indexed by `NodeId::index`.
    slots: Vec<Slot<T>>,

    /// Indices of vacant slots, reused before the arena grows.
    free: Vec<usize>,

    /// Least recently used end.
    head: Option<NodeId>,

    /// Most recently used end.
    tail: Option<NodeId>,

    /// Maps value keys to their node.
    lookup: HashMap<T::Key, NodeId>,
}

impl<T: Keyed> BoundedList<T> {
    /// Create an empty list that holds at most `capacity` values.
    ///
    /// A capacity of zero gives a list that is always full.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            len: 0,
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            lookup: HashMap::with_capacity(capacity),
        }
    }

    // ========================================================================
    // Public API: Size and termini
    // ========================================================================

    /// Get the maximum number of nodes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if another insert would exceed the capacity.
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity
    }

    /// Handle of the least recently used node.
    pub fn front(&self) -> Option<NodeId> {
        self.head
    }

    /// Handle of the most recently used node.
    pub fn back(&self) -> Option<NodeId> {
        self.tail
    }

    /// Least recently used value.
    pub fn front_value(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Most recently used value.
    pub fn back_value(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Value stored at `id`, or `None` if the handle is stale.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    /// Mutable access to the value at `id`.
    ///
    /// The caller must not change the value's key; the lookup map is not
    /// updated.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.node_mut(id).map(|node| &mut node.value)
    }

    /// Check if `id` refers to a node currently in the list.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Iterate values from front (LRU) to back (MRU).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    // ========================================================================
    // Public API: Insertion
    // ========================================================================

    /// Insert `value` at the back.
    ///
    /// # Errors
    /// - `Error::CapacityExceeded` if the list is full; the list is unchanged
    pub fn append(&mut self, value: T) -> Result<NodeId> {
        self.check_capacity()?;
        let key = value.key();
        let id = self.alloc(value);
        self.link_back(id);
        self.register(key, id);
        Ok(id)
    }

    /// Insert `value` at the front.
    ///
    /// # Errors
    /// - `Error::CapacityExceeded` if the list is full; the list is unchanged
    pub fn prepend(&mut self, value: T) -> Result<NodeId> {
        self.check_capacity()?;
        let key = value.key();
        let id = self.alloc(value);
        self.link_front(id);
        self.register(key, id);
        Ok(id)
    }

    /// Insert `value` directly before the node `at`.
    ///
    /// Inserting before the front node is the same as [`prepend`](Self::prepend).
    ///
    /// # Errors
    /// - `Error::CapacityExceeded` if the list is full
    /// - `Error::InvalidNode` if `at` is not in the list
    pub fn insert_before(&mut self, at: NodeId, value: T) -> Result<NodeId> {
        self.check_capacity()?;
        if !self.contains_node(at) {
            return Err(Error::InvalidNode(at));
        }
        let key = value.key();
        let id = self.alloc(value);
        self.link_before(at, id);
        self.register(key, id);
        Ok(id)
    }

    /// Insert `value` directly after the node `at`.
    ///
    /// Inserting after the back node is the same as [`append`](Self::append).
    ///
    /// # Errors
    /// - `Error::CapacityExceeded` if the list is full
    /// - `Error::InvalidNode` if `at` is not in the list
    pub fn insert_after(&mut self, at: NodeId, value: T) -> Result<NodeId> {
        self.check_capacity()?;
        if !self.contains_node(at) {
            return Err(Error::InvalidNode(at));
        }
        let key = value.key();
        let id = self.alloc(value);
        self.link_after(at, id);
        self.register(key, id);
        Ok(id)
    }

    // ========================================================================
    // Public API: Lookup
    // ========================================================================

    /// Find the node registered for `value`'s key.
    pub fn find(&self, value: &T) -> Option<NodeId> {
        self.find_key(&value.key())
    }

    /// Find the node registered for `key`.
    pub fn find_key(&self, key: &T::Key) -> Option<NodeId> {
        self.lookup.get(key).copied()
    }

    /// Check if a node is registered for `value`'s key.
    pub fn contains(&self, value: &T) -> bool {
        self.contains_key(&value.key())
    }

    /// Check if a node is registered for `key`.
    pub fn contains_key(&self, key: &T::Key) -> bool {
        self.lookup.contains_key(key)
    }

    // ========================================================================
    // Public API: Removal
    // ========================================================================

    /// Detach the node `id` and return its value.
    ///
    /// A stale handle is a no-op and returns `None`.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        if !self.contains_node(id) {
            return None;
        }

        self.unlink(id);
        let value = self.release(id)?;

        let key = value.key();
        if self.lookup.get(&key) == Some(&id) {
            self.lookup.remove(&key);
        }

        Some(value)
    }

    /// Remove the node registered for `value`'s key, if any.
    pub fn remove_by_value(&mut self, value: &T) -> Option<T> {
        let id = self.find(value)?;
        self.remove(id)
    }

    /// Remove and return the least recently used value.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.head?;
        self.remove(id)
    }

    /// Drop every node and every lookup entry.
    ///
    /// Handles issued before the call become stale.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation += 1;
                self.free.push(index);
            }
        }
        self.lookup.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // ========================================================================
    // Public API: Reordering
    // ========================================================================

    /// Move `id` to the front. No-op if it is already there or stale.
    pub fn move_to_front(&mut self, id: NodeId) {
        if self.head == Some(id) || !self.contains_node(id) {
            return;
        }
        self.unlink(id);
        self.link_front(id);
    }

    /// Move `id` to the back. No-op if it is already there or stale.
    pub fn move_to_back(&mut self, id: NodeId) {
        if self.tail == Some(id) || !self.contains_node(id) {
            return;
        }
        self.unlink(id);
        self.link_back(id);
    }

    /// Move the node registered for `value` to the front.
    ///
    /// Returns `false` if the value is not in the list.
    pub fn move_value_to_front(&mut self, value: &T) -> bool {
        match self.find(value) {
            Some(id) => {
                self.move_to_front(id);
                true
            }
            None => false,
        }
    }

    /// Move the node registered for `value` to the back.
    ///
    /// Returns `false` if the value is not in the list.
    pub fn move_value_to_back(&mut self, value: &T) -> bool {
        match self.find(value) {
            Some(id) => {
                self.move_to_back(id);
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Internal: Arena management
    // ========================================================================

    fn check_capacity(&self) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Place `value` in a vacant slot. The node is not linked yet.
    fn alloc(&mut self, value: T) -> NodeId {
        let node = Node {
            value,
            prev: None,
            next: None,
        };
        self.len += 1;

        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId::new(index, slot.generation)
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId::new(self.slots.len() - 1, 0)
            }
        }
    }

    /// Vacate the slot of an already unlinked node.
    fn release(&mut self, id: NodeId) -> Option<T> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation += 1;
        self.free.push(id.index);
        self.len -= 1;
        Some(node.value)
    }

    /// First registration wins.
    fn register(&mut self, key: T::Key, id: NodeId) {
        self.lookup.entry(key).or_insert(id);
    }

    fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    // ========================================================================
    // Internal: Linking
    // ========================================================================

    fn links(&self, id: NodeId) -> (Option<NodeId>, Option<NodeId>) {
        self.node(id)
            .map(|node| (node.prev, node.next))
            .unwrap_or((None, None))
    }

    fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.prev = prev;
        }
    }

    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.next = next;
        }
    }

    /// Splice `id` out, joining its neighbours (or moving a terminus).
    fn unlink(&mut self, id: NodeId) {
        let (prev, next) = self.links(id);

        match prev {
            Some(p) => self.set_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.set_prev(n, prev),
            None => self.tail = prev,
        }

        self.set_prev(id, None);
        self.set_next(id, None);
    }

    fn link_before(&mut self, at: NodeId, id: NodeId) {
        let (prev, _) = self.links(at);

        self.set_prev(id, prev);
        self.set_next(id, Some(at));
        self.set_prev(at, Some(id));
        match prev {
            Some(p) => self.set_next(p, Some(id)),
            None => self.head = Some(id),
        }
    }

    fn link_after(&mut self, at: NodeId, id: NodeId) {
        let (_, next) = self.links(at);

        self.set_prev(id, Some(at));
        self.set_next(id, next);
        self.set_next(at, Some(id));
        match next {
            Some(n) => self.set_prev(n, Some(id)),
            None => self.tail = Some(id),
        }
    }

    fn link_front(&mut self, id: NodeId) {
        match self.head {
            Some(head) => self.link_before(head, id),
            None => {
                self.head = Some(id);
                self.tail = Some(id);
            }
        }
    }

    fn link_back(&mut self, id: NodeId) {
        match self.tail {
            Some(tail) => self.link_after(tail, id),
            None => {
                self.head = Some(id);
                self.tail = Some(id);
            }
        }
    }
}

impl<T: Keyed + fmt::Debug> fmt::Debug for BoundedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedList")
            .field("capacity", &self.capacity)
            .field("len", &self.len)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Front-to-back iterator over a [`BoundedList`].
pub struct Iter<'a, T: Keyed> {
    list: &'a BoundedList<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T: Keyed> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.list.node(id)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: Keyed> IntoIterator for &'a BoundedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
