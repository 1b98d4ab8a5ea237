//! Node handle type.

use std::fmt;

/// Identifies a node in a [`BoundedList`](super::BoundedList).
///
/// A handle is an arena slot index plus the generation of that slot.
/// Removing a node bumps its slot's generation, so an old handle never
/// aliases a node inserted later into the same slot.
///
/// # Example
/// ```
/// use pagesim::list::BoundedList;
///
/// let mut list: BoundedList<i32> = BoundedList::new(2);
/// let id = list.append(10).unwrap();
/// assert!(list.contains_node(id));
///
/// list.remove(id);
/// let _reused = list.append(20).unwrap();
/// assert!(!list.contains_node(id));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

impl NodeId {
    #[inline]
    pub(crate) fn new(index: usize, generation: u64) -> Self {
        NodeId { index, generation }
    }

    /// Arena slot this handle points at.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({}@{})", self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_equality() {
        assert_eq!(NodeId::new(5, 0), NodeId::new(5, 0));
        assert_ne!(NodeId::new(5, 0), NodeId::new(6, 0));
        assert_ne!(NodeId::new(5, 0), NodeId::new(5, 1));
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(format!("{}", NodeId::new(42, 3)), "Node(42@3)");
    }
}
