//! Bounded LRU list.
//!
//! The tiers of the page manager are built on this structure.
//!
//! # Components
//! - [`BoundedList`] - Fixed-capacity doubly-linked list with O(1) lookup
//! - [`NodeId`] - Generational handle to a node in the list's arena
//! - [`Keyed`] - Identity used for lookups

mod bounded_list;
mod keyed;
mod node_id;

pub use bounded_list::{BoundedList, Iter};
pub use keyed::Keyed;
pub use node_id::NodeId;
