//! List nodes.
//!
//! A [`Node`] pairs a payload handle with an owning link to the next node.
//! Nodes are created on their own (see [`create_node`]) and then moved into a
//! [`ForwardList`](crate::ForwardList) by one of its insertion operations.
//!
//! # Payload handles
//!
//! The payload type is bounded by `Copy`. A `Copy` type cannot implement
//! `Drop`, so releasing a node can never release the data its handle refers
//! to. Typical handles are shared references, raw pointers, or integer keys
//! into caller-owned storage:
//!
//! ```
//! use nexus_forward_list::{ForwardList, create_node};
//!
//! let orders = vec![String::from("buy"), String::from("sell")];
//!
//! let mut list: ForwardList<&String> = ForwardList::new();
//! list.add_node(create_node(&orders[0])).unwrap();
//! list.add_node(create_node(&orders[1])).unwrap();
//!
//! list.wipe_nodes().unwrap();
//! // The nodes are gone, the payloads are not.
//! assert_eq!(orders[1], "sell");
//! ```

use std::fmt;

use crate::alloc::try_box;

/// A node in a singly linked list.
///
/// Holds a caller-owned payload handle and the link to the next node, or
/// `None` at the tail.
pub struct Node<P: Copy> {
    pub(crate) payload: P,
    pub(crate) next: Option<Box<Node<P>>>,
}

impl<P: Copy> Node<P> {
    /// Creates an unlinked node.
    ///
    /// Aborts on allocation failure, like [`Box::new`]. Use [`Node::try_new`]
    /// to observe the failure instead.
    #[must_use]
    pub fn new(payload: P) -> Box<Self> {
        Box::new(Self { payload, next: None })
    }

    /// Creates an unlinked node, returning `None` if allocation fails.
    #[must_use]
    pub fn try_new(payload: P) -> Option<Box<Self>> {
        try_box(Self { payload, next: None })
    }

    /// Returns the payload handle.
    #[inline]
    #[must_use]
    pub fn payload(&self) -> P {
        self.payload
    }

    /// Returns the next node, or `None` at the tail.
    #[inline]
    #[must_use]
    pub fn next(&self) -> Option<&Node<P>> {
        self.next.as_deref()
    }

    /// Returns the next node mutably.
    #[inline]
    pub fn next_mut(&mut self) -> Option<&mut Node<P>> {
        self.next.as_deref_mut()
    }

    /// Returns `true` if this node links to a successor.
    #[inline]
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.next.is_some()
    }

    /// Detaches and returns everything after this node.
    ///
    /// When this node belongs to a list, the list's count no longer matches
    /// its chain until [`ForwardList::recount_nodes`](crate::ForwardList::recount_nodes)
    /// is called.
    pub fn take_next(&mut self) -> Option<Box<Node<P>>> {
        self.next.take()
    }

    /// Replaces the link to the next node, returning the old one.
    ///
    /// Same count caveat as [`Node::take_next`].
    pub fn set_next(&mut self, next: Option<Box<Node<P>>>) -> Option<Box<Node<P>>> {
        std::mem::replace(&mut self.next, next)
    }
}

impl<P: Copy> Drop for Node<P> {
    // Unlink the tail one node at a time so dropping a long chain does not
    // recurse once per node.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<P: Copy + fmt::Debug> fmt::Debug for Node<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("payload", &self.payload)
            .field("linked", &self.is_linked())
            .finish()
    }
}

/// Creates an unlinked node carrying `payload`.
///
/// Returns `None` if the node cannot be allocated. The result can be handed
/// straight to an insertion operation, which reports an absent node as
/// [`ListError::BadNode`](crate::ListError::BadNode).
///
/// ```
/// use nexus_forward_list::{ForwardList, create_node};
///
/// let mut list = ForwardList::new();
/// list.add_node(create_node(42u64)).unwrap();
/// assert_eq!(list.get_node_at(0).map(|n| n.payload()), Some(42));
/// ```
#[must_use]
pub fn create_node<P: Copy>(payload: P) -> Option<Box<Node<P>>> {
    Node::try_new(payload)
}
