//! Singly linked list with positional insertion and removal.
//!
//! [`ForwardList`] owns a chain of [`Node`]s and tracks the head and the node
//! count. There is no cached tail, so appending walks the chain.
//!
//! # Example
//!
//! ```
//! use nexus_forward_list::{ForwardList, create_node};
//!
//! let mut list: ForwardList<&str> = ForwardList::new();
//!
//! list.add_node(create_node("b")).unwrap();
//! list.add_node_beginning(create_node("a")).unwrap();
//! list.add_node(create_node("d")).unwrap();
//! list.insert_node(create_node("c"), 2).unwrap();
//!
//! assert_eq!(list.payloads().collect::<Vec<_>>(), ["a", "b", "c", "d"]);
//!
//! // Removal hands the payload handle back to the caller.
//! assert_eq!(list.remove_node(1), Ok("b"));
//! assert_eq!(list.remove_node_beginning(), Ok("a"));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Positions
//!
//! Positions are 0-based from the head. Insertion accepts `0..=len()` (where
//! `len()` appends), removal and lookup accept `0..len()`.
//!
//! # Chain surgery
//!
//! [`get_node_at_mut`](ForwardList::get_node_at_mut) together with
//! [`Node::set_next`]/[`Node::take_next`] allows rearranging the chain by
//! hand. The list cannot see such edits, so its count may drift from the
//! real chain length until [`recount_nodes`](ForwardList::recount_nodes) is
//! called. Every positional operation walks the actual chain and reports
//! [`ListError::BadIndex`] rather than panicking when the chain is shorter
//! than the count claims.

use std::fmt;
use std::iter::FusedIterator;

use crate::{ListError, Node};

type Link<P> = Option<Box<Node<P>>>;

/// A singly linked list of payload handles.
///
/// The list exclusively owns its nodes. Payload handles are `Copy` and are
/// never inspected or released by the list.
pub struct ForwardList<P: Copy> {
    head: Link<P>,
    count: usize,
}

impl<P: Copy> Default for ForwardList<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Copy> ForwardList<P> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            count: 0,
        }
    }

    /// Returns the node count.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the list has no nodes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the head node, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&Node<P>> {
        self.head.as_deref()
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Appends a node at the tail.
    ///
    /// # Errors
    ///
    /// [`ListError::BadNode`] if `node` is absent or still linked to a
    /// successor.
    ///
    /// A rejected node is released. Its payload handle is `Copy` and stays
    /// with the caller, who can wrap it in a new node.
    pub fn add_node(&mut self, node: impl Into<Option<Box<Node<P>>>>) -> Result<(), ListError> {
        let node = Self::unlinked(node)?;

        *self.tail_link() = Some(node);
        self.count += 1;
        Ok(())
    }

    /// Prepends a node, making it the new head.
    ///
    /// # Errors
    ///
    /// [`ListError::BadNode`] if `node` is absent or still linked to a
    /// successor.
    ///
    /// A rejected node is released. Its payload handle is `Copy` and stays
    /// with the caller, who can wrap it in a new node.
    pub fn add_node_beginning(
        &mut self,
        node: impl Into<Option<Box<Node<P>>>>,
    ) -> Result<(), ListError> {
        let mut node = Self::unlinked(node)?;

        node.next = self.head.take();
        self.head = Some(node);
        self.count += 1;
        Ok(())
    }

    /// Inserts a node so that it ends up at position `pos`.
    ///
    /// `pos == 0` prepends and `pos == len()` appends.
    ///
    /// # Errors
    ///
    /// - [`ListError::BadNode`] if `node` is absent or still linked.
    /// - [`ListError::BadIndex`] if `pos > len()`, or if the chain has no
    ///   node at `pos - 1`.
    ///
    /// A rejected node is released. Its payload handle is `Copy` and stays
    /// with the caller, who can wrap it in a new node.
    pub fn insert_node(
        &mut self,
        node: impl Into<Option<Box<Node<P>>>>,
        pos: usize,
    ) -> Result<(), ListError> {
        let mut node = Self::unlinked(node)?;
        let count = self.count;
        if pos > count {
            return Err(ListError::BadIndex { pos, count });
        }
        if pos == 0 {
            return self.add_node_beginning(node);
        }

        let link = self
            .link_mut(pos)
            .ok_or(ListError::BadIndex { pos, count })?;
        node.next = link.take();
        *link = Some(node);
        self.count += 1;
        Ok(())
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the node at `pos`, returning its payload handle.
    ///
    /// # Errors
    ///
    /// - [`ListError::NotEnoughNodes`] if `pos == 0` and the list is empty.
    /// - [`ListError::BadIndex`] if there is no node at `pos`.
    pub fn remove_node(&mut self, pos: usize) -> Result<P, ListError> {
        let count = self.count;
        if pos > count {
            return Err(ListError::BadIndex { pos, count });
        }
        if pos == 0 {
            return self.remove_node_beginning();
        }

        let link = self
            .link_mut(pos)
            .ok_or(ListError::BadIndex { pos, count })?;
        let mut target = link.take().ok_or(ListError::BadIndex { pos, count })?;
        *link = target.next.take();
        self.count -= 1;
        Ok(target.payload)
    }

    /// Removes the head node, returning its payload handle.
    ///
    /// # Errors
    ///
    /// [`ListError::NotEnoughNodes`] if the list is empty.
    pub fn remove_node_beginning(&mut self) -> Result<P, ListError> {
        if self.count == 0 {
            return Err(ListError::NotEnoughNodes);
        }

        let mut head = self.head.take().ok_or(ListError::NotEnoughNodes)?;
        self.head = head.next.take();
        self.count -= 1;
        Ok(head.payload)
    }

    // ========================================================================
    // Bulk
    // ========================================================================

    /// Releases every node, returning how many were released.
    ///
    /// Payload handles are left alone.
    ///
    /// # Errors
    ///
    /// [`ListError::NotEnoughNodes`] if the list is already empty.
    pub fn wipe_nodes(&mut self) -> Result<usize, ListError> {
        if self.count == 0 {
            return Err(ListError::NotEnoughNodes);
        }

        let released = self.release_chain();
        tracing::trace!(released, "wiped list nodes");
        Ok(released)
    }

    /// Releases every node. Does nothing on an empty list.
    pub fn clear(&mut self) {
        self.release_chain();
    }

    /// Recounts the nodes reachable from the head and stores the result.
    ///
    /// Repairs the count after chain surgery. Returns the new count.
    pub fn recount_nodes(&mut self) -> usize {
        let reachable = self.iter().count();
        if reachable != self.count {
            tracing::debug!(stored = self.count, reachable, "repaired node count");
        }
        self.count = reachable;
        reachable
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Returns the node at `pos`, or `None` if there is none.
    #[must_use]
    pub fn get_node_at(&self, pos: usize) -> Option<&Node<P>> {
        if pos >= self.count {
            return None;
        }
        self.iter().nth(pos)
    }

    /// Returns the node at `pos` mutably, or `None` if there is none.
    ///
    /// See the [module docs](self#chain-surgery) on editing links through
    /// the returned node.
    pub fn get_node_at_mut(&mut self, pos: usize) -> Option<&mut Node<P>> {
        if pos >= self.count {
            return None;
        }
        self.link_mut(pos)?.as_deref_mut()
    }

    /// Returns an iterator over the nodes, head first.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, P> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Returns an iterator over the payload handles, head first.
    #[inline]
    #[must_use]
    pub fn payloads(&self) -> Payloads<'_, P> {
        Payloads { inner: self.iter() }
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn unlinked(node: impl Into<Option<Box<Node<P>>>>) -> Result<Box<Node<P>>, ListError> {
        match node.into() {
            Some(node) if !node.is_linked() => Ok(node),
            _ => Err(ListError::BadNode),
        }
    }

    /// Returns the link that holds the node at `pos`: the head for 0, the
    /// `next` of node `pos - 1` otherwise. `None` if the chain ends first.
    fn link_mut(&mut self, pos: usize) -> Option<&mut Link<P>> {
        let mut link = &mut self.head;
        for _ in 0..pos {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    /// Returns the empty link after the last node.
    fn tail_link(&mut self) -> &mut Link<P> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    fn release_chain(&mut self) -> usize {
        let mut released = 0;
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
            released += 1;
        }
        self.count = 0;
        released
    }
}

impl<P: Copy> Extend<P> for ForwardList<P> {
    /// Appends a node per payload, walking to the tail only once.
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        let mut link = self.tail_link();
        let mut added = 0;
        for payload in iter {
            let node = link.insert(Node::new(payload));
            link = &mut node.next;
            added += 1;
        }
        self.count += added;
    }
}

impl<P: Copy> FromIterator<P> for ForwardList<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, P: Copy> IntoIterator for &'a ForwardList<P> {
    type Item = &'a Node<P>;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: Copy + fmt::Debug> fmt::Debug for ForwardList<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.payloads()).finish()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over the nodes of a [`ForwardList`].
pub struct Iter<'a, P: Copy> {
    next: Option<&'a Node<P>>,
}

impl<'a, P: Copy> Iterator for Iter<'a, P> {
    type Item = &'a Node<P>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node)
    }
}

impl<P: Copy> FusedIterator for Iter<'_, P> {}

impl<P: Copy> Clone for Iter<'_, P> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<P: Copy + fmt::Debug> fmt::Debug for Iter<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.clone().map(Node::payload))
            .finish()
    }
}

/// Iterator over the payload handles of a [`ForwardList`].
pub struct Payloads<'a, P: Copy> {
    inner: Iter<'a, P>,
}

impl<P: Copy> Iterator for Payloads<'_, P> {
    type Item = P;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Node::payload)
    }
}

impl<P: Copy> FusedIterator for Payloads<'_, P> {}

impl<P: Copy + fmt::Debug> fmt::Debug for Payloads<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Payloads").field(&self.inner).finish()
    }
}
