//! The node toolkit: a singly-linked chain of heap-owned nodes and the free
//! functions that build, edit, copy and release such chains.
//!
//! A chain is rooted at a [`Link`], which exclusively owns every node
//! reachable from it. The functions here work on raw links only; none of
//! them knows anything about cursors or sequence positions.

use std::ptr::NonNull;

/// A link to a node, or `None` at the end of a chain.
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Allocate a detached node holding `element`, linked to `next`.
    ///
    /// The returned pointer owns the allocation; it is released by
    /// [`head_remove`], [`remove_after`] or [`clear`] via `Box::from_raw`.
    pub(crate) fn new_detached(element: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { element, next })))
    }
}

/// Push a new node holding `element` at the front of the chain rooted at
/// `head`, updating the root.
pub(crate) fn head_insert<T>(head: &mut Link<T>, element: T) {
    *head = Some(Node::new_detached(element, *head));
}

/// Link a new node holding `element` immediately after `prev`.
///
/// It is unsafe because `prev` must point to a live node of a well-formed
/// chain, with no other mutable access to that chain.
pub(crate) unsafe fn insert_after<T>(mut prev: NonNull<Node<T>>, element: T) {
    let prev = prev.as_mut();
    prev.next = Some(Node::new_detached(element, prev.next));
}

/// Unlink the first node of the chain rooted at `head`, release it and
/// return its element. The root is updated to the following node.
///
/// It is unsafe because `head` must root a well-formed chain, with no other
/// access to the removed node.
///
/// # Panics
///
/// Panics if the chain is empty.
pub(crate) unsafe fn head_remove<T>(head: &mut Link<T>) -> T {
    let first = head.take().expect("head_remove on an empty chain");
    let node = Box::from_raw(first.as_ptr());
    *head = node.next;
    node.element
}

/// Unlink the node immediately after `prev`, release it and return its
/// element.
///
/// It is unsafe because `prev` must point to a live node of a well-formed
/// chain, with no other access to the removed node.
///
/// # Panics
///
/// Panics if `prev` is the last node of its chain.
pub(crate) unsafe fn remove_after<T>(mut prev: NonNull<Node<T>>) -> T {
    let prev = prev.as_mut();
    let target = prev.next.expect("remove_after at the end of a chain");
    let node = Box::from_raw(target.as_ptr());
    prev.next = node.next;
    node.element
}

/// Deep-copy an entire chain, returning the new head and the new tail.
/// No node is shared with the source; both returned links are `None` when
/// the source chain is empty.
///
/// It is unsafe because `source` must root a well-formed chain that stays
/// borrowed for the duration of the call.
pub(crate) unsafe fn copy<T: Clone>(source: Link<T>) -> (Link<T>, Link<T>) {
    let mut source_walk = match source {
        Some(node) => node,
        None => return (None, None),
    };
    let head = Node::new_detached(source_walk.as_ref().element.clone(), None);
    let mut tail = head;
    while let Some(next) = source_walk.as_ref().next {
        source_walk = next;
        let node = Node::new_detached(source_walk.as_ref().element.clone(), None);
        tail.as_mut().next = Some(node);
        tail = node;
    }
    (Some(head), Some(tail))
}

/// Release every node of the chain rooted at `head`, in chain order,
/// leaving the root `None`.
///
/// It is unsafe because `head` must root a well-formed chain and every node
/// of it must be released exactly this once.
pub(crate) unsafe fn clear<T>(head: &mut Link<T>) {
    let mut next = head.take();
    while let Some(node) = next {
        let node = Box::from_raw(node.as_ptr());
        next = node.next;
    }
}

/// Walk the chain rooted at `head` and count its nodes.
///
/// It is unsafe because `head` must root a well-formed chain.
#[cfg(any(test, debug_assertions))]
pub(crate) unsafe fn length<T>(head: Link<T>) -> usize {
    let mut count = 0;
    let mut link = head;
    while let Some(node) = link {
        count += 1;
        link = node.as_ref().next;
    }
    count
}
