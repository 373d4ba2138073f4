//! A singly-linked list that tracks its tail so both ends can be appended to in `O(1)`.
//!
//! Nodes are leaked `Box` allocations linked by [`NonNull`] pointers and owned by the list as a
//! whole. The last node is reachable both from its predecessor and through the tail pointer, so no
//! `Box` is kept alive while a node is linked: a node is only turned back into a `Box` (and freed)
//! once it has been unlinked from the chain. Removing from the back still has to walk since there
//! are no back pointers.
//!
//! # Examples
//!
//! ```
//! use iterbst::LinkedList;
//!
//! let mut list = LinkedList::new();
//! assert_eq!(list.to_string(), "empty");
//!
//! list.insert_at(3, 0);
//! list.insert(5);
//! list.insert_at(2, 1);
//! // Past the end just appends.
//! list.insert_at(6, 9);
//! assert_eq!(list.to_string(), "5, 2, 3, 6");
//!
//! assert_eq!(list.delete_at(0), Ok(5));
//! assert_eq!(list.to_string(), "2, 3, 6");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::{Error, Result};

type Link<T> = Option<NonNull<ListNode<T>>>;

struct ListNode<T> {
    element: T,
    next: Link<T>,
}

impl<T> ListNode<T> {
    /// Allocates a node and hands ownership of it to the caller's chain.
    fn new_leaked(element: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { element, next })))
    }
}

/// A singly-linked sequence with `O(1)` insertion at both ends and `O(1)` removal at the front.
pub struct LinkedList<T> {
    head: Link<T>,
    // Copies the pointer stored in the last node's predecessor (or `head`). `None` iff `head` is.
    tail: Link<T>,
    length: usize,
    _owns: PhantomData<Box<ListNode<T>>>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.tail = None;
        while let Some(node) = self.head {
            // SAFETY: every node reachable from `head` was allocated with `Box::new` in
            // `ListNode::new_leaked` and is owned by this list alone. `head` moves past the node
            // before the `Box` is dropped so it is reclaimed exactly once.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            self.head = node.next;
        }
    }
}

impl<T> LinkedList<T> {
    /// Generates a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            length: 0,
            _owns: PhantomData,
        }
    }

    /// The number of elements in the list.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Prepends `element` so it becomes the new head.
    pub fn insert(&mut self, element: T) {
        let node = ListNode::new_leaked(element, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.length += 1;
    }

    /// Inserts `element` so that it ends up at position `index`. An `index` of zero prepends and
    /// any `index` at or past the end appends, so this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use iterbst::LinkedList;
    ///
    /// let mut list: LinkedList<_> = [1, 3].into_iter().collect();
    /// list.insert_at(2, 1);
    /// list.insert_at(4, 100);
    ///
    /// assert_eq!(list.to_string(), "1, 2, 3, 4");
    /// ```
    pub fn insert_at(&mut self, element: T, index: usize) {
        if index == 0 {
            return self.insert(element);
        }
        if index >= self.length {
            return self.insert_last(element);
        }

        let Some(mut previous) = self.node(index - 1) else {
            return self.insert_last(element);
        };
        // SAFETY: `previous` is a live node of this list and we hold `&mut self`, so the
        // reference created here is the only one. `index < length` so it isn't the tail.
        unsafe {
            let previous = previous.as_mut();
            previous.next = Some(ListNode::new_leaked(element, previous.next));
        }
        self.length += 1;
    }

    /// Appends `element` after the current tail.
    pub fn insert_last(&mut self, element: T) {
        let node = ListNode::new_leaked(element, None);
        match self.tail {
            // SAFETY: `tail` points at the last node of this list. We hold `&mut self` so no
            // other reference to it exists.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.length += 1;
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        let length = self.length;
        let node = self
            .node(index)
            .ok_or(Error::IndexOutOfRange { index, length })?;
        // SAFETY: the node is live for as long as `self` is borrowed, and shared access to the
        // list only ever creates shared references to its nodes.
        Ok(unsafe { &node.as_ref().element })
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let length = self.length;
        let mut node = self
            .node(index)
            .ok_or(Error::IndexOutOfRange { index, length })?;
        // SAFETY: the node is live and the returned reference borrows `self` mutably, so nothing
        // else can reach the node until it is released.
        Ok(unsafe { &mut node.as_mut().element })
    }

    /// Removes and returns the element at `index`, relinking its neighbours.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len()`. The list is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use iterbst::{Error, LinkedList};
    ///
    /// let mut list: LinkedList<_> = ["This", "is", "a", "list!"].into_iter().collect();
    /// assert_eq!(list.delete_at(2), Ok("a"));
    /// assert_eq!(list.to_string(), "This, is, list!");
    ///
    /// assert_eq!(
    ///     list.delete_at(3),
    ///     Err(Error::IndexOutOfRange { index: 3, length: 3 })
    /// );
    /// ```
    pub fn delete_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        if index + 1 == self.length {
            return self.delete_last();
        }
        if index == 0 {
            return self.delete();
        }

        let length = self.length;
        let mut previous = self
            .node(index - 1)
            .ok_or(Error::IndexOutOfRange { index, length })?;
        // SAFETY: `previous` and its successor are live nodes of this list. The successor is
        // unlinked before it is reclaimed, and it isn't the tail because `index + 1 < length`.
        let removed = unsafe {
            let previous = previous.as_mut();
            let removed = previous
                .next
                .ok_or(Error::IndexOutOfRange { index, length })?;
            let removed = Box::from_raw(removed.as_ptr());
            previous.next = removed.next;
            removed
        };
        self.length -= 1;

        trace!(index, length = self.length, "deleted list node");
        Ok(removed.element)
    }

    /// Removes and returns the head.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the list is empty.
    pub fn delete(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::EmptyContainer)?;
        // SAFETY: `head` is owned by this list and is unlinked right below, so once reclaimed
        // nothing in the list points at it. `tail` is cleared if it was the same node.
        let ListNode { element, next } = *unsafe { Box::from_raw(head.as_ptr()) };
        self.head = next;
        self.length -= 1;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(element)
    }

    /// Removes and returns the tail. Without back pointers this walks to the second-to-last node,
    /// so it's `O(n)` unless the list has a single element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the list is empty.
    pub fn delete_last(&mut self) -> Result<T> {
        if self.length <= 1 {
            return self.delete();
        }

        let mut previous = self
            .node(self.length - 2)
            .ok_or(Error::EmptyContainer)?;
        // SAFETY: `previous` is live and its successor is the tail. The tail is unlinked from
        // `previous` and replaced in `self.tail` before anything could reach it again.
        let removed = unsafe {
            let removed = previous.as_mut().next.take().ok_or(Error::EmptyContainer)?;
            Box::from_raw(removed.as_ptr())
        };
        self.tail = Some(previous);
        self.length -= 1;
        Ok(removed.element)
    }

    /// Peeks at the head.
    pub fn first(&self) -> Option<&T> {
        // SAFETY: a `Some` head is a live node, borrowed for as long as `self` is.
        self.head.map(|head| unsafe { &head.as_ref().element })
    }

    /// Peeks at the tail without walking the list.
    pub fn last(&self) -> Option<&T> {
        // SAFETY: a `Some` tail is a live node, borrowed for as long as `self` is.
        self.tail.map(|tail| unsafe { &tail.as_ref().element })
    }

    /// Iterates over the elements from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.length,
            _list: PhantomData,
        }
    }

    /// The pointer to the node at `index`, walking from the head.
    fn node(&self, index: usize) -> Link<T> {
        let mut current = self.head;
        for _ in 0..index {
            // SAFETY: every link reachable from `head` points at a live node of this list.
            current = unsafe { current?.as_ref().next };
        }
        current
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.length {
            Ok(())
        } else {
            debug!(index, length = self.length, "list index out of range");
            Err(Error::IndexOutOfRange {
                index,
                length: self.length,
            })
        }
    }
}

/// Borrowing iterator over a [`LinkedList`], created by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _list: PhantomData<&'a LinkedList<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the iterator borrows the list, so the node stays alive and unmodified for
            // `'a`.
            let node: &'a ListNode<T> = unsafe { node.as_ref() };
            self.next = node.next;
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert_last(element);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Elements joined by `", "` from head to tail, or `empty`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("empty")
        } else {
            write!(f, "{}", self.iter().format(", "))
        }
    }
}
