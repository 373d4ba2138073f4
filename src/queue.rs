//! A first-in-first-out view over [`LinkedList`]: enqueue appends at the tail and dequeue
//! removes the head, both `O(1)` thanks to the list's tail pointer.

use std::fmt;

use crate::error::Result;
use crate::linked_list::LinkedList;

/// A FIFO queue backed by a [`LinkedList`].
///
/// # Examples
///
/// ```
/// use iterbst::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue('a');
/// queue.enqueue('b');
/// assert_eq!(queue.to_string(), "a, b");
///
/// assert_eq!(queue.dequeue(), Ok('a'));
/// assert!(queue.has_next());
/// ```
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Adds `element` to the back of the queue.
    pub fn enqueue(&mut self, element: T) {
        self.list.insert_last(element);
    }

    /// Removes the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`](crate::Error::EmptyContainer) when the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.list.delete()
    }

    /// The element at the front, if any.
    pub fn peek(&self) -> Option<&T> {
        self.list.first()
    }

    /// Whether there is anything left to dequeue.
    pub fn has_next(&self) -> bool {
        self.list.len() > 0
    }

    /// The number of queued elements.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("list", &self.list).finish()
    }
}

/// Elements from front to back, joined by `", "`, or `empty`.
impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}
