//! A last-in-first-out view over [`LinkedList`]. Pushing and popping both work on the head so
//! every operation is `O(1)`.

use std::fmt;

use crate::error::Result;
use crate::linked_list::LinkedList;

/// A LIFO stack backed by a [`LinkedList`].
///
/// # Examples
///
/// ```
/// use iterbst::Stack;
///
/// let mut stack = Stack::new();
/// assert!(!stack.has_next());
///
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.to_string(), "2, 1");
///
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert!(stack.pop().is_err());
/// ```
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Puts `element` on top of the stack.
    pub fn push(&mut self, element: T) {
        self.list.insert(element);
    }

    /// Takes the top element off the stack.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`](crate::Error::EmptyContainer) when the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.list.delete()
    }

    /// The top element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.list.first()
    }

    /// Whether there is anything left to pop.
    pub fn has_next(&self) -> bool {
        self.list.len() > 0
    }

    /// The number of elements on the stack.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("list", &self.list).finish()
    }
}

/// Elements from the top down, joined by `", "`, or `empty`.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn new_stack_is_empty() {
        let stack: Stack<i32> = Stack::new();

        assert_eq!(stack.to_string(), "empty");
        assert!(!stack.has_next());
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn lifo_order() {
        let mut stack = Stack::new();
        for x in 1..=3 {
            stack.push(x);
        }
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.len(), 3);

        let mut popped = Vec::new();
        while stack.has_next() {
            popped.extend(stack.pop());
        }
        assert_eq!(popped, [3, 2, 1]);
    }

    #[test]
    fn pop_on_empty() {
        let mut stack: Stack<()> = Stack::new();
        assert_eq!(stack.pop(), Err(Error::EmptyContainer));

        stack.push(());
        assert_eq!(stack.pop(), Ok(()));
        assert_eq!(stack.pop(), Err(Error::EmptyContainer));
    }
}
