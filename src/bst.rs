//! An unbalanced Binary Search Tree whose algorithms never recurse. Descents walk a cursor down
//! the child slots and traversals drive an explicit [`Stack`] or [`Queue`] instead of the call
//! stack, so a degenerate tree (e.g. from sorted inserts) costs time but never stack space.
//!
//! # Examples
//!
//! ```
//! use iterbst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! for x in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.to_string_in_order(), "1, 3, 4, 6, 7, 8, 10, 13, 14");
//! assert_eq!(tree.to_string_pre_order(), "8, 3, 1, 6, 4, 7, 10, 14, 13");
//! assert_eq!(tree.to_string_post_order(), "1, 4, 7, 6, 3, 13, 14, 10, 8");
//! assert_eq!(tree.to_string_breadth_first(), "8, 3, 10, 1, 6, 14, 4, 7, 13");
//!
//! // Removing a node hands back its element.
//! assert_eq!(tree.remove(&10), Some(10));
//! assert!(!tree.contains(&10));
//! assert!(tree.contains(&14));
//! ```

use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use tracing::trace;

use crate::queue::Queue;
use crate::stack::Stack;

type Link<T> = Option<Box<Node<T>>>;

/// A `Node` owns its element and up to two children.
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// depth of 1.
    pub(crate) fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut to_visit = Stack::new();
        to_visit.push((self, 1));

        while let Ok((node, level)) = to_visit.pop() {
            deepest = deepest.max(level);
            for child in [node.left(), node.right()].into_iter().flatten() {
                to_visit.push((child, level + 1));
            }
        }

        deepest
    }
}

/// A Binary Search Tree holding distinct elements. Inserting an element that is already present
/// leaves the tree unchanged. Nothing rebalances the tree, so its depth depends on the insertion
/// order.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    length: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        // Detach children before each node is freed so dropping never recurses.
        let mut to_drop = Stack::new();
        if let Some(root) = self.root.take() {
            to_drop.push(root);
        }
        while let Ok(mut node) = to_drop.pop() {
            if let Some(left) = node.left.take() {
                to_drop.push(left);
            }
            if let Some(right) = node.right.take() {
                to_drop.push(right);
            }
        }
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree: 0 when empty, 1 for a lone root.
    ///
    /// # Examples
    ///
    /// ```
    /// use iterbst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.depth(), 0);
    ///
    /// // Sorted inserts degenerate into a chain.
    /// tree.extend(1..=4);
    /// assert_eq!(tree.depth(), 4);
    /// ```
    pub fn depth(&self) -> usize {
        self.root().map_or(0, Node::depth)
    }

    /// Inserts `element` at the leaf position its ordering dictates. Returns `false`, leaving the
    /// tree untouched, when an equal element is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use iterbst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match element.cmp(&node.element) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }

        *slot = Some(Node::new_boxed(element));
        self.length += 1;
        trace!(length = self.length, "inserted tree node");
        true
    }

    /// Whether an element equal to `element` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use iterbst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match element.cmp(&node.element) {
                Ordering::Equal => return true,
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }

        false
    }

    /// Removes the node holding `element` and returns its element, or `None` (leaving the tree
    /// untouched) when there is no such node.
    ///
    /// A node without a right child is replaced by its left child. Otherwise its right child takes
    /// its place and its left subtree is grafted onto the leftmost node of that right subtree, the
    /// removed element's in-order successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use iterbst::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = [5, 3, 8, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.remove(&5), None);
    /// assert_eq!(tree.to_string_pre_order(), "8, 7, 3");
    /// ```
    pub fn remove(&mut self, element: &T) -> Option<T>
    where
        T: Ord,
    {
        // `slot` is the parent's child slot (or the root) holding the current node, so the
        // replacement is spliced in by position.
        let mut slot = &mut self.root;
        loop {
            match element.cmp(&slot.as_ref()?.element) {
                Ordering::Equal => break,
                Ordering::Less => slot = &mut slot.as_mut()?.left,
                Ordering::Greater => slot = &mut slot.as_mut()?.right,
            }
        }

        let removed = slot.take()?;
        let Node {
            element,
            left,
            right,
        } = *removed;

        *slot = match right {
            None => left,
            Some(mut right) => {
                let mut leftmost = &mut right.left;
                while let Some(node) = leftmost {
                    leftmost = &mut node.left;
                }
                *leftmost = left;
                Some(right)
            }
        };

        self.length -= 1;
        trace!(length = self.length, "removed tree node");
        Some(element)
    }

    /// The elements in ascending order (left, node, right).
    ///
    /// Nodes are revisited through a marker stack running parallel to the node stack: a node is
    /// first pushed unexpanded, and when popped it is pushed back marked expanded between its
    /// children so its left subtree is emitted before it.
    pub fn in_order(&self) -> Vec<&T> {
        let mut visited = Vec::with_capacity(self.length);
        let Some(root) = self.root() else {
            return visited;
        };

        let mut to_visit = Stack::new();
        let mut expanded = Stack::new();
        to_visit.push(root);
        expanded.push(false);

        while let (Ok(node), Ok(seen)) = (to_visit.pop(), expanded.pop()) {
            if seen || node.is_leaf() {
                visited.push(&node.element);
                continue;
            }

            if let Some(right) = node.right() {
                to_visit.push(right);
                expanded.push(false);
            }
            to_visit.push(node);
            expanded.push(true);
            if let Some(left) = node.left() {
                to_visit.push(left);
                expanded.push(false);
            }
        }

        visited
    }

    /// The elements in pre-order (node, left, right).
    pub fn pre_order(&self) -> Vec<&T> {
        let mut visited = Vec::with_capacity(self.length);
        let mut to_visit = Stack::new();
        if let Some(root) = self.root() {
            to_visit.push(root);
        }

        while let Ok(node) = to_visit.pop() {
            visited.push(&node.element);
            // Right first so the left child is popped first.
            if let Some(right) = node.right() {
                to_visit.push(right);
            }
            if let Some(left) = node.left() {
                to_visit.push(left);
            }
        }

        visited
    }

    /// The elements in post-order (left, right, node). Same marker technique as
    /// [`in_order`](Self::in_order) but the expanded node goes under both of its children.
    pub fn post_order(&self) -> Vec<&T> {
        let mut visited = Vec::with_capacity(self.length);
        let Some(root) = self.root() else {
            return visited;
        };

        let mut to_visit = Stack::new();
        let mut expanded = Stack::new();
        to_visit.push(root);
        expanded.push(false);

        while let (Ok(node), Ok(seen)) = (to_visit.pop(), expanded.pop()) {
            if seen || node.is_leaf() {
                visited.push(&node.element);
                continue;
            }

            to_visit.push(node);
            expanded.push(true);
            if let Some(right) = node.right() {
                to_visit.push(right);
                expanded.push(false);
            }
            if let Some(left) = node.left() {
                to_visit.push(left);
                expanded.push(false);
            }
        }

        visited
    }

    /// The elements level by level, each level from left to right.
    pub fn breadth_first(&self) -> Vec<&T> {
        let mut visited = Vec::with_capacity(self.length);
        let mut to_visit = Queue::new();
        if let Some(root) = self.root() {
            to_visit.enqueue(root);
        }

        while let Ok(node) = to_visit.dequeue() {
            visited.push(&node.element);
            if let Some(left) = node.left() {
                to_visit.enqueue(left);
            }
            if let Some(right) = node.right() {
                to_visit.enqueue(right);
            }
        }

        visited
    }

    /// [`in_order`](Self::in_order) joined by `", "`. Empty for an empty tree.
    pub fn to_string_in_order(&self) -> String
    where
        T: fmt::Display,
    {
        self.in_order().into_iter().join(", ")
    }

    /// [`pre_order`](Self::pre_order) joined by `", "`. Empty for an empty tree.
    pub fn to_string_pre_order(&self) -> String
    where
        T: fmt::Display,
    {
        self.pre_order().into_iter().join(", ")
    }

    /// [`post_order`](Self::post_order) joined by `", "`. Empty for an empty tree.
    pub fn to_string_post_order(&self) -> String
    where
        T: fmt::Display,
    {
        self.post_order().into_iter().join(", ")
    }

    /// [`breadth_first`](Self::breadth_first) joined by `", "`. Empty for an empty tree.
    pub fn to_string_breadth_first(&self) -> String
    where
        T: fmt::Display,
    {
        self.breadth_first().into_iter().join(", ")
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Re-inserting the pre-order sequence rebuilds exactly the same shape.
impl<T: Ord + Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        self.pre_order().into_iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

/// The in-order elements joined by `", "`, or `empty`.
impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("empty")
        } else {
            write!(f, "{}", self.in_order().into_iter().format(", "))
        }
    }
}
