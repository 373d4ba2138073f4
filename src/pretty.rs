//! Draws a [`BinarySearchTree`] as rows of text, one tree level per label row with rows of `/`
//! and `\` hanging between levels.
//!
//! Every level reserves a slot for every position a complete tree would have, so absent children
//! still take up room and siblings never collide as long as their labels fit in [`LABEL_WIDTH`].
//! The horizontal geometry comes from a spacing table where `spacing[0] = 0`, `spacing[1] = 1` and
//!
//! ```text
//! spacing[i] = (i - 1) + spacing[0] + spacing[1] + ... + spacing[i - 1]
//! ```
//!
//! A level `h` levels above the bottom of the tree is indented by `spacing[h]`, and the branches
//! under it take `spacing[h - 1]` rows to fan out far enough to reach the level below. The layout
//! doubles in width with each level so it is only meant for small trees: trees deeper than
//! [`MAX_DEPTH`] are not drawn at all.

use std::fmt;

use tracing::{debug, trace};

use crate::bst::{BinarySearchTree, Node};
use crate::queue::Queue;

/// Labels are padded to this many cells. Longer labels are written in full and push the rest of
/// their row to the right, so everything after them on that row no longer lines up with the
/// branches drawn above it.
pub const LABEL_WIDTH: usize = 2;

/// The deepest tree [`Pretty`] will draw. Both the width and the height of the drawing roughly
/// double with every level.
pub const MAX_DEPTH: usize = 10;

impl<T> BinarySearchTree<T> {
    /// Returns a value whose [`Display`](fmt::Display) implementation draws the tree. An empty
    /// tree is drawn as `empty`, and a tree deeper than [`MAX_DEPTH`] levels is not drawn: a
    /// single `too deep to draw` line naming its depth is written instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use iterbst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.pretty().to_string(), "  2\n / \\\n1  3\n");
    /// ```
    pub fn pretty(&self) -> Pretty<'_, T> {
        Pretty { tree: self }
    }
}

/// A [`BinarySearchTree`] drawn as text. Created by [`BinarySearchTree::pretty`].
pub struct Pretty<'a, T> {
    tree: &'a BinarySearchTree<T>,
}

impl<T: fmt::Display> fmt::Display for Pretty<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.tree.root() else {
            return writeln!(f, "empty");
        };

        let depth = root.depth();
        if depth > MAX_DEPTH {
            debug!(depth, max = MAX_DEPTH, "tree too deep to draw");
            return writeln!(f, "too deep to draw: {} levels, at most {} fit", depth, MAX_DEPTH);
        }

        for row in render(root, depth) {
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}

/// Builds `spacing[0..=depth + 1]`.
fn spacing_table(depth: usize) -> Vec<usize> {
    let mut spacing = vec![0; depth + 2];
    spacing[1] = 1;

    let mut sum = spacing[0] + spacing[1];
    for i in 2..spacing.len() {
        spacing[i] = (i - 1) + sum;
        sum += spacing[i];
    }

    spacing
}

/// Lays the tree out breadth first. Three queues move in step: the node (or `None` for a
/// placeholder), its level, and whether a branch should be drawn down to it.
fn render<T: fmt::Display>(root: &Node<T>, depth: usize) -> Vec<String> {
    let spacing = spacing_table(depth);
    trace!(depth, "rendering tree");

    let mut nodes = Queue::new();
    let mut levels = Queue::new();
    let mut branches = Queue::new();
    nodes.enqueue(Some(root));
    levels.enqueue(0);

    let mut rows = Vec::new();
    let mut row = String::new();
    push_blanks(&mut row, spacing[depth]);
    let mut previous_level = 0;

    while let (Ok(node), Ok(level)) = (nodes.dequeue(), levels.dequeue()) {
        // Placeholders under the bottom level.
        if level == depth {
            break;
        }

        if level > previous_level {
            rows.push(std::mem::take(&mut row));
            draw_branches(&mut rows, &mut branches, &spacing, depth - previous_level, previous_level);
            // The bottom row starts flush left.
            if depth - level > 1 {
                push_blanks(&mut row, spacing[depth - level]);
            }
            previous_level = level;
        }

        match node {
            Some(node) => row.push_str(&format!(
                "{:<width$}",
                node.element.to_string(),
                width = LABEL_WIDTH
            )),
            None => push_blanks(&mut row, LABEL_WIDTH),
        }
        push_blanks(&mut row, spacing[depth - level + 1] - 1);

        let (left, right) = node.map_or((None, None), |node| (node.left(), node.right()));
        for child in [left, right] {
            nodes.enqueue(child);
            levels.enqueue(level + 1);
            branches.enqueue(child.is_some());
        }
    }

    rows.push(row);
    rows
}

/// Draws the rows of branches under `level`, which sits `height` levels above the bottom. There
/// is one `/` `\` pair per slot on `level`; each row moves the pair one cell further apart.
fn draw_branches(
    rows: &mut Vec<String>,
    branches: &mut Queue<bool>,
    spacing: &[usize],
    height: usize,
    level: usize,
) {
    for i in 0..spacing[height - 1] {
        let mut row = String::new();
        for _ in 0..1usize << level {
            push_blanks(&mut row, spacing[height] - 1 - i);
            row.push(next_branch(branches, '/'));
            push_blanks(&mut row, 2 * i + 1);
            row.push(next_branch(branches, '\\'));
            push_blanks(&mut row, spacing[height] - i);
        }
        rows.push(row);
    }

    while branches.dequeue().is_ok() {}
}

/// Takes the next flag and requeues it, so every row of a level sees the same sequence.
fn next_branch(branches: &mut Queue<bool>, glyph: char) -> char {
    match branches.dequeue() {
        Ok(draw) => {
            branches.enqueue(draw);
            if draw {
                glyph
            } else {
                ' '
            }
        }
        Err(_) => ' ',
    }
}

fn push_blanks(row: &mut String, count: usize) {
    row.extend(std::iter::repeat(' ').take(count));
}
