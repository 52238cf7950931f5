//! A linked BST. Nodes are heap-allocated and exclusively owned by their
//! parent, and all operations mutate the tree in place. Unlike a
//! self-balancing tree, nothing is rebalanced on insert or delete - the tree
//! keeps whatever shape the insertion order gave it until [`rebalance`] is
//! called explicitly, which makes it handy for demonstrating how much shape
//! matters for search cost.
//!
//! Items route by their natural order: strictly smaller items go left,
//! everything else (including equal items) goes right, so duplicates
//! accumulate in the right subtree of their equals.
//!
//! [`rebalance`]: Tree::rebalance
//!
//! # Examples
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.add(1);
//! tree.add(2);
//! assert!(tree.contains(&1));
//!
//! // Removing an item returns it.
//! assert_eq!(tree.remove(&2), Ok(2));
//! assert!(!tree.contains(&2));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::error::Error;

/// A node owns its payload and up to two children. There are no parent
/// links - the tree is a tree, not a graph, by construction.
#[derive(Debug)]
struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }
}

/// A linked Binary Search Tree storing payloads of a totally ordered type.
///
/// Equal payloads are allowed and route to the right on insertion; [`find`]
/// and [`remove`] treat equality as a unique match and act on the topmost
/// equal node.
///
/// [`find`]: Tree::find
/// [`remove`]: Tree::remove
#[derive(Debug)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Tree {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of payloads stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree holds no payloads.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Adds an item to the tree. This always succeeds; an item equal to one
    /// already present is attached in the right subtree of its equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(2);
    /// tree.add(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if item < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(item)));
        self.size += 1;
    }

    /// Potentially finds an item in the tree equal to the given one by an
    /// iterative descent from the root. Takes `O(height)` comparisons, so
    /// `O(lg N)` in a balanced tree and `O(N)` in a degenerate one.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match item.cmp(&node.value) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        None
    }

    /// Returns `true` if an item equal to the given one is in the tree.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Removes the topmost node equal to the given item and returns its
    /// payload.
    ///
    /// A node with two children is not unlinked directly: its payload is
    /// overwritten with the maximum payload of its left subtree and that
    /// maximum node (which has no right child by definition) is spliced out
    /// instead. A node with at most one child is replaced by that child.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotFound`] if no equal item is present. The tree
    /// is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::error::Error;
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.remove(&1), Err(Error::NotFound));
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, Error>
    where
        T: Ord,
    {
        match Self::remove_node(&mut self.root, item) {
            Some(value) => {
                self.size -= 1;
                Ok(value)
            }
            None => Err(Error::NotFound),
        }
    }

    /// Removes the node equal to `item` from the subtree hanging off `link`.
    /// Operating on links rather than nodes means the root link is handled by
    /// the same code path as any other link.
    fn remove_node(link: &mut Option<Box<Node<T>>>, item: &T) -> Option<T>
    where
        T: Ord,
    {
        match link {
            None => None,
            Some(node) => match item.cmp(&node.value) {
                Ordering::Less => Self::remove_node(&mut node.left, item),
                Ordering::Greater => Self::remove_node(&mut node.right, item),
                Ordering::Equal => match (node.left.take(), node.right.take()) {
                    (None, None) => link.take().map(|leaf| leaf.value),
                    (Some(child), None) | (None, Some(child)) => {
                        let old = mem::replace(node, child);
                        Some(old.value)
                    }
                    (Some(left), Some(right)) => {
                        let (max, rest) = Self::pop_max(left);
                        node.left = rest;
                        node.right = Some(right);
                        Some(mem::replace(&mut node.value, max))
                    }
                },
            },
        }
    }

    /// Detaches the largest node of a subtree, returning its payload and
    /// whatever remains of the subtree. The largest node has no right child,
    /// so its own left child takes its place.
    fn pop_max(mut node: Box<Node<T>>) -> (T, Option<Box<Node<T>>>) {
        match node.right.take() {
            Some(right) => {
                let (max, rest) = Self::pop_max(right);
                node.right = rest;
                (max, Some(node))
            }
            None => {
                let Node { value, left, .. } = *node;
                (value, left)
            }
        }
    }

    /// If an item equal to the given one is in the tree, swaps `new_item` in
    /// and returns the previous payload. Returns `None` otherwise.
    ///
    /// The tree is not re-sorted: the caller must ensure `new_item` sorts the
    /// same way as the item it replaces, or the ordering invariant is broken
    /// and later lookups will miss.
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            match item.cmp(&node.value) {
                Ordering::Equal => return Some(mem::replace(&mut node.value, new_item)),
                Ordering::Less => cur = node.left.as_deref_mut(),
                Ordering::Greater => cur = node.right.as_deref_mut(),
            }
        }
        None
    }

    /// Makes the tree empty, dropping every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Returns the payloads in ascending order. The sequence is recomputed on
    /// every call, never cached.
    pub fn inorder(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.size);
        Self::push_inorder(&self.root, &mut items);
        items
    }

    fn push_inorder<'a>(link: &'a Option<Box<Node<T>>>, items: &mut Vec<&'a T>) {
        if let Some(node) = link {
            Self::push_inorder(&node.left, items);
            items.push(&node.value);
            Self::push_inorder(&node.right, items);
        }
    }

    /// A postorder traversal is part of the traversal contract but is not
    /// implemented; no sequence is produced.
    pub fn postorder(&self) -> Option<Vec<&T>> {
        None
    }

    /// A level-order traversal is part of the traversal contract but is not
    /// implemented; no sequence is produced.
    pub fn levelorder(&self) -> Option<Vec<&T>> {
        None
    }

    /// Returns an iterator over the payloads in preorder: each node before
    /// either of its subtrees, left subtree before right. This is also the
    /// order used by `&Tree`'s `IntoIterator`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Returns the height of the tree: the number of links on the longest
    /// path from the root down to a leaf. An empty tree has height `-1` and a
    /// single-node tree has height `0`.
    pub fn height(&self) -> isize {
        Self::subtree_height(&self.root) as isize - 1
    }

    fn subtree_height(link: &Option<Box<Node<T>>>) -> usize {
        match link {
            None => 0,
            Some(node) => {
                1 + Self::subtree_height(&node.left).max(Self::subtree_height(&node.right))
            }
        }
    }

    /// Returns `true` if the tree's height stays under `2 * lg(size + 1) - 1`.
    ///
    /// This is a deliberately loose criterion - it accepts any shape whose
    /// search cost is within a factor of two of optimal rather than demanding
    /// AVL-style near-perfection. Note that an empty tree does not satisfy
    /// the inequality (`-1 < -1` fails) and reports `false`.
    pub fn is_balanced(&self) -> bool {
        (self.height() as f64) < 2.0 * ((self.size + 1) as f64).log2() - 1.0
    }

    /// Rebuilds the tree into a height-minimal shape for its current
    /// payloads: `ceil(lg(size + 1)) - 1` levels.
    ///
    /// The payloads are extracted in ascending order, the tree is cleared,
    /// and the sorted sequence is re-added middle-first: the lower-middle
    /// element of each slice becomes the subtree root for that slice's range,
    /// then the right and left remainders are re-added the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// // Ascending insertion degenerates into a chain.
    /// let mut tree: Tree<i32> = (1..=7).collect();
    /// assert_eq!(tree.height(), 6);
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let mut items = Vec::with_capacity(self.size);
        Self::drain_inorder(self.root.take(), &mut items);
        self.size = 0;
        self.add_middles(&mut items);
    }

    fn drain_inorder(link: Option<Box<Node<T>>>, items: &mut Vec<Option<T>>) {
        if let Some(node) = link {
            let Node { value, left, right } = *node;
            Self::drain_inorder(left, items);
            items.push(Some(value));
            Self::drain_inorder(right, items);
        }
    }

    /// Re-adds a sorted slice of payloads lower-middle first, then the
    /// remainder right of the middle, then the remainder left of it. Because
    /// `add` always descends to an empty link, the disjoint sub-slices can be
    /// re-added in either order without changing the final shape.
    fn add_middles(&mut self, items: &mut [Option<T>])
    where
        T: Ord,
    {
        if items.is_empty() {
            return;
        }
        let middle = items.len() / 2;
        if let Some(item) = items[middle].take() {
            self.add(item);
        }
        let (left, right) = items.split_at_mut(middle);
        self.add_middles(&mut right[1..]);
        self.add_middles(left);
    }

    /// Returns the smallest payload strictly greater than the given item, or
    /// `None` if there is no such payload. The item itself need not be in the
    /// tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<i32> = vec![10, 20, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&25), Some(&30));
    /// assert_eq!(tree.successor(&30), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.inorder().into_iter().find(|&e| e > item)
    }

    /// Returns the largest payload strictly less than the given item, or
    /// `None` if there is no such payload. The item itself need not be in the
    /// tree.
    pub fn predecessor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut last_below = None;
        for e in self.inorder() {
            if e < item {
                last_below = Some(e);
            } else {
                break;
            }
        }
        last_below
    }

    /// Returns every payload `e` with `low <= e && e <= high`, both bounds
    /// inclusive, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<i32> = (1..=10).collect();
    ///
    /// assert_eq!(tree.range_find(&3, &7), vec![&3, &4, &5, &6, &7]);
    /// assert!(tree.range_find(&11, &20).is_empty());
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T>
    where
        T: Ord,
    {
        self.inorder()
            .into_iter()
            .filter(|&e| low <= e && e <= high)
            .collect()
    }
}

/// Renders the tree rotated 90 degrees counterclockwise: the right subtree
/// comes first, each level indents by one more `"| "` marker, then the node's
/// own payload, then the left subtree. Reading the output with your head
/// tilted left gives the conventional root-at-the-top picture.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_rotated(&self.root, 0, f)
    }
}

impl<T: fmt::Display> Tree<T> {
    fn fmt_rotated(
        link: &Option<Box<Node<T>>>,
        level: usize,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if let Some(node) = link {
            Self::fmt_rotated(&node.right, level + 1, f)?;
            writeln!(f, "{}{}", "| ".repeat(level), node.value)?;
            Self::fmt_rotated(&node.left, level + 1, f)?;
        }
        Ok(())
    }
}

/// An iterator yielding a tree's payloads in preorder, driven by an explicit
/// stack of nodes still to visit.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push right before left so the left subtree is visited first.
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}
