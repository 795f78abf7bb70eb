//! Ordered word index backed by a red-black tree.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Slot
//! [`NIL`] holds the black sentinel that stands in for every missing child
//! and for the parent of the root. The sentinel is never written to.
//!
//! The tree is a multiset: inserting an equal value again descends to the
//! right and creates a second node.
//!
//! # Examples
//!
//! ```
//! use wordcheck::spelling::index::{Color, OrderedWordIndex};
//!
//! let mut index = OrderedWordIndex::new();
//! for word in ["pear", "apple", "fig", "apple"] {
//!     index.insert(word);
//! }
//!
//! let words: Vec<&str> = index.walk().map(|(word, _)| word).collect();
//! assert_eq!(words, vec!["apple", "apple", "fig", "pear"]);
//!
//! index.delete("fig").unwrap();
//! assert!(!index.contains("fig"));
//! assert!(index.delete("fig").is_err());
//! assert_eq!(index.color(index.root()), Color::Black);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordcheckError};

/// Handle of a node in an [`OrderedWordIndex`].
pub type NodeId = usize;

/// Handle of the sentinel node.
pub const NIL: NodeId = 0;

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "RED"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    value: String,
    color: Color,
    left: NodeId,
    right: NodeId,
    parent: NodeId,
}

impl Node {
    fn sentinel() -> Self {
        Node {
            value: String::new(),
            color: Color::Black,
            left: NIL,
            right: NIL,
            parent: NIL,
        }
    }
}

/// A red-black tree of words ordered lexicographically.
#[derive(Debug, Clone)]
pub struct OrderedWordIndex {
    nodes: Vec<Node>,
    /// Released slots available for reuse
    free: Vec<NodeId>,
    root: NodeId,
    len: usize,
}

impl OrderedWordIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        OrderedWordIndex {
            nodes: vec![Node::sentinel()],
            free: Vec::new(),
            root: NIL,
            len: 0,
        }
    }

    /// Number of stored values, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    /// Root node, or [`NIL`] when empty.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Value stored at `node`. The sentinel has no value.
    pub fn value(&self, node: NodeId) -> Option<&str> {
        if node == NIL {
            None
        } else {
            Some(&self.nodes[node].value)
        }
    }

    /// Color of `node`; the sentinel is black.
    pub fn color(&self, node: NodeId) -> Color {
        self.nodes[node].color
    }

    /// Left child of `node`.
    pub fn left(&self, node: NodeId) -> NodeId {
        self.nodes[node].left
    }

    /// Right child of `node`.
    pub fn right(&self, node: NodeId) -> NodeId {
        self.nodes[node].right
    }

    /// Parent of `node`; [`NIL`] for the root.
    pub fn parent(&self, node: NodeId) -> NodeId {
        self.nodes[node].parent
    }

    /// Insert a word and return its node. Empty words are not stored.
    pub fn insert(&mut self, word: &str) -> Option<NodeId> {
        if word.is_empty() {
            return None;
        }

        let mut parent = NIL;
        let mut cursor = self.root;
        while cursor != NIL {
            parent = cursor;
            cursor = if word < self.nodes[cursor].value.as_str() {
                self.left(cursor)
            } else {
                self.right(cursor)
            };
        }

        let node = self.allocate(Node {
            value: word.to_string(),
            color: Color::Red,
            left: NIL,
            right: NIL,
            parent,
        });

        if parent == NIL {
            self.root = node;
        } else if word < self.nodes[parent].value.as_str() {
            self.nodes[parent].left = node;
        } else {
            self.nodes[parent].right = node;
        }
        self.len += 1;

        self.insert_fixup(node);
        Some(node)
    }

    /// Restore the red-black properties after attaching the red leaf `node`.
    fn insert_fixup(&mut self, mut node: NodeId) {
        while self.color(self.parent(node)) == Color::Red {
            let parent = self.parent(node);
            // A red parent is never the root, so the grandparent is real.
            let grandparent = self.parent(parent);

            if parent == self.left(grandparent) {
                let uncle = self.right(grandparent);
                if self.color(uncle) == Color::Red {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    node = grandparent;
                } else {
                    if node == self.right(parent) {
                        node = parent;
                        self.left_rotate(node);
                    }
                    let parent = self.parent(node);
                    let grandparent = self.parent(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.right_rotate(grandparent);
                }
            } else {
                let uncle = self.left(grandparent);
                if self.color(uncle) == Color::Red {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    node = grandparent;
                } else {
                    if node == self.left(parent) {
                        node = parent;
                        self.right_rotate(node);
                    }
                    let parent = self.parent(node);
                    let grandparent = self.parent(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.left_rotate(grandparent);
                }
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Find a node holding exactly `word`, or [`NIL`].
    pub fn search(&self, word: &str) -> NodeId {
        let mut cursor = self.root;
        while cursor != NIL {
            let value = self.nodes[cursor].value.as_str();
            if word == value {
                return cursor;
            }
            cursor = if word < value {
                self.left(cursor)
            } else {
                self.right(cursor)
            };
        }
        NIL
    }

    /// Check if the index holds `word`.
    pub fn contains(&self, word: &str) -> bool {
        self.search(word) != NIL
    }

    /// Leftmost node of the subtree rooted at `node`.
    pub fn minimum(&self, mut node: NodeId) -> NodeId {
        if node == NIL {
            return NIL;
        }
        while self.left(node) != NIL {
            node = self.left(node);
        }
        node
    }

    /// In-order successor of `node`, or [`NIL`] for the last node.
    pub fn successor(&self, mut node: NodeId) -> NodeId {
        if node == NIL {
            return NIL;
        }
        if self.right(node) != NIL {
            return self.minimum(self.right(node));
        }
        let mut parent = self.parent(node);
        while parent != NIL && node == self.right(parent) {
            node = parent;
            parent = self.parent(parent);
        }
        parent
    }

    /// Remove one occurrence of `word` and return the removed value.
    ///
    /// Fails with [`WordcheckError::WordNotPresent`] if no node holds `word`;
    /// the tree is left untouched in that case.
    pub fn delete(&mut self, word: &str) -> Result<String> {
        let target = self.search(word);
        if target == NIL {
            return Err(WordcheckError::not_present(word));
        }
        Ok(self.delete_node(target))
    }

    fn delete_node(&mut self, target: NodeId) -> String {
        // The node physically unlinked: the target itself when it has at most
        // one child, otherwise its successor, whose value moves onto the target.
        let spliced = if self.left(target) == NIL || self.right(target) == NIL {
            target
        } else {
            self.minimum(self.right(target))
        };

        let child = if self.left(spliced) != NIL {
            self.left(spliced)
        } else {
            self.right(spliced)
        };
        // Tracked separately so the sentinel never receives a parent link.
        let child_parent = self.parent(spliced);

        if child != NIL {
            self.nodes[child].parent = child_parent;
        }
        if child_parent == NIL {
            self.root = child;
        } else if spliced == self.left(child_parent) {
            self.nodes[child_parent].left = child;
        } else {
            self.nodes[child_parent].right = child;
        }

        let spliced_color = self.color(spliced);
        let spliced_value = self.release(spliced);
        let removed = if spliced != target {
            std::mem::replace(&mut self.nodes[target].value, spliced_value)
        } else {
            spliced_value
        };
        self.len -= 1;

        if spliced_color == Color::Black {
            self.delete_fixup(child, child_parent);
        }
        removed
    }

    /// Repay the black-height deficit left at `node`, whose parent is `parent`.
    fn delete_fixup(&mut self, mut node: NodeId, mut parent: NodeId) {
        while node != self.root && self.color(node) == Color::Black {
            if node == self.left(parent) {
                let mut sibling = self.right(parent);
                if self.color(sibling) == Color::Red {
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.left_rotate(parent);
                    sibling = self.right(parent);
                }

                if self.color(self.left(sibling)) == Color::Black
                    && self.color(self.right(sibling)) == Color::Black
                {
                    self.set_color(sibling, Color::Red);
                    node = parent;
                    parent = self.parent(node);
                } else {
                    if self.color(self.right(sibling)) == Color::Black {
                        let near = self.left(sibling);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.right_rotate(sibling);
                        sibling = self.right(parent);
                    }
                    let far = self.right(sibling);
                    self.set_color(sibling, self.color(parent));
                    self.set_color(parent, Color::Black);
                    self.set_color(far, Color::Black);
                    self.left_rotate(parent);
                    node = self.root;
                    parent = NIL;
                }
            } else {
                let mut sibling = self.left(parent);
                if self.color(sibling) == Color::Red {
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.right_rotate(parent);
                    sibling = self.left(parent);
                }

                if self.color(self.left(sibling)) == Color::Black
                    && self.color(self.right(sibling)) == Color::Black
                {
                    self.set_color(sibling, Color::Red);
                    node = parent;
                    parent = self.parent(node);
                } else {
                    if self.color(self.left(sibling)) == Color::Black {
                        let near = self.right(sibling);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.left_rotate(sibling);
                        sibling = self.left(parent);
                    }
                    let far = self.left(sibling);
                    self.set_color(sibling, self.color(parent));
                    self.set_color(parent, Color::Black);
                    self.set_color(far, Color::Black);
                    self.right_rotate(parent);
                    node = self.root;
                    parent = NIL;
                }
            }
        }

        if node != NIL {
            self.set_color(node, Color::Black);
        }
    }

    /// Rotate left around `pivot`; its right child takes its place.
    fn left_rotate(&mut self, pivot: NodeId) {
        let child = self.right(pivot);
        debug_assert!(pivot != NIL && child != NIL, "left rotation needs a right child");

        let inner = self.left(child);
        self.nodes[pivot].right = inner;
        if inner != NIL {
            self.nodes[inner].parent = pivot;
        }

        let parent = self.parent(pivot);
        self.nodes[child].parent = parent;
        if parent == NIL {
            self.root = child;
        } else if pivot == self.left(parent) {
            self.nodes[parent].left = child;
        } else {
            self.nodes[parent].right = child;
        }

        self.nodes[child].left = pivot;
        self.nodes[pivot].parent = child;
    }

    /// Rotate right around `pivot`; its left child takes its place.
    fn right_rotate(&mut self, pivot: NodeId) {
        let child = self.left(pivot);
        debug_assert!(pivot != NIL && child != NIL, "right rotation needs a left child");

        let inner = self.right(child);
        self.nodes[pivot].left = inner;
        if inner != NIL {
            self.nodes[inner].parent = pivot;
        }

        let parent = self.parent(pivot);
        self.nodes[child].parent = parent;
        if parent == NIL {
            self.root = child;
        } else if pivot == self.right(parent) {
            self.nodes[parent].right = child;
        } else {
            self.nodes[parent].left = child;
        }

        self.nodes[child].right = pivot;
        self.nodes[pivot].parent = child;
    }

    fn set_color(&mut self, node: NodeId, color: Color) {
        debug_assert_ne!(node, NIL, "the sentinel is immutable");
        if node != NIL {
            self.nodes[node].color = color;
        }
    }

    fn allocate(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Return the slot of an unlinked node to the free list, yielding its value.
    fn release(&mut self, node: NodeId) -> String {
        let slot = &mut self.nodes[node];
        slot.left = NIL;
        slot.right = NIL;
        slot.parent = NIL;
        slot.color = Color::Black;
        self.free.push(node);
        std::mem::take(&mut slot.value)
    }

    /// In-order walk over the whole index.
    pub fn walk(&self) -> InorderWalk<'_> {
        self.walk_from(self.root)
    }

    /// In-order walk over the subtree rooted at `node`.
    pub fn walk_from(&self, node: NodeId) -> InorderWalk<'_> {
        let mut walk = InorderWalk {
            index: self,
            stack: Vec::new(),
        };
        walk.push_left_spine(node);
        walk
    }

    /// Check every red-black and ordering invariant, returning the black-height.
    pub fn validate(&self) -> Result<usize> {
        let sentinel = &self.nodes[NIL];
        if sentinel.color != Color::Black || sentinel.left != NIL || sentinel.right != NIL {
            return Err(WordcheckError::invariant("sentinel was modified"));
        }
        if self.color(self.root) != Color::Black {
            return Err(WordcheckError::invariant("root is red"));
        }
        if self.root != NIL && self.parent(self.root) != NIL {
            return Err(WordcheckError::invariant("root has a parent"));
        }

        let (black_height, count) = self.validate_subtree(self.root)?;
        if count != self.len {
            return Err(WordcheckError::invariant(format!(
                "index reports {} values but holds {count}",
                self.len
            )));
        }

        let mut previous: Option<&str> = None;
        for (value, _) in self.walk() {
            if let Some(previous) = previous
                && previous > value
            {
                return Err(WordcheckError::invariant(format!(
                    "{previous:?} walks before {value:?}"
                )));
            }
            previous = Some(value);
        }

        Ok(black_height)
    }

    /// Returns (black-height, node count) of the subtree at `node`.
    fn validate_subtree(&self, node: NodeId) -> Result<(usize, usize)> {
        if node == NIL {
            return Ok((0, 0));
        }

        let left = self.left(node);
        let right = self.right(node);
        for child in [left, right] {
            if child == NIL {
                continue;
            }
            if self.parent(child) != node {
                return Err(WordcheckError::invariant(format!(
                    "broken parent link below {:?}",
                    self.nodes[node].value
                )));
            }
            if self.color(node) == Color::Red && self.color(child) == Color::Red {
                return Err(WordcheckError::invariant(format!(
                    "red node {:?} has a red child",
                    self.nodes[node].value
                )));
            }
        }

        let (left_height, left_count) = self.validate_subtree(left)?;
        let (right_height, right_count) = self.validate_subtree(right)?;
        if left_height != right_height {
            return Err(WordcheckError::invariant(format!(
                "unequal black-height under {:?}: {left_height} vs {right_height}",
                self.nodes[node].value
            )));
        }

        let own = usize::from(self.color(node) == Color::Black);
        Ok((left_height + own, left_count + right_count + 1))
    }
}

impl Default for OrderedWordIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `(value, color)` pairs in ascending order.
///
/// Borrows the index, so it cannot be suspended across mutations; start a new
/// walk after changing the tree.
pub struct InorderWalk<'a> {
    index: &'a OrderedWordIndex,
    stack: Vec<NodeId>,
}

impl InorderWalk<'_> {
    fn push_left_spine(&mut self, mut node: NodeId) {
        while node != NIL {
            self.stack.push(node);
            node = self.index.left(node);
        }
    }
}

impl<'a> Iterator for InorderWalk<'a> {
    type Item = (&'a str, Color);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let index = self.index;
        self.push_left_spine(index.right(node));
        let entry = &index.nodes[node];
        Some((entry.value.as_str(), entry.color))
    }
}
