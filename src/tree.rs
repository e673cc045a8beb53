//! Height-balanced (AVL) binary search tree over string keys.
//!
//! Nodes live in an arena and are addressed by [`Ptr`] handles, so every node
//! is owned by exactly one slot and linked by exactly one parent handle (or by
//! the caller's root handle). Insertion keeps the functional-update shape:
//! [`AvlTree::insert`] takes a subtree root and returns the root after
//! rebalancing, and the caller stores it.
//!
//! Keys compare with `str::cmp` (byte-wise UTF-8, equal to code-point order).

use std::cmp::Ordering;

use tracing::trace;

// =============================================================================
// Pointer type
// =============================================================================

/// Handle to a node in the arena.
///
/// `Ptr::NULL` denotes the empty subtree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Ptr(u32);

impl Ptr {
    pub const NULL: Ptr = Ptr(u32::MAX);

    #[inline]
    fn from_index(idx: usize) -> Self {
        assert!(idx < u32::MAX as usize, "node arena exhausted");
        Self(idx as u32)
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.0 == Self::NULL.0
    }

    #[inline]
    fn index(self) -> usize {
        debug_assert!(!self.is_null());
        self.0 as usize
    }
}

// =============================================================================
// Nodes and entries
// =============================================================================

#[derive(Clone, Debug)]
struct Node<V> {
    key: String,
    value: V,
    /// Cached subtree height, `1` for a leaf.
    height: u32,
    left: Ptr,
    right: Ptr,
}

/// Read-only view of a stored key and its value.
///
/// Borrowing the tree, an entry cannot outlive the next insert.
#[derive(Debug, PartialEq, Eq)]
pub struct Entry<'a, V> {
    pub key: &'a str,
    pub value: &'a V,
}

impl<V> Clone for Entry<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Entry<'_, V> {}

// =============================================================================
// AvlTree
// =============================================================================

/// Arena of AVL nodes plus the algorithms that operate on a subtree root.
///
/// The tree does not remember its own root; callers thread the handle returned
/// by [`insert`](Self::insert) back into subsequent calls.
#[derive(Clone, Debug)]
pub struct AvlTree<V> {
    nodes: Vec<Node<V>>,
}

impl<V> AvlTree<V> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes ever allocated, which is the number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    fn node(&self, ptr: Ptr) -> &Node<V> {
        &self.nodes[ptr.index()]
    }

    #[inline]
    fn node_mut(&mut self, ptr: Ptr) -> &mut Node<V> {
        &mut self.nodes[ptr.index()]
    }

    #[inline]
    pub(crate) fn key(&self, ptr: Ptr) -> &str {
        &self.node(ptr).key
    }

    #[inline]
    pub(crate) fn left(&self, ptr: Ptr) -> Ptr {
        self.node(ptr).left
    }

    #[inline]
    pub(crate) fn right(&self, ptr: Ptr) -> Ptr {
        self.node(ptr).right
    }

    /// Cached height of the subtree at `ptr`; the empty subtree has height 0.
    #[inline]
    pub fn height(&self, ptr: Ptr) -> u32 {
        if ptr.is_null() {
            0
        } else {
            self.node(ptr).height
        }
    }

    /// `height(left) - height(right)` for the node at `ptr`.
    #[inline]
    pub fn balance(&self, ptr: Ptr) -> i64 {
        if ptr.is_null() {
            return 0;
        }
        let node = self.node(ptr);
        i64::from(self.height(node.left)) - i64::from(self.height(node.right))
    }

    #[inline]
    fn update_height(&mut self, ptr: Ptr) {
        let node = self.node(ptr);
        let height = 1 + self.height(node.left).max(self.height(node.right));
        self.node_mut(ptr).height = height;
    }

    fn alloc(&mut self, key: &str, value: V) -> Ptr {
        let ptr = Ptr::from_index(self.nodes.len());
        self.nodes.push(Node {
            key: key.to_owned(),
            value,
            height: 1,
            left: Ptr::NULL,
            right: Ptr::NULL,
        });
        ptr
    }

    /// Converts a handle into an entry view, `None` for `Ptr::NULL`.
    pub fn entry(&self, ptr: Ptr) -> Option<Entry<'_, V>> {
        if ptr.is_null() {
            return None;
        }
        let node = self.node(ptr);
        Some(Entry {
            key: &node.key,
            value: &node.value,
        })
    }

    // =========================================================================
    // Rotations
    // =========================================================================

    /// Single right rotation at `y`; returns the new subtree root (`y.left`).
    fn rotate_right(&mut self, y: Ptr) -> Ptr {
        let x = self.node(y).left;
        let t2 = self.node(x).right;
        self.node_mut(x).right = y;
        self.node_mut(y).left = t2;
        self.update_height(y);
        self.update_height(x);
        x
    }

    /// Single left rotation at `x`; returns the new subtree root (`x.right`).
    fn rotate_left(&mut self, x: Ptr) -> Ptr {
        let y = self.node(x).right;
        let t2 = self.node(y).left;
        self.node_mut(y).left = x;
        self.node_mut(x).right = t2;
        self.update_height(x);
        self.update_height(y);
        y
    }

    // =========================================================================
    // Insert
    // =========================================================================

    /// Inserts `key` into the subtree at `root` and returns the new subtree
    /// root.
    ///
    /// An existing key is left untouched: `value` is dropped and the stored
    /// payload is kept. Only the first ancestor whose balance falls outside
    /// `-1..=1` is rotated.
    pub fn insert(&mut self, root: Ptr, key: &str, value: V) -> Ptr {
        if root.is_null() {
            return self.alloc(key, value);
        }

        match key.cmp(self.key(root)) {
            Ordering::Less => {
                let left = self.node(root).left;
                let left = self.insert(left, key, value);
                self.node_mut(root).left = left;
            }
            Ordering::Greater => {
                let right = self.node(root).right;
                let right = self.insert(right, key, value);
                self.node_mut(root).right = right;
            }
            Ordering::Equal => return root,
        }

        self.update_height(root);
        self.rebalance(root, key)
    }

    fn rebalance(&mut self, root: Ptr, key: &str) -> Ptr {
        let balance = self.balance(root);

        if balance > 1 {
            let left = self.node(root).left;
            return match key.cmp(self.key(left)) {
                Ordering::Less => {
                    trace!(pivot = self.key(root), "rebalance left-left");
                    self.rotate_right(root)
                }
                Ordering::Greater => {
                    trace!(pivot = self.key(root), "rebalance left-right");
                    let left = self.rotate_left(left);
                    self.node_mut(root).left = left;
                    self.rotate_right(root)
                }
                Ordering::Equal => root,
            };
        }

        if balance < -1 {
            let right = self.node(root).right;
            return match key.cmp(self.key(right)) {
                Ordering::Greater => {
                    trace!(pivot = self.key(root), "rebalance right-right");
                    self.rotate_left(root)
                }
                Ordering::Less => {
                    trace!(pivot = self.key(root), "rebalance right-left");
                    let right = self.rotate_right(right);
                    self.node_mut(root).right = right;
                    self.rotate_left(root)
                }
                Ordering::Equal => root,
            };
        }

        root
    }

    // =========================================================================
    // Lookup and navigation
    // =========================================================================

    /// Returns the node holding `key`, or `Ptr::NULL` when absent.
    pub fn search(&self, root: Ptr, key: &str) -> Ptr {
        let mut current = root;
        while !current.is_null() {
            let node = self.node(current);
            current = match key.cmp(&node.key) {
                Ordering::Equal => return current,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        Ptr::NULL
    }

    pub fn get(&self, root: Ptr, key: &str) -> Option<&V> {
        self.entry(self.search(root, key)).map(|e| e.value)
    }

    /// Leftmost node of the subtree at `root`.
    pub fn first(&self, root: Ptr) -> Ptr {
        let mut current = root;
        if current.is_null() {
            return Ptr::NULL;
        }
        while !self.node(current).left.is_null() {
            current = self.node(current).left;
        }
        current
    }

    /// Rightmost node of the subtree at `root`.
    pub fn last(&self, root: Ptr) -> Ptr {
        let mut current = root;
        if current.is_null() {
            return Ptr::NULL;
        }
        while !self.node(current).right.is_null() {
            current = self.node(current).right;
        }
        current
    }

    /// In-order predecessor of `key`.
    ///
    /// `Ptr::NULL` when `key` is absent or is the minimum.
    pub fn predecessor(&self, root: Ptr, key: &str) -> Ptr {
        let found = self.search(root, key);
        if found.is_null() {
            return Ptr::NULL;
        }

        let left = self.node(found).left;
        if !left.is_null() {
            return self.last(left);
        }

        // Last ancestor where the descent turned right.
        let mut predecessor = Ptr::NULL;
        let mut current = root;
        while !current.is_null() {
            let node = self.node(current);
            match key.cmp(&node.key) {
                Ordering::Greater => {
                    predecessor = current;
                    current = node.right;
                }
                Ordering::Less => current = node.left,
                Ordering::Equal => break,
            }
        }
        predecessor
    }

    /// In-order successor of `key`.
    ///
    /// `Ptr::NULL` when `key` is absent or is the maximum.
    pub fn successor(&self, root: Ptr, key: &str) -> Ptr {
        let found = self.search(root, key);
        if found.is_null() {
            return Ptr::NULL;
        }

        let right = self.node(found).right;
        if !right.is_null() {
            return self.first(right);
        }

        // Last ancestor where the descent turned left.
        let mut successor = Ptr::NULL;
        let mut current = root;
        while !current.is_null() {
            let node = self.node(current);
            match key.cmp(&node.key) {
                Ordering::Less => {
                    successor = current;
                    current = node.left;
                }
                Ordering::Greater => current = node.right,
                Ordering::Equal => break,
            }
        }
        successor
    }

    /// Ascending in-order iteration over the subtree at `root`.
    pub fn iter(&self, root: Ptr) -> Iter<'_, V> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }
}

impl<V> Default for AvlTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, V> {
    tree: &'a AvlTree<V>,
    /// Nodes whose left subtree has been scheduled but which are not yet yielded.
    stack: Vec<Ptr>,
}

impl<V> Iter<'_, V> {
    fn push_left_spine(&mut self, mut ptr: Ptr) {
        while !ptr.is_null() {
            self.stack.push(ptr);
            ptr = self.tree.node(ptr).left;
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = Entry<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.node(ptr);
        self.push_left_spine(node.right);
        Some(Entry {
            key: &node.key,
            value: &node.value,
        })
    }
}
