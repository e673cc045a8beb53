//! Ordered index facade: owns an [`AvlTree`] together with its root handle.

use std::fmt;

use crate::tree::{AvlTree, Entry, Iter, Ptr};

/// An ordered map from unique string keys to values.
///
/// Duplicate inserts are rejected and keep the first value.
///
/// ```rust
/// use proverb_index::OrderedIndex;
///
/// let mut index: OrderedIndex<u64> = OrderedIndex::new();
/// index.insert("b", 2);
/// index.insert("a", 1);
/// index.insert("c", 3);
///
/// assert!(index.member("b"));
/// assert_eq!(index.first().map(|e| e.key), Some("a"));
/// assert_eq!(index.successor("a").map(|e| e.key), Some("b"));
/// assert_eq!(index.predecessor("a"), None);
/// ```
#[derive(Clone)]
pub struct OrderedIndex<V> {
    tree: AvlTree<V>,
    root: Ptr,
}

impl<V> OrderedIndex<V> {
    pub fn new() -> Self {
        Self {
            tree: AvlTree::new(),
            root: Ptr::NULL,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: AvlTree::with_capacity(capacity),
            root: Ptr::NULL,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Height of the whole tree; 0 when empty.
    pub fn height(&self) -> u32 {
        self.tree.height(self.root)
    }

    /// Inserts `key` with `value`. Returns `false` (and drops `value`) when
    /// the key is already present.
    pub fn insert(&mut self, key: &str, value: V) -> bool {
        let before = self.tree.len();
        self.root = self.tree.insert(self.root, key, value);
        self.tree.len() > before
    }

    pub fn member(&self, key: &str) -> bool {
        !self.tree.search(self.root, key).is_null()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.tree.get(self.root, key)
    }

    pub fn first(&self) -> Option<Entry<'_, V>> {
        self.tree.entry(self.tree.first(self.root))
    }

    pub fn last(&self) -> Option<Entry<'_, V>> {
        self.tree.entry(self.tree.last(self.root))
    }

    pub fn predecessor(&self, key: &str) -> Option<Entry<'_, V>> {
        self.tree.entry(self.tree.predecessor(self.root, key))
    }

    pub fn successor(&self, key: &str) -> Option<Entry<'_, V>> {
        self.tree.entry(self.tree.successor(self.root, key))
    }

    pub fn iter(&self) -> Iter<'_, V> {
        self.tree.iter(self.root)
    }

    #[cfg(test)]
    pub(crate) fn raw(&self) -> (&AvlTree<V>, Ptr) {
        (&self.tree, self.root)
    }
}

impl<V> Default for OrderedIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for OrderedIndex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|e| (e.key, e.value)))
            .finish()
    }
}

impl<'a, V> IntoIterator for &'a OrderedIndex<V> {
    type Item = Entry<'a, V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
