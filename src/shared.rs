//! Thread-safe wrapper around [`ProverbIndex`].
//!
//! One readers-writer lock guards the whole database: inserts take it
//! exclusively, queries share it. Queries return owned data so nothing
//! borrowed from the tree outlives the guard.

use parking_lot::RwLock;

use crate::db::ProverbIndex;
use crate::proverb::Proverb;
use crate::tree::Entry;
use crate::words::Domain;

/// An owned copy of a stored saying and its proverb.
pub type OwnedEntry = (String, Proverb);

fn owned_entry(entry: Entry<'_, Proverb>) -> OwnedEntry {
    (entry.key.to_owned(), entry.value.clone())
}

#[derive(Default)]
pub struct SharedIndex {
    inner: RwLock<ProverbIndex>,
}

impl SharedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, saying: &str, proverb: Proverb) -> bool {
        self.inner.write().insert(saying, proverb)
    }

    pub fn member(&self, saying: &str) -> bool {
        self.inner.read().member(saying)
    }

    pub fn get(&self, saying: &str) -> Option<Proverb> {
        self.inner.read().get(saying).cloned()
    }

    pub fn first(&self) -> Option<OwnedEntry> {
        self.inner.read().first().map(owned_entry)
    }

    pub fn last(&self) -> Option<OwnedEntry> {
        self.inner.read().last().map(owned_entry)
    }

    pub fn predecessor(&self, saying: &str) -> Option<OwnedEntry> {
        self.inner.read().predecessor(saying).map(owned_entry)
    }

    pub fn successor(&self, saying: &str) -> Option<OwnedEntry> {
        self.inner.read().successor(saying).map(owned_entry)
    }

    pub fn words_containing(&self, token: &str, domain: Domain) -> Vec<String> {
        self.inner.read().words_containing(token, domain).to_vec()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs `f` under the read lock for queries that need several calls to
    /// see one consistent snapshot.
    pub fn with_read<R>(&self, f: impl FnOnce(&ProverbIndex) -> R) -> R {
        f(&self.inner.read())
    }

    pub fn into_inner(self) -> ProverbIndex {
        self.inner.into_inner()
    }
}

impl From<ProverbIndex> for SharedIndex {
    fn from(db: ProverbIndex) -> Self {
        Self {
            inner: RwLock::new(db),
        }
    }
}
