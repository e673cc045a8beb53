//! Proverb database: the ordered index of sayings plus both word lookups.

use std::fmt;

use tracing::debug;

use crate::index::OrderedIndex;
use crate::proverb::{Proverb, ProverbRecord};
use crate::tree::{Entry, Iter};
use crate::words::{Domain, WordLookup};

/// Configuration for a [`ProverbIndex`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of sayings to reserve node space for up front.
    pub initial_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
        }
    }
}

/// Sayings ordered by key, with word lookup over sayings and translations.
///
/// ```rust
/// use proverb_index::{Proverb, ProverbIndex};
///
/// let mut db = ProverbIndex::new();
/// db.insert("ʻAʻa i ka hula", Proverb::new("Dare to dance", "", ""));
/// db.insert("Piliʻuhane", Proverb::new("Spirit bond", "", ""));
///
/// assert_eq!(db.mehua("hula"), ["ʻAʻa i ka hula"]);
/// assert_eq!(db.withword("bond"), ["Piliʻuhane"]);
/// assert_eq!(db.last().map(|e| e.key), Some("ʻAʻa i ka hula"));
/// ```
#[derive(Clone)]
pub struct ProverbIndex {
    index: OrderedIndex<Proverb>,
    words: WordLookup,
}

impl ProverbIndex {
    /// Create a new empty database with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            index: OrderedIndex::with_capacity(config.initial_capacity),
            words: WordLookup::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Insert a saying and index its words.
    ///
    /// Returns `false` when the saying is already present; in that case
    /// neither the stored proverb nor the word lists change.
    pub fn insert(&mut self, saying: &str, proverb: Proverb) -> bool {
        if !self.index.insert(saying, proverb) {
            debug!(saying, "duplicate saying rejected");
            return false;
        }

        self.words.record(Domain::Saying, saying, saying);
        if let Some(stored) = self.index.get(saying) {
            self.words
                .record(Domain::Translation, &stored.translation, saying);
        }
        true
    }

    pub fn insert_record(&mut self, record: ProverbRecord) -> bool {
        self.insert(&record.saying, record.proverb)
    }

    pub fn member(&self, saying: &str) -> bool {
        self.index.member(saying)
    }

    pub fn get(&self, saying: &str) -> Option<&Proverb> {
        self.index.get(saying)
    }

    pub fn first(&self) -> Option<Entry<'_, Proverb>> {
        self.index.first()
    }

    pub fn last(&self) -> Option<Entry<'_, Proverb>> {
        self.index.last()
    }

    pub fn predecessor(&self, saying: &str) -> Option<Entry<'_, Proverb>> {
        self.index.predecessor(saying)
    }

    pub fn successor(&self, saying: &str) -> Option<Entry<'_, Proverb>> {
        self.index.successor(saying)
    }

    /// Sayings containing `token`, in insertion order.
    pub fn words_containing(&self, token: &str, domain: Domain) -> &[String] {
        self.words.words_containing(token, domain)
    }

    /// Sayings whose own text contains the Hawaiian word `word`.
    pub fn mehua(&self, word: &str) -> &[String] {
        self.words_containing(word, Domain::Saying)
    }

    /// Sayings whose translation contains the English word `word`.
    pub fn withword(&self, word: &str) -> &[String] {
        self.words_containing(word, Domain::Translation)
    }

    /// Sayings in ascending order.
    pub fn iter(&self) -> Iter<'_, Proverb> {
        self.index.iter()
    }

    pub fn index(&self) -> &OrderedIndex<Proverb> {
        &self.index
    }
}

impl Default for ProverbIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<ProverbRecord> for ProverbIndex {
    fn extend<I: IntoIterator<Item = ProverbRecord>>(&mut self, records: I) {
        for record in records {
            self.insert_record(record);
        }
    }
}

impl FromIterator<ProverbRecord> for ProverbIndex {
    fn from_iter<I: IntoIterator<Item = ProverbRecord>>(records: I) -> Self {
        let mut db = Self::new();
        db.extend(records);
        db
    }
}

impl fmt::Debug for ProverbIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProverbIndex")
            .field("len", &self.len())
            .field("height", &self.index.height())
            .finish()
    }
}
