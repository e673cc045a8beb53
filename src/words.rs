//! Inverted word indexes: token -> sayings whose text contains it.

use std::collections::HashMap;

use smallvec::SmallVec;

/// Which text a token was taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Words of the saying itself (the index key).
    Saying,
    /// Words of the payload's translation.
    Translation,
}

/// Most words occur in one or two sayings.
type Postings = SmallVec<[String; 2]>;

#[derive(Clone, Debug, Default)]
pub struct WordLookup {
    sayings: HashMap<String, Postings>,
    translations: HashMap<String, Postings>,
}

impl WordLookup {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, domain: Domain) -> &HashMap<String, Postings> {
        match domain {
            Domain::Saying => &self.sayings,
            Domain::Translation => &self.translations,
        }
    }

    fn table_mut(&mut self, domain: Domain) -> &mut HashMap<String, Postings> {
        match domain {
            Domain::Saying => &mut self.sayings,
            Domain::Translation => &mut self.translations,
        }
    }

    /// Appends `key` to the list of every whitespace-separated token of `text`.
    ///
    /// Tokens are taken verbatim (no case folding or punctuation stripping),
    /// and a token repeated in `text` lists `key` once per occurrence.
    pub fn record(&mut self, domain: Domain, text: &str, key: &str) {
        let table = self.table_mut(domain);
        for word in text.split_whitespace() {
            match table.get_mut(word) {
                Some(postings) => postings.push(key.to_owned()),
                None => {
                    let mut postings = Postings::new();
                    postings.push(key.to_owned());
                    table.insert(word.to_owned(), postings);
                }
            }
        }
    }

    /// Keys recorded under `token`, in insertion order.
    pub fn words_containing(&self, token: &str, domain: Domain) -> &[String] {
        self.table(domain)
            .get(token)
            .map(|postings| postings.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct tokens seen in `domain`.
    pub fn vocabulary_len(&self, domain: Domain) -> usize {
        self.table(domain).len()
    }
}
