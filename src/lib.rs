//! # proverb-index
//!
//! An ordered index of sayings built on a height-balanced (AVL) binary search
//! tree, paired with inverted word indexes over the sayings and their
//! translations.
//!
//! Lookup, first/last, and predecessor/successor queries all run in
//! `O(log n)`. Keys are unique; inserting an existing key is a no-op that
//! keeps the first payload.
//!
//! ## Example
//!
//! ```rust
//! use proverb_index::{sample, Domain};
//!
//! let db = sample::seeded();
//!
//! assert_eq!(db.first().map(|e| e.key), Some("He aliʻi ka ʻāina, he kauwā ke kanaka"));
//! assert_eq!(db.last().map(|e| e.key), Some("ʻAʻa i ka hula"));
//! assert_eq!(
//!     db.predecessor("Huli ka lima i lalo").map(|e| e.key),
//!     Some("He aliʻi ka ʻāina, he kauwā ke kanaka"),
//! );
//! assert_eq!(db.words_containing("dance", Domain::Translation), ["ʻAʻa i ka hula"]);
//! ```
//!
//! ## Ordering
//!
//! Keys compare byte-wise on their UTF-8 encoding, which is the same as
//! Unicode code-point order. The ʻokina (`ʻ`, U+02BB) therefore sorts after
//! every ASCII letter.

pub mod db;
pub mod index;
pub mod load;
pub mod proverb;
pub mod sample;
pub mod shared;
pub mod tree;
pub mod words;

pub use db::{Config, ProverbIndex};
pub use index::OrderedIndex;
pub use load::{load_json, load_path, LoadError};
pub use proverb::{Proverb, ProverbRecord};
pub use shared::SharedIndex;
pub use tree::{AvlTree, Entry, Ptr};
pub use words::{Domain, WordLookup};

#[cfg(test)]
mod proptests;
