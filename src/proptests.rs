use super::*;

use crate::tree::{AvlTree, Ptr};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// Checks BST order, AVL balance, and cached heights of every reachable node.
/// Returns the computed height.
fn validate_subtree<V>(
    t: &AvlTree<V>,
    ptr: Ptr,
    lower: Option<&str>,
    upper: Option<&str>,
    count: &mut usize,
) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    *count += 1;

    let key = t.key(ptr);
    if let Some(lower) = lower {
        assert!(lower < key, "BST order violated: {lower:?} !< {key:?}");
    }
    if let Some(upper) = upper {
        assert!(key < upper, "BST order violated: {key:?} !< {upper:?}");
    }

    let lh = validate_subtree(t, t.left(ptr), lower, Some(key), count);
    let rh = validate_subtree(t, t.right(ptr), Some(key), upper, count);
    assert!(
        lh.abs_diff(rh) <= 1,
        "unbalanced at {key:?}: left {lh}, right {rh}"
    );

    let height = 1 + lh.max(rh);
    assert_eq!(t.height(ptr), height, "stored height must match children");
    height
}

fn validate_tree<V>(idx: &OrderedIndex<V>) {
    let (t, root) = idx.raw();
    let mut count = 0usize;
    let height = validate_subtree(t, root, None, None, &mut count);
    assert_eq!(count, idx.len(), "reachable node count must match len");
    assert_eq!(height, idx.height());
}

#[derive(Clone, Debug)]
enum Op {
    Insert(String, u64),
    Get(String),
    Predecessor(String),
    Successor(String),
}

fn key_strategy() -> impl Strategy<Value = String> + Clone {
    // A small alphabet, including multi-byte letters, so keys collide often.
    "[abʻāū ]{0,6}"
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        50 => (key.clone(), any::<u64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        20 => key.clone().prop_map(Op::Get),
        15 => key.clone().prop_map(Op::Predecessor),
        15 => key.clone().prop_map(Op::Successor),
    ];
    prop::collection::vec(op, 0..=1000)
}

fn model_predecessor<'a>(m: &'a BTreeMap<String, u64>, key: &str) -> Option<&'a str> {
    if !m.contains_key(key) {
        return None;
    }
    m.range::<str, _>((Unbounded, Excluded(key)))
        .next_back()
        .map(|(k, _)| k.as_str())
}

fn model_successor<'a>(m: &'a BTreeMap<String, u64>, key: &str) -> Option<&'a str> {
    if !m.contains_key(key) {
        return None;
    }
    m.range::<str, _>((Excluded(key), Unbounded))
        .next()
        .map(|(k, _)| k.as_str())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t: OrderedIndex<u64> = OrderedIndex::new();
        let mut m: BTreeMap<String, u64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let fresh = !m.contains_key(&key);
                    m.entry(key.clone()).or_insert(value);
                    prop_assert_eq!(t.insert(&key, value), fresh);
                }
                Op::Get(key) => {
                    prop_assert_eq!(t.get(&key).copied(), m.get(&key).copied());
                    prop_assert_eq!(t.member(&key), m.contains_key(&key));
                }
                Op::Predecessor(key) => {
                    prop_assert_eq!(t.predecessor(&key).map(|e| e.key), model_predecessor(&m, &key));
                }
                Op::Successor(key) => {
                    prop_assert_eq!(t.successor(&key).map(|e| e.key), model_successor(&m, &key));
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        validate_tree(&t);
        let got: Vec<(String, u64)> = t.iter().map(|e| (e.key.to_owned(), *e.value)).collect();
        let expected: Vec<(String, u64)> = m.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(t.first().map(|e| e.key), m.keys().next().map(String::as_str));
        prop_assert_eq!(t.last().map(|e| e.key), m.keys().next_back().map(String::as_str));
    }

    #[test]
    fn prop_balanced_after_every_insert(keys in prop::collection::vec(key_strategy(), 0..=200)) {
        let mut t: OrderedIndex<usize> = OrderedIndex::new();
        for (i, key) in keys.iter().enumerate() {
            t.insert(key, i);
            validate_tree(&t);
        }
    }

    #[test]
    fn prop_neighbor_duality(keys in prop::collection::btree_set("[a-z]{1,8}", 1..=300)) {
        let mut t: OrderedIndex<()> = OrderedIndex::new();
        // Insert in a scrambled order so rotations of every kind occur.
        let mut shuffled: Vec<&String> = keys.iter().collect();
        shuffled.sort_by_key(|k| k.bytes().rev().collect::<Vec<u8>>());
        for key in shuffled {
            t.insert(key, ());
        }

        let sorted: Vec<&String> = keys.iter().collect();
        for pair in sorted.windows(2) {
            prop_assert_eq!(t.successor(pair[0]).map(|e| e.key), Some(pair[1].as_str()));
            prop_assert_eq!(t.predecessor(pair[1]).map(|e| e.key), Some(pair[0].as_str()));
        }

        let first = t.first().map(|e| e.key.to_owned());
        let last = t.last().map(|e| e.key.to_owned());
        prop_assert!(first.is_some() && last.is_some());
        if let (Some(first), Some(last)) = (first, last) {
            prop_assert!(t.predecessor(&first).is_none());
            prop_assert!(t.successor(&last).is_none());
        }
    }

    #[test]
    fn prop_duplicate_insert_is_noop(keys in prop::collection::vec(key_strategy(), 1..=100), pick in any::<prop::sample::Index>()) {
        let mut db = ProverbIndex::new();
        for key in &keys {
            db.insert(key, Proverb::new("first", "", ""));
        }
        let snapshot: Vec<String> = db.iter().map(|e| e.key.to_owned()).collect();
        let height = db.index().height();
        let vocab = db.withword("first").len();

        let key = pick.get(&keys);
        prop_assert!(!db.insert(key, Proverb::new("second", "", "")));

        prop_assert!(db.member(key));
        prop_assert_eq!(db.get(key).map(|p| p.translation.as_str()), Some("first"));
        let after: Vec<String> = db.iter().map(|e| e.key.to_owned()).collect();
        prop_assert_eq!(after, snapshot);
        prop_assert_eq!(db.index().height(), height);
        prop_assert_eq!(db.withword("first").len(), vocab);
        prop_assert!(db.withword("second").is_empty());
    }
}
