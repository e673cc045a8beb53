//! Built-in sample of ʻōlelo noʻeau (Hawaiian proverbs).

use crate::db::ProverbIndex;
use crate::proverb::{Proverb, ProverbRecord};

const SAMPLE: [(&str, &str, &str, &str); 7] = [
    (
        "ʻAʻa i ka hula",
        "Dare to dance",
        "E ʻōlelo ana i ka wiwo ʻole i ka hula ʻana",
        "Encouraging one to be fearless in dancing.",
    ),
    (
        "Huli ka lima i lalo",
        "Turn the hands down",
        "Ke kāhea i ka hana ʻana",
        "A call to action.",
    ),
    (
        "I ka wā ma mua, ka wā ma hope",
        "The future is in the past",
        "E kuhikuhi i ka hoʻokele ʻana mai ka wā ma mua",
        "The past informs the future.",
    ),
    (
        "Piliʻuhane",
        "Spirit bond",
        "Ka pili o nā ʻuhane i loko o ke ʻano kūpilikiʻi",
        "A close, spiritual bond during difficult times.",
    ),
    (
        "Kūlia i ka nuʻu",
        "Strive for the summit",
        "E hoʻoikaika e kū i ka nuʻu",
        "Encouraging someone to always strive for their best.",
    ),
    (
        "He aliʻi ka ʻāina, he kauwā ke kanaka",
        "The land is chief, man is its servant",
        "ʻO ke kanaka ke kauā o ka ʻāina",
        "Reminds people of the importance of respecting the land.",
    ),
    (
        "Ua mau ke ea o ka ʻāina i ka pono",
        "The life of the land is perpetuated in righteousness",
        "Ua mau ke ea o ka ʻāina i ke koʻikoʻi o ka pono",
        "This phrase serves as a reminder of the importance of righteousness.",
    ),
];

/// The sample records in their canonical insertion order.
pub fn records() -> Vec<ProverbRecord> {
    SAMPLE
        .iter()
        .map(|&(saying, translation, haw, eng)| {
            ProverbRecord::new(saying, Proverb::new(translation, haw, eng))
        })
        .collect()
}

/// A fresh database holding the sample records.
pub fn seeded() -> ProverbIndex {
    records().into_iter().collect()
}
