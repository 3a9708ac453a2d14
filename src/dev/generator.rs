// src/dev/generator.rs
// Random-but-valid grammars for property tests. Deterministic for a given RNG
// state so a failing seed can be replayed.

use rand::{Rng, seq::SliceRandom};

use crate::grammar::{Category, Grammar};

/// Printable ASCII, the tag alphabet authors actually use.
const TAG_ALPHABET: std::ops::RangeInclusive<u8> = b'!'..=b'~';

pub fn gen_fragment<R: Rng>(rng: &mut R, max_len: usize) -> String {
    let len = rng.random_range(1..=max_len.max(1));
    (0..len)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}

/// A grammar of `n_categories` distinct tags (clamped to the tag alphabet),
/// listed in shuffled authoring order, each with `1..=max_fragments` fragments.
pub fn gen_valid_grammar<R: Rng>(
    rng: &mut R,
    n_categories: usize,
    max_fragments: usize,
) -> Grammar {
    let mut tags: Vec<char> = TAG_ALPHABET.map(char::from).collect();
    tags.shuffle(rng);
    tags.truncate(n_categories);

    Grammar::new(tags.into_iter().map(|tag| {
        let n = rng.random_range(1..=max_fragments.max(1));
        Category::new(tag, (0..n).map(|_| gen_fragment(rng, 8)))
    }))
}
