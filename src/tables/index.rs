// src/tables/index.rs
use super::{ASCII_SIZE, SENTINEL};
use crate::grammar::Category;

/// 128-slot table: `index[c]` is the rank of the category tagged `c`, or
/// `SENTINEL` when `c` passes through literally.
///
/// Expects the normalizer's output (sorted, unique, ASCII tags, at most 128 of
/// them, so every rank fits an `i8`).
pub fn build_category_index(sorted: &[&Category]) -> [i8; ASCII_SIZE] {
    let mut index = [SENTINEL; ASCII_SIZE];
    for (rank, cat) in sorted.iter().enumerate() {
        index[cat.tag as usize] = rank as i8;
    }
    index
}
