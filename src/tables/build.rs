// src/tables/build.rs
use std::time::Instant;

use super::{
    Tables, directory::build_directory, error::CompileError, index::build_category_index,
    normalize::normalize, pool::build_pool,
};
use crate::grammar::Grammar;

/// Compiles a grammar into its four lookup tables.
///
/// Stages run in order (normalize, pool, directory, index) and each one is a
/// pure function of the sorted category list. The first error aborts the
/// build; no partial tables are returned.
pub fn build_tables(grammar: &Grammar) -> Result<Tables, CompileError> {
    let t0 = Instant::now();

    let sorted = normalize(grammar)?;
    log::debug!(
        "[tables] rank order: {}",
        sorted.iter().map(|c| c.tag).collect::<String>()
    );

    let (pool, offsets) = build_pool(&sorted)?;
    log::debug!(
        "[tables] pool: {} fragments, {} bytes",
        offsets.len(),
        pool.len()
    );

    let directory = build_directory(&sorted)?;
    let category_index = build_category_index(&sorted);

    log::info!(
        "[tables] compiled {} categories / {} fragments / {} pool bytes in {:?}",
        sorted.len(),
        offsets.len(),
        pool.len(),
        t0.elapsed()
    );

    Ok(Tables {
        category_index,
        directory,
        offsets,
        pool,
    })
}
