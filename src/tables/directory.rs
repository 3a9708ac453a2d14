// src/tables/directory.rs
use super::{MAX_TABLE_VALUE, Offset, error::CompileError};
use crate::grammar::Category;

/// Flat `[start0, count0, start1, count1, ...]`, one pair per rank.
///
/// `start` indexes the offset table; `start_i + count_i == start_{i+1}`.
pub fn build_directory(sorted: &[&Category]) -> Result<Vec<Offset>, CompileError> {
    let mut directory = Vec::with_capacity(sorted.len() * 2);
    let mut next = 0usize;

    for cat in sorted {
        let count = cat.fragments.len();
        if next + count > MAX_TABLE_VALUE {
            return Err(CompileError::PoolOverflow {
                resource: "fragment count",
                needed: next + count,
                max: MAX_TABLE_VALUE,
            });
        }
        directory.push(next as Offset);
        directory.push(count as Offset);
        next += count;
    }

    Ok(directory)
}
