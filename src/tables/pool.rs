// src/tables/pool.rs
use super::{MAX_TABLE_VALUE, Offset, POOL_TERMINATOR, error::CompileError};
use crate::grammar::Category;

/// Concatenates every fragment (rank order, then list order) into one
/// NUL-terminated pool and records each fragment's starting byte offset.
///
/// Invariant: `offsets[i + 1] == offsets[i] + len(fragment i) + 1`.
pub fn build_pool(sorted: &[&Category]) -> Result<(Vec<u8>, Vec<Offset>), CompileError> {
    let total_fragments: usize = sorted.iter().map(|c| c.fragments.len()).sum();
    if total_fragments > MAX_TABLE_VALUE {
        return Err(CompileError::PoolOverflow {
            resource: "fragment count",
            needed: total_fragments,
            max: MAX_TABLE_VALUE,
        });
    }

    let mut pool = Vec::new();
    let mut offsets = Vec::with_capacity(total_fragments);
    let mut cursor = 0usize;

    for frag in sorted.iter().flat_map(|c| c.fragments.iter()) {
        let end = cursor + frag.len() + 1;
        if end > MAX_TABLE_VALUE {
            return Err(CompileError::PoolOverflow {
                resource: "fragment pool",
                needed: end,
                max: MAX_TABLE_VALUE,
            });
        }
        // `end` fits, so `cursor` does too.
        offsets.push(cursor as Offset);
        pool.extend_from_slice(frag.as_bytes());
        pool.push(POOL_TERMINATOR);
        cursor = end;
    }

    debug_assert_eq!(pool.len(), cursor);
    Ok((pool, offsets))
}
