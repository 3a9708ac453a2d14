// src/tables/lookup.rs
// Read side of the tables: the access pattern a name-generator runtime uses.
//   rank  = category_index[c]          (< 0 => literal character)
//   start, count = directory[2*rank], directory[2*rank + 1]
//   frag  = pool[offsets[start + i] ..] up to the terminator

use anyhow::{Result, bail, ensure};
use rand::Rng;

use super::{ASCII_SIZE, MAX_TABLE_VALUE, POOL_TERMINATOR, SENTINEL, Tables};

/// One directory pair: the fragment range of a category in the offset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry {
    pub start: usize,
    pub count: usize,
}

impl Tables {
    pub fn category_count(&self) -> usize {
        self.directory.len() / 2
    }

    pub fn fragment_count(&self) -> usize {
        self.offsets.len()
    }

    /// Rank of the category tagged `c`, or `None` if `c` is a literal.
    #[inline]
    pub fn rank_of(&self, c: char) -> Option<usize> {
        let code = c as usize;
        if code >= ASCII_SIZE {
            return None;
        }
        let rank = self.category_index[code];
        (rank != SENTINEL).then_some(rank as usize)
    }

    #[inline]
    pub fn entry(&self, rank: usize) -> Option<DirEntry> {
        let start = *self.directory.get(2 * rank)? as usize;
        let count = *self.directory.get(2 * rank + 1)? as usize;
        Some(DirEntry { start, count })
    }

    /// Fragment starting at pool byte `offset`.
    pub fn fragment_at(&self, offset: usize) -> Option<&str> {
        let rest = self.pool.get(offset..)?;
        let len = rest.iter().position(|&b| b == POOL_TERMINATOR)?;
        std::str::from_utf8(&rest[..len]).ok()
    }

    /// Fragment `i` of the category at `rank`.
    pub fn fragment(&self, rank: usize, i: usize) -> Option<&str> {
        let DirEntry { start, count } = self.entry(rank)?;
        if i >= count {
            return None;
        }
        let offset = *self.offsets.get(start + i)? as usize;
        self.fragment_at(offset)
    }

    pub fn fragments(&self, rank: usize) -> impl Iterator<Item = &str> + '_ {
        let count = self.entry(rank).map_or(0, |e| e.count);
        (0..count).filter_map(move |i| self.fragment(rank, i))
    }

    /// Tags in rank order, recovered from the category index.
    pub fn tags(&self) -> Vec<char> {
        let mut tags = vec!['\0'; self.category_count()];
        for (code, &rank) in self.category_index.iter().enumerate() {
            if rank != SENTINEL {
                if let Some(slot) = tags.get_mut(rank as usize) {
                    *slot = code as u8 as char;
                }
            }
        }
        tags
    }

    /// Draws one fragment of category `c` uniformly at random.
    ///
    /// Returns `None` when `c` is not a category tag; the caller then emits `c`
    /// literally.
    pub fn pick<R: Rng>(&self, c: char, rng: &mut R) -> Option<&str> {
        let rank = self.rank_of(c)?;
        let DirEntry { count, .. } = self.entry(rank)?;
        if count == 0 {
            return None;
        }
        self.fragment(rank, rng.random_range(0..count))
    }

    /// Checks every structural invariant. Loaders call this before handing
    /// deserialized tables to anyone.
    pub fn verify(&self) -> Result<()> {
        // Same width limits the compiler enforces as `PoolOverflow`.
        ensure!(
            self.pool.len() <= MAX_TABLE_VALUE,
            "pool of {} bytes exceeds the maximum of {MAX_TABLE_VALUE}",
            self.pool.len()
        );
        ensure!(
            self.offsets.len() <= MAX_TABLE_VALUE,
            "{} fragments exceed the maximum of {MAX_TABLE_VALUE}",
            self.offsets.len()
        );
        ensure!(
            self.directory.len() % 2 == 0,
            "directory has odd length {}",
            self.directory.len()
        );

        // Directory: contiguous ranges covering the whole offset table.
        let mut next = 0usize;
        for rank in 0..self.category_count() {
            let Some(DirEntry { start, count }) = self.entry(rank) else {
                bail!("missing directory entry for rank {rank}");
            };
            ensure!(
                start == next,
                "rank {rank}: start {start} != expected {next}"
            );
            ensure!(count > 0, "rank {rank}: empty category");
            next += count;
        }
        ensure!(
            next == self.offsets.len(),
            "directory covers {next} fragments but offset table has {}",
            self.offsets.len()
        );

        // Offsets: each fragment begins right after the previous terminator.
        let mut cursor = 0usize;
        for (i, &off) in self.offsets.iter().enumerate() {
            ensure!(
                off as usize == cursor,
                "fragment {i}: offset {off} != expected {cursor}"
            );
            let Some(frag) = self.fragment_at(cursor) else {
                bail!("fragment {i} at {cursor} is unterminated or not UTF-8");
            };
            ensure!(!frag.is_empty(), "fragment {i} is empty");
            cursor += frag.len() + 1;
        }
        ensure!(
            cursor == self.pool.len(),
            "pool has {} trailing bytes",
            self.pool.len().saturating_sub(cursor)
        );

        // Index: every rank claimed exactly once.
        let mut claimed = vec![false; self.category_count()];
        for (code, &rank) in self.category_index.iter().enumerate() {
            if rank == SENTINEL {
                continue;
            }
            ensure!(rank >= 0, "index[{code}] holds negative rank {rank}");
            let Some(seen) = claimed.get_mut(rank as usize) else {
                bail!("index[{code}] holds out-of-range rank {rank}");
            };
            ensure!(!*seen, "rank {rank} claimed by more than one tag");
            *seen = true;
        }
        ensure!(
            claimed.iter().all(|&c| c),
            "some ranks have no tag in the category index"
        );

        // Ranks follow tag order.
        let tags = self.tags();
        ensure!(
            tags.windows(2).all(|w| w[0] < w[1]),
            "ranks are not in ascending tag order"
        );
        Ok(())
    }
}
