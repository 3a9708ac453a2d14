// src/tables/io.rs
use std::{
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use super::{ASCII_SIZE, MAX_TABLE_VALUE, Offset, Tables};

// -------------------- JSON (de)serialization --------------------

#[serde_as]
#[derive(Serialize, Deserialize)]
struct TablesDisk {
    #[serde_as(as = "[_; 128]")]
    category_index: [i8; ASCII_SIZE],
    directory: Vec<Offset>,
    offsets: Vec<Offset>,
    pool: Vec<u8>,
}
impl From<&Tables> for TablesDisk {
    fn from(t: &Tables) -> Self {
        Self {
            category_index: t.category_index,
            directory: t.directory.clone(),
            offsets: t.offsets.clone(),
            pool: t.pool.clone(),
        }
    }
}
impl TablesDisk {
    fn into_tables(self) -> Tables {
        Tables {
            category_index: self.category_index,
            directory: self.directory,
            offsets: self.offsets,
            pool: self.pool,
        }
    }
}

pub fn save_tables_json(path: &Path, t: &Tables) -> std::io::Result<()> {
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer(&mut w, &TablesDisk::from(t))?;
    w.flush()?;
    log::info!("saved JSON tables to {}", path.display());
    Ok(())
}

pub fn load_tables_json_bytes(data: &[u8]) -> Result<Tables> {
    let t = serde_json::from_slice::<TablesDisk>(data)
        .map(TablesDisk::into_tables)
        .context("failed to parse tables JSON")?;
    t.verify().context("tables JSON failed verification")?;
    Ok(t)
}

// -------------------- Compact binary (u16 little-endian) --------------------
//   magic: 8 bytes = "NGTBL001"
//   u32:   n_categories (K)
//   u32:   n_fragments  (N)
//   u32:   pool_len
//   i8:    category_index[128]
//   u16:   directory[2*K]
//   u16:   offsets[N]
//   u8:    pool[pool_len]

const BIN_MAGIC: &[u8; 8] = b"NGTBL001";
const HEADER_LEN: usize = 8 + 4 + 4 + 4;

pub fn encode_tables_bin(t: &Tables) -> Vec<u8> {
    let k = t.category_count();
    let n = t.fragment_count();
    let total = HEADER_LEN + ASCII_SIZE + 2 * k * 2 + n * 2 + t.pool.len();

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(BIN_MAGIC);
    out.extend_from_slice(&(k as u32).to_le_bytes());
    out.extend_from_slice(&(n as u32).to_le_bytes());
    out.extend_from_slice(&(t.pool.len() as u32).to_le_bytes());
    out.extend(t.category_index.iter().map(|&r| r as u8));
    for v in t.directory.iter().chain(t.offsets.iter()) {
        out.extend_from_slice(&v.to_le_bytes());
    }
    out.extend_from_slice(&t.pool);

    debug_assert_eq!(out.len(), total);
    out
}

pub fn save_tables_bin(path: &Path, t: &Tables) -> std::io::Result<()> {
    let bytes = encode_tables_bin(t);
    let mut w = BufWriter::new(std::fs::File::create(path)?);
    w.write_all(&bytes)?;
    w.flush()?;
    log::info!(
        "saved binary tables to {} ({} bytes)",
        path.display(),
        bytes.len()
    );
    Ok(())
}

#[inline]
fn take<'a>(buf: &mut &'a [u8], len: usize, what: &str) -> Result<&'a [u8]> {
    if buf.len() < len {
        bail!("truncated {what}: need {len} bytes, have {}", buf.len());
    }
    let (head, rest) = buf.split_at(len);
    *buf = rest;
    Ok(head)
}

#[inline]
fn take_u32(buf: &mut &[u8], what: &str) -> Result<u32> {
    let mut le = [0u8; 4];
    le.copy_from_slice(take(buf, 4, what)?);
    Ok(u32::from_le_bytes(le))
}

fn take_u16s(buf: &mut &[u8], count: usize, what: &str) -> Result<Vec<Offset>> {
    let bytes = take(buf, count * 2, what)?;
    Ok(bytes
        .chunks_exact(2)
        .map(|p| u16::from_le_bytes([p[0], p[1]]))
        .collect())
}

pub fn load_tables_bin_bytes(mut data: &[u8]) -> Result<Tables> {
    if take(&mut data, BIN_MAGIC.len(), "magic")? != BIN_MAGIC {
        bail!("bad magic in tables .bin");
    }

    let k = take_u32(&mut data, "category count")? as usize;
    let n = take_u32(&mut data, "fragment count")? as usize;
    let pool_len = take_u32(&mut data, "pool length")? as usize;
    if k > ASCII_SIZE || n > MAX_TABLE_VALUE || pool_len > MAX_TABLE_VALUE {
        return Err(anyhow!(
            "header out of range: categories={k} fragments={n} pool={pool_len}"
        ));
    }

    let mut category_index = [0i8; ASCII_SIZE];
    for (slot, &b) in category_index
        .iter_mut()
        .zip(take(&mut data, ASCII_SIZE, "category index")?)
    {
        *slot = b as i8;
    }
    let directory = take_u16s(&mut data, 2 * k, "directory")?;
    let offsets = take_u16s(&mut data, n, "offset table")?;
    let pool = take(&mut data, pool_len, "pool")?.to_vec();
    if !data.is_empty() {
        bail!("{} trailing bytes after pool", data.len());
    }

    let t = Tables {
        category_index,
        directory,
        offsets,
        pool,
    };
    t.verify().context("tables .bin failed verification")?;
    Ok(t)
}
