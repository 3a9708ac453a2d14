// src/grammar/io.rs
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{Category, Grammar};
use crate::tables::CompileError;

// On-disk form: a JSON array so that authoring order and duplicate tags survive
// parsing (an object keyed by tag would silently drop duplicates).
//
//   [ { "tag": "s", "fragments": ["ach", "ack"] }, ... ]
#[derive(Deserialize)]
struct CategoryDisk {
    tag: String,
    fragments: Vec<String>,
}

impl CategoryDisk {
    fn into_category(self) -> Result<Category, CompileError> {
        let mut chars = self.tag.chars();
        match (chars.next(), chars.next()) {
            (Some(tag), None) => Ok(Category {
                tag,
                fragments: self.fragments,
            }),
            _ => Err(CompileError::InvalidTag { tag: self.tag }),
        }
    }
}

pub fn load_grammar_json_bytes(data: &[u8]) -> Result<Grammar> {
    let disk: Vec<CategoryDisk> =
        serde_json::from_slice(data).context("failed to parse grammar JSON")?;
    let categories = disk
        .into_iter()
        .map(CategoryDisk::into_category)
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("loaded grammar with {} categories", categories.len());
    Ok(Grammar::new(categories))
}

pub fn load_grammar_json(path: &Path) -> Result<Grammar> {
    let data = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    load_grammar_json_bytes(&data).with_context(|| format!("grammar {}", path.display()))
}
