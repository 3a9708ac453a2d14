// src/tables/normalize.rs
use hashbrown::HashMap;

use super::error::CompileError;
use crate::grammar::{Category, Grammar};

/// Validates the grammar and returns its categories ordered by tag code point.
///
/// A category's position in the returned list is its rank, the only handle the
/// directory and the category index use to find it.
pub fn normalize(grammar: &Grammar) -> Result<Vec<&Category>, CompileError> {
    let mut seen: HashMap<char, usize> = HashMap::with_capacity(grammar.len());

    for (pos, cat) in grammar.categories().iter().enumerate() {
        if !cat.tag.is_ascii() {
            return Err(CompileError::InvalidTag {
                tag: cat.tag.to_string(),
            });
        }
        if cat.fragments.is_empty() {
            return Err(CompileError::EmptyCategory { tag: cat.tag });
        }
        for (index, frag) in cat.fragments.iter().enumerate() {
            let reason = if frag.is_empty() {
                "empty fragment"
            } else if frag.as_bytes().contains(&0) {
                "fragment contains a NUL byte"
            } else {
                continue;
            };
            return Err(CompileError::InvalidFragment {
                tag: cat.tag,
                index,
                reason,
            });
        }
        if let Some(&first) = seen.get(&cat.tag) {
            return Err(CompileError::DuplicateTag {
                tag: cat.tag,
                first,
                second: pos,
            });
        }
        seen.insert(cat.tag, pos);
    }

    let mut sorted: Vec<&Category> = grammar.categories().iter().collect();
    sorted.sort_by_key(|c| c.tag);
    Ok(sorted)
}
