// src/grammar/mod.rs
pub mod builtin;
pub mod io;

pub use io::{load_grammar_json, load_grammar_json_bytes};

/// One category: a tag character and the fragments a generator may draw for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub tag: char,
    pub fragments: Vec<String>,
}

impl Category {
    pub fn new<S: Into<String>>(tag: char, fragments: impl IntoIterator<Item = S>) -> Self {
        Self {
            tag,
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }
}

/// The authored word list, in authoring order.
///
/// Frozen once constructed: there is no mutating API, and the compiler only
/// ever borrows it. Validation (unique ASCII tags, non-empty categories) is the
/// normalizer's job so that every problem surfaces as a `CompileError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    categories: Vec<Category>,
}

impl Grammar {
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
        }
    }

    /// Convenience constructor from `(tag, fragments)` pairs.
    pub fn from_pairs<S: Into<String>, F: IntoIterator<Item = S>>(
        pairs: impl IntoIterator<Item = (char, F)>,
    ) -> Self {
        Self::new(pairs.into_iter().map(|(tag, f)| Category::new(tag, f)))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn fragment_count(&self) -> usize {
        self.categories.iter().map(|c| c.fragments.len()).sum()
    }
}
