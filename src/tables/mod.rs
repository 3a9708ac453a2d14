// src/tables/mod.rs
pub mod build;
pub mod directory;
pub mod emit;
pub mod error;
pub mod index;
pub mod io;
pub mod lookup;
pub mod normalize;
pub mod pool;

pub use build::build_tables;
pub use emit::{CNames, render_c, save_tables_c};
pub use error::CompileError;
pub use io::{
    encode_tables_bin, load_tables_bin_bytes, load_tables_json_bytes, save_tables_bin,
    save_tables_json,
};
pub use lookup::DirEntry;

/// Integer width of pool offsets, directory starts and directory counts.
pub type Offset = u16;

/// Largest pool length / fragment count the `Offset` width can describe.
pub const MAX_TABLE_VALUE: usize = Offset::MAX as usize;

/// Category index slots, one per 7-bit ASCII code point.
pub const ASCII_SIZE: usize = 128;

/// Category index value for "not a category tag".
pub const SENTINEL: i8 = -1;

pub const POOL_TERMINATOR: u8 = 0;

/// Compiled lookup data handed to the name-generator runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    pub category_index: [i8; ASCII_SIZE], // ASCII code -> rank or SENTINEL
    pub directory: Vec<Offset>,           // 2*K: (start, count) per rank
    pub offsets: Vec<Offset>,             // N: pool offset per fragment
    pub pool: Vec<u8>,                    // NUL-terminated fragments
}
