// src/tables/emit.rs
// Renders compiled tables as C array initializers for pasting into (or
// including from) a C name-generator runtime.

use std::path::Path;

use super::{POOL_TERMINATOR, SENTINEL, Tables};

/// Array names used in the generated C source.
#[derive(Debug, Clone)]
pub struct CNames {
    pub category_index: String,
    pub offsets: String,
    pub directory: String,
    pub pool: String,
}

impl Default for CNames {
    fn default() -> Self {
        Self {
            category_index: "special".into(),
            offsets: "offsets_table".into(),
            directory: "off_len".into(),
            pool: "namegen_argz".into(),
        }
    }
}

// `width` values per line, each line indented by four spaces. An empty array
// gets a single `0` so the initializer stays valid C.
fn dump<T>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    width: usize,
    fmt: impl Fn(T) -> String,
) {
    let mut empty = true;
    for (i, v) in values.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(if i % width == 0 { "\n    " } else { " " });
        out.push_str(&fmt(v));
        empty = false;
    }
    if empty {
        out.push_str("\n    0");
    }
    out.push_str("\n};\n\n");
}

fn c_char_literal(b: u8) -> String {
    match b {
        POOL_TERMINATOR => " 0 ".to_string(),
        b'\'' => r"'\''".to_string(),
        b'\\' => r"'\\'".to_string(),
        b if b.is_ascii_graphic() || b == b' ' => format!("'{}'", b as char),
        b => format!("'\\x{b:02x}'"),
    }
}

pub fn render_c(t: &Tables, names: &CNames) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "static const signed char {}[] = {{",
        names.category_index
    ));
    dump(&mut out, t.category_index.iter().copied(), 8, |v| {
        if v == SENTINEL {
            "  -1".to_string()
        } else {
            format!("0x{v:02x}")
        }
    });

    out.push_str(&format!(
        "static const unsigned short {}[] = {{",
        names.offsets
    ));
    dump(&mut out, t.offsets.iter().copied(), 8, |v| format!("0x{v:04x}"));

    out.push_str(&format!(
        "static const unsigned short {}[] = {{",
        names.directory
    ));
    dump(&mut out, t.directory.iter().copied(), 8, |v| format!("0x{v:04x}"));

    out.push_str(&format!("static const char {}[] = {{", names.pool));
    dump(&mut out, t.pool.iter().copied(), 15, c_char_literal);

    out
}

pub fn save_tables_c(path: &Path, t: &Tables, names: &CNames) -> std::io::Result<()> {
    let src = render_c(t, names);
    std::fs::write(path, &src)?;
    log::info!("saved C tables to {} ({} bytes)", path.display(), src.len());
    Ok(())
}
