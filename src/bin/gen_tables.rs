// src/bin/gen_tables.rs
// Compile a fragment grammar and write its lookup tables.
// Usage:
//   cargo run --bin gen_tables                          # builtin grammar -> tables/namegen_tables.h
//   cargo run --bin gen_tables -- out.{h,c,json,bin}    # format picked by extension
//   cargo run --bin gen_tables -- out.bin words.json    # compile a JSON word list instead

use std::{env, fs, path::Path};

use anyhow::{Context, Result, bail};
use namegen::{
    builtin, build_tables,
    grammar::load_grammar_json,
    tables::{CNames, save_tables_bin, save_tables_c, save_tables_json},
};

fn main() -> Result<()> {
    let out = env::args()
        .nth(1)
        .unwrap_or_else(|| "tables/namegen_tables.h".to_string());
    let out_path = Path::new(&out);

    let grammar = match env::args().nth(2) {
        Some(src) => load_grammar_json(Path::new(&src))?,
        None => builtin::grammar(),
    };

    println!(
        "[gen_tables] compiling {} categories / {} fragments…",
        grammar.len(),
        grammar.fragment_count()
    );
    let t = build_tables(&grammar).context("grammar failed to compile")?;
    println!(
        "[gen_tables] tags = {}, pool = {} bytes, offsets = {}",
        t.tags().into_iter().collect::<String>(),
        t.pool.len(),
        t.offsets.len()
    );

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    match out_path.extension().and_then(|e| e.to_str()) {
        Some("h" | "c") => save_tables_c(out_path, &t, &CNames::default()),
        Some("json") => save_tables_json(out_path, &t),
        Some("bin") => save_tables_bin(out_path, &t),
        other => bail!("unsupported output extension {other:?} (want .h, .c, .json or .bin)"),
    }
    .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("[gen_tables] wrote {}", out_path.display());
    Ok(())
}
