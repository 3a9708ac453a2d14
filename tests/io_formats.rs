//! Emitter and loader tests: C source layout, JSON and binary codecs.

use namegen::{
    Grammar, build_tables, builtin,
    grammar::load_grammar_json_bytes,
    tables::{CNames, encode_tables_bin, load_tables_bin_bytes, load_tables_json_bytes, render_c},
};

fn small_tables() -> namegen::Tables {
    let g = Grammar::from_pairs([('v', vec!["a", "e"]), ('s', vec!["ach", "ad"])]);
    build_tables(&g).expect("compile")
}

#[test]
fn c_source_layout() {
    let src = render_c(&small_tables(), &CNames::default());

    assert!(src.starts_with("static const signed char special[] = {\n      -1,   -1,"));
    // Row 14 holds codes 112..=119: 's' (115) is rank 0, 'v' (118) rank 1.
    assert!(
        src.contains("\n      -1,   -1,   -1, 0x00,   -1,   -1, 0x01,   -1,\n"),
        "{src}"
    );
    assert!(src.contains(
        "static const unsigned short offsets_table[] = {\n    0x0000, 0x0004, 0x0007, 0x0009\n};\n\n"
    ));
    assert!(src.contains(
        "static const unsigned short off_len[] = {\n    0x0000, 0x0002, 0x0002, 0x0002\n};\n\n"
    ));
    assert!(src.ends_with(
        "static const char namegen_argz[] = {\n    'a', 'c', 'h',  0 , 'a', 'd',  0 , 'a',  0 , 'e',  0 \n};\n\n"
    ));
}

#[test]
fn c_source_custom_names_and_escapes() {
    let g = Grammar::from_pairs([('q', vec!["o'\\"])]);
    let t = build_tables(&g).expect("compile");
    let names = CNames {
        category_index: "idx".into(),
        offsets: "offs".into(),
        directory: "dir".into(),
        pool: "pool".into(),
    };
    let src = render_c(&t, &names);
    assert!(src.contains("static const signed char idx[] = {"));
    assert!(src.contains("static const unsigned short dir[] = {"));
    assert!(src.contains("static const char pool[] = {\n    'o', '\\'', '\\\\',  0 \n};"));
}

#[test]
fn builtin_c_source_has_one_row_per_8_index_entries() {
    let t = build_tables(&builtin::grammar()).expect("compile");
    let src = render_c(&t, &CNames::default());
    let index_block = src.split("};").next().unwrap();
    assert_eq!(index_block.lines().count(), 1 + 128 / 8);
}

#[test]
fn binary_roundtrip_and_layout() {
    let t = small_tables();
    let bin = encode_tables_bin(&t);

    assert_eq!(&bin[..8], b"NGTBL001");
    assert_eq!(&bin[8..12], &2u32.to_le_bytes());
    assert_eq!(&bin[12..16], &4u32.to_le_bytes());
    assert_eq!(&bin[16..20], &11u32.to_le_bytes());
    assert_eq!(bin.len(), 20 + 128 + 4 * 2 + 4 * 2 + 11);
    assert!(bin.ends_with(b"ach\0ad\0a\0e\0"));

    assert_eq!(load_tables_bin_bytes(&bin).expect("load"), t);
}

#[test]
fn binary_rejects_corruption() {
    let bin = encode_tables_bin(&build_tables(&builtin::grammar()).expect("compile"));

    let mut bad_magic = bin.clone();
    bad_magic[0] = b'X';
    assert!(load_tables_bin_bytes(&bad_magic).is_err());

    assert!(load_tables_bin_bytes(&bin[..bin.len() - 1]).is_err(), "truncated");

    let mut trailing = bin.clone();
    trailing.push(0);
    assert!(load_tables_bin_bytes(&trailing).is_err(), "trailing bytes");

    // Swap two category ranks in the index: breaks tag order.
    let mut swapped = bin.clone();
    let idx = 20;
    swapped.swap(idx + b'B' as usize, idx + b'C' as usize);
    assert!(load_tables_bin_bytes(&swapped).is_err(), "rank order");

    // Clobber a terminator inside the pool.
    let mut unterminated = bin.clone();
    let last = unterminated.len() - 1;
    unterminated[last] = b'z';
    assert!(load_tables_bin_bytes(&unterminated).is_err(), "unterminated pool");
}

#[test]
fn json_roundtrip_and_verification() {
    let t = build_tables(&builtin::grammar()).expect("compile");
    let json = serde_json::to_vec(&serde_json::json!({
        "category_index": t.category_index.to_vec(),
        "directory": t.directory,
        "offsets": t.offsets,
        "pool": t.pool,
    }))
    .unwrap();
    assert_eq!(load_tables_json_bytes(&json).expect("load"), t);

    let mut broken_offsets = t.offsets.clone();
    broken_offsets[1] += 1;
    let json = serde_json::to_vec(&serde_json::json!({
        "category_index": t.category_index.to_vec(),
        "directory": t.directory,
        "offsets": broken_offsets,
        "pool": t.pool,
    }))
    .unwrap();
    assert!(load_tables_json_bytes(&json).is_err());
}

#[test]
fn grammar_json_preserves_order_and_duplicates() {
    let json = br#"[
        {"tag": "v", "fragments": ["a", "e"]},
        {"tag": "s", "fragments": ["ach", "ad"]}
    ]"#;
    let g = load_grammar_json_bytes(json).expect("parse");
    assert_eq!(g.categories()[0].tag, 'v');
    assert_eq!(build_tables(&g).expect("compile").offsets, vec![0, 4, 7, 9]);

    let dup = br#"[{"tag": "s", "fragments": ["a"]}, {"tag": "s", "fragments": ["b"]}]"#;
    let g = load_grammar_json_bytes(dup).expect("parse keeps duplicates");
    assert_eq!(g.len(), 2);
    assert!(build_tables(&g).is_err());

    assert!(load_grammar_json_bytes(b"{\"s\": [\"a\"]}").is_err());
}

#[test]
fn json_rejects_pool_wider_than_offsets() {
    // One 70000-byte fragment: its offset (0) fits u16, the pool does not.
    let mut category_index = vec![-1i8; 128];
    category_index[b's' as usize] = 0;
    let mut pool = vec![b'x'; 70_000];
    pool.push(0);
    let json = serde_json::to_vec(&serde_json::json!({
        "category_index": category_index,
        "directory": [0, 1],
        "offsets": [0],
        "pool": pool,
    }))
    .unwrap();

    let err = load_tables_json_bytes(&json).expect_err("oversized pool should error");
    assert!(format!("{err:#}").contains("70001"), "{err:#}");
}

#[test]
fn c_source_for_empty_tables_has_no_empty_initializers() {
    let t = build_tables(&Grammar::new([])).expect("compile");
    let src = render_c(&t, &CNames::default());

    assert!(!src.contains("{\n};"), "{src}");
    assert!(src.contains("static const unsigned short offsets_table[] = {\n    0\n};\n\n"));
    assert!(src.contains("static const unsigned short off_len[] = {\n    0\n};\n\n"));
    assert!(src.ends_with("static const char namegen_argz[] = {\n    0\n};\n\n"));
}

#[test]
fn c_source_escapes_non_ascii_pool_bytes() {
    let g = Grammar::from_pairs([('s', vec!["é"])]);
    let t = build_tables(&g).expect("compile");
    let src = render_c(&t, &CNames::default());
    assert!(
        src.ends_with("static const char namegen_argz[] = {\n    '\\xc3', '\\xa9',  0 \n};\n\n"),
        "{src}"
    );
}
