use artloom::export::export_filename;
use artloom::gallery::{Gallery, GalleryEntry, GalleryError, GALLERY_CAP};
use artloom::params::{parse_deep_link, DeepLink, Params};
use std::path::PathBuf;

fn entry(n: usize) -> GalleryEntry {
    GalleryEntry {
        seed: format!("seed-{n}"),
        pattern: "orbits".to_string(),
        palette: "neon".to_string(),
        ts: 1_700_000_000 + n as u64,
        png: vec![0x89, b'P', b'N', b'G', n as u8],
    }
}

#[test]
fn gallery_caps_at_eight_and_evicts_oldest() {
    let mut gallery = Gallery::default();
    for n in 0..9 {
        gallery.add(entry(n));
    }
    assert_eq!(gallery.len(), GALLERY_CAP);
    // Most recent first; the very first add fell off the tail.
    assert_eq!(gallery.entries()[0].seed, "seed-8");
    assert_eq!(gallery.entries()[7].seed, "seed-1");
    assert!(gallery.entries().iter().all(|e| e.seed != "seed-0"));
}

#[test]
fn text_round_trip_preserves_entries() {
    let mut gallery = Gallery::default();
    for n in 0..3 {
        gallery.add(entry(n));
    }
    let text = gallery.to_text();
    let parsed = Gallery::parse(&text).expect("serialized gallery should parse");
    assert_eq!(parsed, gallery);
}

#[test]
fn parse_skips_comments_and_blank_lines() {
    let text = "# artloom gallery v1\n\n# a comment\nseed=abc\npattern=tiles\npalette=ocean\nts=42\nimage=AAEC\n";
    let gallery = Gallery::parse(text).expect("well-formed text should parse");
    assert_eq!(gallery.len(), 1);
    let e = &gallery.entries()[0];
    assert_eq!(e.seed, "abc");
    assert_eq!(e.pattern, "tiles");
    assert_eq!(e.palette, "ocean");
    assert_eq!(e.ts, 42);
    assert_eq!(e.png, vec![0, 1, 2]);
}

#[test]
fn parse_rejects_unknown_keys() {
    let err = Gallery::parse("color=red\n").expect_err("unknown key must fail");
    assert!(matches!(err, GalleryError::Parse { line: 1, .. }));
}

#[test]
fn parse_rejects_lines_without_separator() {
    let err = Gallery::parse("seed=a\ngarbage line\n").expect_err("bare line must fail");
    assert!(matches!(err, GalleryError::Parse { line: 2, .. }));
}

#[test]
fn parse_rejects_bad_base64_and_bad_ts() {
    let err = Gallery::parse("seed=a\nimage=!!!not-base64\n").expect_err("bad base64 must fail");
    assert!(matches!(err, GalleryError::Parse { line: 2, .. }));

    let err = Gallery::parse("seed=a\nts=soon\n").expect_err("bad ts must fail");
    assert!(matches!(err, GalleryError::Parse { line: 2, .. }));
}

#[test]
fn parse_rejects_image_without_seed() {
    let err = Gallery::parse("image=AAEC\n").expect_err("image needs a preceding seed");
    assert!(matches!(err, GalleryError::Parse { line: 1, .. }));
}

#[test]
fn load_of_missing_file_yields_empty_gallery() {
    let path = PathBuf::from("/nonexistent/artloom-test/gallery.txt");
    let gallery = Gallery::load(Some(&path));
    assert!(gallery.is_empty());
    assert!(Gallery::load(None).is_empty());
}

#[test]
fn save_and_load_round_trip_on_disk() {
    let dir = std::env::temp_dir().join(format!("artloom-gallery-{}", std::process::id()));
    let path = dir.join("gallery.txt");
    let mut gallery = Gallery::default();
    gallery.add(entry(1));
    gallery.add(entry(2));
    gallery.save(Some(&path)).expect("save should succeed");

    let loaded = Gallery::load(Some(&path));
    assert_eq!(loaded, gallery);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn empty_seed_is_replaced_with_a_fresh_one() {
    let mut params = Params::default();
    params.set_seed("");
    assert!(!params.seed.is_empty());
    let first = params.seed.clone();
    params.set_seed("   ");
    assert!(!params.seed.is_empty());

    params.set_seed("  kept  ");
    assert_eq!(params.seed, "kept");
    assert_ne!(params.seed, first);
}

#[test]
fn randomize_seed_produces_numeric_seeds() {
    let mut params = Params::default();
    params.randomize_seed();
    assert!(params.seed.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn deep_link_parses_known_keys() {
    let link = parse_deep_link("?seed=42&pattern=tiles&palette=ocean");
    assert_eq!(
        link,
        DeepLink {
            seed: Some("42".to_string()),
            pattern: Some("tiles".to_string()),
            palette: Some("ocean".to_string()),
        }
    );
}

#[test]
fn deep_link_decodes_escapes_and_ignores_junk() {
    let link = parse_deep_link("seed=two%20words+here&mode=party&pattern&palette=");
    assert_eq!(link.seed.as_deref(), Some("two words here"));
    assert_eq!(link.pattern, None);
    assert_eq!(link.palette, None);

    // A malformed escape passes through as literal text.
    let link = parse_deep_link("seed=50%25&pattern=a%zz");
    assert_eq!(link.seed.as_deref(), Some("50%"));
    assert_eq!(link.pattern.as_deref(), Some("a%zz"));
}

#[test]
fn deep_link_overrides_only_what_it_names() {
    let mut params = Params::default();
    params.set_seed("original");
    params.apply_deep_link(&parse_deep_link("pattern=flowfield"));
    assert_eq!(params.seed, "original");
    assert_eq!(params.pattern, "flowfield");
    assert_eq!(params.palette, "neon");
}

#[test]
fn export_filename_sanitizes_the_seed() {
    assert_eq!(export_filename("orbits", "12345"), "art_orbits_12345.png");
    assert_eq!(
        export_filename("tiles", "two words/slash"),
        "art_tiles_two-words-slash.png"
    );
}
