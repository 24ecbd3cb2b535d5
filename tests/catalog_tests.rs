use std::fs;
use std::path::Path;

use folio::catalog::{discover_plays, Catalog};
use folio::FolioError;

const CATALOG: &str = "\
All's Well That Ends Well,all_well
Hamlet,hamlet

Macbeth, macbeth
";

#[test]
fn test_parse_catalog_skips_blank_lines() {
    let catalog = Catalog::parse(CATALOG).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.entries()[0].name, "All's Well That Ends Well");
    assert_eq!(catalog.get(2).unwrap().slug, "macbeth");
}

#[test]
fn test_play_path_uses_slug() {
    let catalog = Catalog::parse(CATALOG).unwrap();
    let path = catalog.play_path("plays", 1).unwrap();
    assert_eq!(path, Path::new("plays").join("hamlet.xml"));
}

#[test]
fn test_index_out_of_range() {
    let catalog = Catalog::parse(CATALOG).unwrap();
    assert!(matches!(
        catalog.get(3),
        Err(FolioError::PlayIndex { index: 3, len: 3 })
    ));
}

#[test]
fn test_line_without_comma_reports_line_number() {
    let result = Catalog::parse("Hamlet,hamlet\n\nMacbeth\n");
    assert!(matches!(result, Err(FolioError::Catalog { line: 3, .. })));
}

#[test]
fn test_empty_slug_is_rejected() {
    let result = Catalog::parse("Hamlet,  \n");
    assert!(matches!(result, Err(FolioError::Catalog { line: 1, .. })));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Catalog::load(dir.path().join("nope.txt"));
    assert!(matches!(result, Err(FolioError::Io { .. })));
}

#[test]
fn test_discover_plays_finds_xml_sorted() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("tragedies")).unwrap();
    fs::write(dir.path().join("tragedies").join("macbeth.xml"), "<PLAY/>").unwrap();
    fs::write(dir.path().join("hamlet.XML"), "<PLAY/>").unwrap();
    fs::write(dir.path().join("notes.txt"), "not a play").unwrap();

    let found = discover_plays(dir.path()).unwrap();
    assert_eq!(
        found,
        vec![
            dir.path().join("hamlet.XML"),
            dir.path().join("tragedies").join("macbeth.xml"),
        ]
    );
}
