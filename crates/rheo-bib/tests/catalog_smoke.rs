//! End-to-end checks of the bundled bibliography and its projections.

use rheo_bib::{BibError, Bibliography};
use std::io::Write;

#[test]
fn bundled_bibliography_has_all_model_citations() {
    let bib = Bibliography::bundled().unwrap();
    for key in [
        "newton_1687",
        "ostwald_1929",
        "bingham_1916",
        "herschel_bulkley_1926",
        "casson_1959",
        "caggioni2020variations",
        "carreau_1972",
        "carreau_yasuda_1979",
        "cross_1925",
    ] {
        assert!(bib.contains(key), "missing {key}");
    }
}

#[test]
fn table_projection_covers_every_entry() {
    let bib = Bibliography::bundled().unwrap();
    let table = bib.to_table();
    assert_eq!(table.len(), bib.len());

    // each row reproduces its source entry exactly
    for entry in bib.entries() {
        let row = table.row(entry.key()).unwrap();
        assert_eq!(row.key(), entry.key());
        for (name, value) in entry.fields() {
            assert_eq!(table.get(entry.key(), name), Some(value));
        }
    }
}

#[test]
fn table_marks_absent_fields() {
    let bib = Bibliography::bundled().unwrap();
    let table = bib.to_table();
    // a book has no journal
    assert_eq!(table.get("newton_1687", "journal"), None);
    assert_eq!(table.get("bingham_1916", "journal"), Some("Bulletin of the Bureau of Standards"));
}

#[test]
fn tree_projection_renders_every_key() {
    let bib = Bibliography::bundled().unwrap();
    let tree = bib.to_tree_view();
    let rendered = tree.to_string();
    for key in bib.keys() {
        assert!(rendered.contains(key), "missing {key}");
    }
    let json = tree.to_json_pretty().unwrap();
    assert!(json.contains("\"caggioni2020variations\""));
}

#[test]
fn loading_missing_file_is_an_io_error() {
    let err = Bibliography::load("no/such/models.bib").unwrap_err();
    assert!(matches!(err, BibError::Io(_)));
}

#[test]
fn loading_corrupt_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "@article{{broken, title = {{never closed").unwrap();
    let err = Bibliography::load(file.path()).unwrap_err();
    assert!(matches!(err, BibError::Parse { .. }));
}

#[test]
fn loading_file_from_disk_matches_bundled() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "@misc{{only, note = {{from disk}}}}").unwrap();
    let bib = Bibliography::load(file.path()).unwrap();
    assert_eq!(bib.len(), 1);
    assert_eq!(bib.get("only").unwrap().get("note"), Some("from disk"));
}
