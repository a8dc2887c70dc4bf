//! Reading seed tables from disk.

use std::io::Write;

use instgen_core::{InstantiationError, SpaceDescriptor, Transformation::HGrad};
use instgen_table::{read_seed_file, GeneratorConfig, InstantiationInfo};
use instgen_test_utils::fixtures::{mixed_3d, vector_2d, MIXED_3D_TEXT, VECTOR_2D_TEXT};

fn seed_file(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn reads_rows_skipping_comments_and_blanks() {
    let file = seed_file(VECTOR_2D_TEXT);
    assert_eq!(read_seed_file(file.path()).unwrap(), vector_2d());

    let file = seed_file(MIXED_3D_TEXT);
    assert_eq!(read_seed_file(file.path()).unwrap(), mixed_3d());
}

#[test]
fn config_builds_same_tables_as_rows() {
    let file = seed_file(MIXED_3D_TEXT);
    let config = GeneratorConfig::new(file.path(), 2);
    let from_file = InstantiationInfo::from_config(&config).unwrap();
    let from_rows = InstantiationInfo::new(&mixed_3d(), config.validate().unwrap());
    assert_eq!(from_file, from_rows);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let err = InstantiationInfo::from_seed_file(&path, 1).unwrap_err();
    match err {
        InstantiationError::ConfigNotFound { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ConfigNotFound, got {other:?}"),
    }
}

#[test]
fn short_row_aborts_generation() {
    let file = seed_file("2 0 2 1 h_grad\n2 0 2\n");
    let err = InstantiationInfo::from_seed_file(file.path(), 1).unwrap_err();
    match err {
        InstantiationError::MalformedRow {
            line_number, line, ..
        } => {
            assert_eq!(line_number, 2);
            assert_eq!(line, "2 0 2");
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn unknown_transformation_is_rejected() {
    let file = seed_file("2 0 2 1 h_curl\n");
    let err = read_seed_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        InstantiationError::UnknownTransformKind { line_number: 1, ref value } if value == "h_curl"
    ));
}

#[test]
fn extra_fields_use_last_as_transformation() {
    let file = seed_file("2 0 2 1 extra h_grad\n");
    assert_eq!(
        read_seed_file(file.path()).unwrap(),
        vec![SpaceDescriptor::new(2, 0, 2, 1, HGrad)]
    );
}

#[test]
fn empty_file_gives_empty_tables() {
    let file = seed_file("# nothing configured\n\n");
    let info = InstantiationInfo::from_seed_file(file.path(), 3).unwrap();
    assert!(info.all().is_empty());
    assert!(info.derivatives().is_empty());
    assert!(info.containers().value_vectors().is_empty());
}
