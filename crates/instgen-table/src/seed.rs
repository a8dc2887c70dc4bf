//! Seed table reader.
//!
//! A seed file lists the physical spaces the native library must support,
//! one per line:
//!
//! ```text
//! # dim codim range rank [ignored ...] transformation
//! 2 0 1 1 h_grad
//! 2 1 2 1 extra columns are skipped h_div
//! ```
//!
//! Only the first four fields and the last field are significant. Blank
//! lines and lines whose first non-blank character is `#` are skipped.

use std::fs;
use std::path::Path;

use instgen_core::{InstantiationError, SpaceDescriptor, Transformation};
use smallvec::SmallVec;

/// Minimum number of whitespace-separated fields in a seed row.
pub const MIN_FIELDS: usize = 5;

const INTEGER_FIELDS: [&str; 4] = ["dim", "codim", "range", "rank"];

/// Read and parse a seed file.
///
/// The file is read in full and closed before parsing starts.
pub fn read_seed_file(path: impl AsRef<Path>) -> Result<Vec<SpaceDescriptor>, InstantiationError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InstantiationError::ConfigNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let seeds = parse_seed_table(&text)?;
    tracing::debug!(path = %path.display(), rows = seeds.len(), "read seed file");
    Ok(seeds)
}

/// Parse the contents of a seed file into rows, in file order.
pub fn parse_seed_table(text: &str) -> Result<Vec<SpaceDescriptor>, InstantiationError> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| parse_seed_line(i + 1, line).transpose())
        .collect()
}

/// Parse one line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_seed_line(
    line_number: usize,
    line: &str,
) -> Result<Option<SpaceDescriptor>, InstantiationError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let fields: SmallVec<[&str; 8]> = trimmed.split_whitespace().collect();
    let malformed = |reason: String| InstantiationError::MalformedRow {
        line_number,
        line: trimmed.to_string(),
        reason,
    };
    if fields.len() < MIN_FIELDS {
        return Err(malformed(format!(
            "expected at least {MIN_FIELDS} fields, found {}",
            fields.len()
        )));
    }

    let mut ints = [0u32; 4];
    for (slot, (name, raw)) in ints.iter_mut().zip(INTEGER_FIELDS.iter().zip(&fields)) {
        *slot = raw.parse().map_err(|_| {
            malformed(format!("{name} '{raw}' is not a non-negative integer"))
        })?;
    }

    // Intervening fields are tolerated; the transformation is always last.
    let last = fields[fields.len() - 1];
    let transformation: Transformation = last.parse().map_err(|_| {
        InstantiationError::UnknownTransformKind {
            line_number,
            value: last.to_string(),
        }
    })?;

    let [dim, codim, range, rank] = ints;
    if dim.checked_add(codim).is_none() {
        return Err(malformed("dim + codim overflows".to_string()));
    }
    Ok(Some(SpaceDescriptor::new(dim, codim, range, rank, transformation)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_row() {
        let sp = parse_seed_line(1, "2 0 2 1 h_grad").unwrap().unwrap();
        assert_eq!(sp, SpaceDescriptor::new(2, 0, 2, 1, Transformation::HGrad));
    }

    #[test]
    fn intervening_fields_are_ignored() {
        let sp = parse_seed_line(1, "  3 0 3 1 foo 42 h_div ").unwrap().unwrap();
        assert_eq!(sp, SpaceDescriptor::new(3, 0, 3, 1, Transformation::HDiv));
    }

    #[test]
    fn comments_and_blanks_skipped() {
        assert!(parse_seed_line(1, "").unwrap().is_none());
        assert!(parse_seed_line(2, "   \t").unwrap().is_none());
        assert!(parse_seed_line(3, "# dim codim range rank trans").unwrap().is_none());
        assert!(parse_seed_line(4, "  #2 0 1 1 h_grad").unwrap().is_none());
    }

    #[test]
    fn three_fields_is_malformed() {
        match parse_seed_line(7, "2 0 2") {
            Err(InstantiationError::MalformedRow {
                line_number, line, ..
            }) => {
                assert_eq!(line_number, 7);
                assert_eq!(line, "2 0 2");
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn non_integer_leading_field_is_malformed() {
        let err = parse_seed_line(1, "2 x 2 1 h_grad").unwrap_err();
        assert!(matches!(err, InstantiationError::MalformedRow { .. }));
        assert!(err.to_string().contains("codim 'x'"), "{err}");
    }

    #[test]
    fn negative_integer_is_malformed() {
        let err = parse_seed_line(1, "-1 0 2 1 h_grad").unwrap_err();
        assert!(matches!(err, InstantiationError::MalformedRow { .. }));
    }

    #[test]
    fn space_dim_overflow_is_malformed() {
        match parse_seed_table("1 4294967295 1 1 h_grad\n") {
            Err(InstantiationError::MalformedRow {
                line_number,
                reason,
                ..
            }) => {
                assert_eq!(line_number, 1);
                assert_eq!(reason, "dim + codim overflows");
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn largest_space_dim_is_accepted() {
        let sp = parse_seed_line(1, "2 4294967293 1 1 h_div").unwrap().unwrap();
        assert_eq!(sp.space_dim(), u32::MAX);
        assert_eq!(sp.physical_range(), u32::MAX);
    }

    #[test]
    fn unknown_transformation_reported() {
        match parse_seed_line(3, "2 0 2 1 h_curl") {
            Err(InstantiationError::UnknownTransformKind { line_number, value }) => {
                assert_eq!(line_number, 3);
                assert_eq!(value, "h_curl");
            }
            other => panic!("expected UnknownTransformKind, got {other:?}"),
        }
    }

    #[test]
    fn table_keeps_file_order_and_line_numbers() {
        let text = "# header\n2 0 2 1 h_grad\n\n1 1 1 1 h_div\n3 0\n";
        let err = parse_seed_table(text).unwrap_err();
        assert!(matches!(
            err,
            InstantiationError::MalformedRow { line_number: 5, .. }
        ));

        let ok = parse_seed_table("2 0 2 1 h_grad\n1 1 1 1 h_div\n").unwrap();
        assert_eq!(
            ok,
            vec![
                SpaceDescriptor::new(2, 0, 2, 1, Transformation::HGrad),
                SpaceDescriptor::new(1, 1, 1, 1, Transformation::HDiv),
            ]
        );
    }

    #[test]
    fn empty_table_is_legal() {
        assert!(parse_seed_table("# nothing here\n\n").unwrap().is_empty());
    }
}
