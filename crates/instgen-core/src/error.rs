//! Error types for instantiation-table generation.
//!
//! Every error is fatal to the generation run: the tables are a pure
//! function of the seed file and the maximum derivative order, so a
//! failure always points at a configuration defect and nothing is retried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the seed configuration or building tables.
#[derive(Debug, Error)]
pub enum InstantiationError {
    /// The seed file is missing or unreadable.
    #[error("cannot read seed file {}: {source}", path.display())]
    ConfigNotFound {
        /// Path that was opened.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A non-comment line has fewer than five fields, or one of the
    /// first four is not a non-negative integer.
    #[error("malformed seed row at line {line_number}: {reason}: '{line}'")]
    MalformedRow {
        /// One-based line number in the seed file.
        line_number: usize,
        /// The offending line, trimmed.
        line: String,
        /// What is wrong with it.
        reason: String,
    },
    /// The last field of a row names no known transformation kind.
    #[error("unknown transformation kind '{value}' at line {line_number}")]
    UnknownTransformKind {
        /// One-based line number in the seed file.
        line_number: usize,
        /// The unrecognized value.
        value: String,
    },
    /// The maximum derivative order is negative.
    #[error("invalid maximum derivative order {value}: must be a non-negative integer")]
    InvalidDerivativeOrder {
        /// The configured value.
        value: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn malformed_row_reports_line_and_content() {
        let err = InstantiationError::MalformedRow {
            line_number: 4,
            line: "2 0 2".into(),
            reason: "expected at least 5 fields, found 3".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 4"), "{msg}");
        assert!(msg.contains("'2 0 2'"), "{msg}");
    }

    #[test]
    fn config_not_found_exposes_io_source() {
        let err = InstantiationError::ConfigNotFound {
            path: PathBuf::from("/nowhere/spaces.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("/nowhere/spaces.txt"));
    }
}
