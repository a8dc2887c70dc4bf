//! Generated-file header.

use std::io::{self, Write};

/// Write the banner every generated file starts with, naming the
/// `generator` that produced it.
pub fn write_header<W: Write>(writer: &mut W, generator: &str) -> io::Result<()> {
    writeln!(
        writer,
        "// This file was automatically generated from {generator}"
    )?;
    writeln!(writer, "// DO NOT edit as it will be overwritten.")?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_ends_with_blank_line() {
        let mut buf = Vec::new();
        write_header(&mut buf, "grid.inst").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "// This file was automatically generated from grid.inst\n\
             // DO NOT edit as it will be overwritten.\n\n"
        );
    }
}
