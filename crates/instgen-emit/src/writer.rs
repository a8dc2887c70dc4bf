//! Explicit-instantiation writer.
//!
//! [`InstantiationWriter`] streams `template class <name> ;` lines to any
//! `Write` sink. The header is written immediately on construction.

use std::io::{self, Write};

use instgen_core::unique;
use instgen_table::InstantiationInfo;

use crate::family::Family;
use crate::header::write_header;
use crate::names::DeclName;

/// Writes explicit instantiations to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and the binary can
/// use `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use instgen_core::{DerivativeOrder, SpaceDescriptor, Transformation::HGrad};
/// use instgen_emit::{Family, InstantiationWriter};
/// use instgen_table::InstantiationInfo;
///
/// let seeds = [SpaceDescriptor::new(2, 0, 1, 1, HGrad)];
/// let info = InstantiationInfo::new(&seeds, DerivativeOrder::new(1));
///
/// let mut buf = Vec::new();
/// let mut writer = InstantiationWriter::new(&mut buf, "mapping.inst").unwrap();
/// writer.write_family(&info, Family::Mapping).unwrap();
/// assert_eq!(writer.declarations_written(), 2);
/// drop(writer);
///
/// let text = String::from_utf8(buf).unwrap();
/// assert!(text.ends_with("template class Mapping<2,0> ;\ntemplate class Mapping<1,1> ;\n"));
/// ```
pub struct InstantiationWriter<W: Write> {
    writer: W,
    declarations_written: u64,
}

impl<W: Write> InstantiationWriter<W> {
    /// Create a writer, immediately writing the header for `generator`.
    pub fn new(mut writer: W, generator: &str) -> io::Result<Self> {
        write_header(&mut writer, generator)?;
        Ok(Self {
            writer,
            declarations_written: 0,
        })
    }

    /// Write one `template class <name> ;` line.
    pub fn write_decl<T: DeclName + ?Sized>(&mut self, entry: &T) -> io::Result<()> {
        writeln!(self.writer, "template class {} ;", entry.decl())?;
        self.declarations_written += 1;
        Ok(())
    }

    /// Write every entry of `entries`, in order.
    pub fn write_entries<'a, T, I>(&mut self, entries: I) -> io::Result<()>
    where
        T: DeclName + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for entry in entries {
            self.write_decl(entry)?;
        }
        Ok(())
    }

    /// Write one family from `info`. Returns the number of lines written.
    pub fn write_family(&mut self, info: &InstantiationInfo, family: Family) -> io::Result<u64> {
        let before = self.declarations_written;
        let containers = info.containers();
        let families = info.families();
        match family {
            Family::Tensors => {
                self.write_entries(info.derivatives())?;
                self.write_entries(info.values())?;
            }
            Family::PerDim(dim_family) => {
                for container in containers.per_dim(dim_family) {
                    self.write_decl(&container)?;
                }
            }
            Family::DynamicMultiArray => self.write_entries(containers.dynamic_multi_arrays())?,
            Family::CartesianProductArray => {
                self.write_entries(containers.cartesian_product_arrays())?
            }
            Family::ValueVector => self.write_entries(containers.value_vectors())?,
            Family::ValueTable => self.write_entries(containers.value_tables())?,
            Family::Mapping => self.write_entries(info.mapping_dims())?,
            Family::RefSpace => self.write_entries(families.ref_spaces())?,
            Family::PushForward => self.write_entries(families.push_forwards())?,
            Family::PhysicalSpace => self.write_entries(families.physical_spaces())?,
        }
        let written = self.declarations_written - before;
        tracing::debug!(family = %family, written, "wrote family");
        Ok(written)
    }

    /// Write each distinct family of `selected`, in first-listed order.
    pub fn write_families(
        &mut self,
        info: &InstantiationInfo,
        selected: &[Family],
    ) -> io::Result<u64> {
        let mut written = 0;
        for family in unique(selected.iter().copied()) {
            written += self.write_family(info, family)?;
        }
        Ok(written)
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Number of declarations written so far.
    pub fn declarations_written(&self) -> u64 {
        self.declarations_written
    }

    /// Consume the writer and return the underlying `Write` sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
