//! Emission boundary for instgen tables.
//!
//! Formats table entries as declaration names ([`DeclName`]) and writes
//! them as explicit instantiations ([`InstantiationWriter`]), grouped by
//! [`Family`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod family;
pub mod header;
pub mod names;
pub mod writer;

pub use family::{Family, UnknownFamily};
pub use header::write_header;
pub use names::{decl_name, dim_family_name, Decl, DeclName};
pub use writer::InstantiationWriter;
