//! instgen: explicit template instantiation tables for isogeometric
//! analysis libraries.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the instgen sub-crates and hosts the `instgen` binary.
//!
//! # Quick start
//!
//! ```rust
//! use instgen::prelude::*;
//!
//! let seeds = parse_seed_table("2 0 1 1 h_grad\n").unwrap();
//! let info = InstantiationInfo::new(&seeds, DerivativeOrder::new(1));
//!
//! let mut writer = InstantiationWriter::new(Vec::new(), "quadrature.inst").unwrap();
//! writer
//!     .write_family(&info, Family::PerDim(DimFamily::Quadrature))
//!     .unwrap();
//! let text = String::from_utf8(writer.into_inner()).unwrap();
//! assert!(text.contains("template class Quadrature<2> ;"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `instgen-core` | Space, mapping and tensor descriptors, errors |
//! | [`table`] | `instgen-table` | Seed reading and every derived table |
//! | [`emit`] | `instgen-emit` | Declaration names and the instantiation writer |
//! | [`cli`] | this crate | The `instgen` command line |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Descriptor types and errors (`instgen-core`).
pub use instgen_core as types;

/// Seed reading and table derivation (`instgen-table`).
///
/// [`table::InstantiationInfo`] runs the whole pipeline.
pub use instgen_table as table;

/// Declaration names and instantiation writing (`instgen-emit`).
pub use instgen_emit as emit;

pub mod cli;

/// Common imports for typical instgen usage.
pub mod prelude {
    // Descriptors
    pub use instgen_core::{
        DerivativeDescriptor, DerivativeOrder, FunctionDims, MappingDims, SpaceDescriptor,
        Transformation, ValueDescriptor,
    };

    // Errors
    pub use instgen_core::InstantiationError;

    // Tables
    pub use instgen_table::{
        parse_seed_table, read_seed_file, DimFamily, GeneratorConfig, InstantiationInfo,
    };

    // Emission
    pub use instgen_emit::{decl_name, DeclName, Family, InstantiationWriter};
}
