//! Instantiation-table derivation for instgen.
//!
//! Turns a seed list of physical spaces into the closure of every entity
//! a native isogeometric library must be explicitly instantiated for.
//!
//! # Pipeline
//!
//! Data flows one way; each stage consumes only tables produced before it:
//!
//! 1. [`seed`]: parse the seed file into [`SpaceDescriptor`](instgen_core::SpaceDescriptor) rows
//! 2. [`SpaceTable`]: user, face, closure and reference-space tables
//! 3. [`DimensionTables`]: mapping, function and reference-space tuples
//! 4. [`TensorTypes`]: derivative and value tensor types per order
//! 5. [`ContainerTable`]: container parametrizations
//! 6. [`SpaceFamilies`]: reference spaces, push-forwards, physical spaces
//!
//! [`InstantiationInfo`] runs all stages and owns their output.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod containers;
pub mod derivatives;
pub mod dims;
pub mod info;
pub mod physical;
pub mod seed;
pub mod space_table;

pub use config::GeneratorConfig;
pub use containers::{
    BasisCache, CartesianProductArray, ContainerTable, DimContainer, DimFamily, DynamicMultiArray,
    MultiArrayElement, ProductArrayElement, Scalar, ValueTable, ValueVector, VectorElement,
};
pub use derivatives::TensorTypes;
pub use dims::DimensionTables;
pub use info::InstantiationInfo;
pub use physical::{PhysicalSpace, PushForward, RefSpace, SpaceFamilies, SplineKind};
pub use seed::{parse_seed_table, read_seed_file};
pub use space_table::SpaceTable;
