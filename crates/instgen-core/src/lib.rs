//! Core types for the instgen instantiation-table generator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the descriptor types every later stage passes around: physical space
//! rows, mapping and function dimension tuples, tensor-type descriptors,
//! the order-preserving de-duplication helper, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod descriptor;
pub mod error;
pub mod tensor;
pub mod transformation;
pub mod unique;

pub use descriptor::{FunctionDims, MappingDims, RefSpaceDims, SpaceDescriptor};
pub use error::InstantiationError;
pub use tensor::{DerivativeDescriptor, DerivativeOrder, TensorValue, ValueDescriptor};
pub use transformation::Transformation;
pub use unique::unique;
