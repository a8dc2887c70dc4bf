//! Container type enumeration.
//!
//! Each container family is parametrized by one of three upstream
//! sources, and picking the wrong one silently drops instantiations:
//!
//! | Family | Source |
//! |--------|--------|
//! | per-dimension families ([`DimFamily`]) | `dim` of every row of `all` |
//! | [`DynamicMultiArray`] | rows of `all`, then derivatives ∪ values |
//! | [`CartesianProductArray`] | rows of `all`, per element type |
//! | [`ValueVector`], [`ValueTable`] | derivatives ∪ values |

use indexmap::IndexSet;
use instgen_core::{unique, SpaceDescriptor, TensorValue};

use crate::derivatives::TensorTypes;

/// Containers parametrized by a single domain dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DimFamily {
    /// Multi-index into a `dim`-dimensional tensor.
    TensorIndex,
    /// Sizes and strides of a `dim`-dimensional tensor.
    TensorSizedContainer,
    /// Tensor product of `dim` one-dimensional arrays.
    TensorProductArray,
    /// Flat-to-tensor index conversion for a cartesian product.
    CartesianProductIndexer,
    /// Reference `dim`-cube and its sub-elements.
    UnitElement,
    /// Knot multiplicities per direction.
    Multiplicity,
    /// Quadrature rule on the `dim`-cube.
    Quadrature,
}

impl DimFamily {
    /// Every per-dimension family, in enumeration order.
    pub const ALL: [DimFamily; 7] = [
        DimFamily::TensorIndex,
        DimFamily::TensorSizedContainer,
        DimFamily::TensorProductArray,
        DimFamily::CartesianProductIndexer,
        DimFamily::UnitElement,
        DimFamily::Multiplicity,
        DimFamily::Quadrature,
    ];
}

/// Scalar element types stored in multi-arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scalar {
    /// Floating-point value.
    Real,
    /// Integer index.
    Index,
}

/// Matrix element types holding cached basis-function and Bézier
/// operator values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BasisCache {
    /// A dense matrix.
    Matrix,
    /// Borrowed pointer to a dense matrix.
    MatrixPtr,
    /// Vector of dense matrices.
    MatrixVector,
    /// Borrowed pointer to a vector of dense matrices.
    MatrixVectorPtr,
}

impl BasisCache {
    /// Every cache element type, in enumeration order.
    pub const ALL: [BasisCache; 4] = [
        BasisCache::Matrix,
        BasisCache::MatrixPtr,
        BasisCache::MatrixVector,
        BasisCache::MatrixVectorPtr,
    ];
}

/// Element type of a [`DynamicMultiArray`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MultiArrayElement {
    /// A `TensorIndex` of the given dimension.
    TensorIndex(u32),
    /// A scalar.
    Scalar(Scalar),
    /// A derivative or value tensor.
    Tensor(TensorValue),
}

/// One per-dimension container: `family` instantiated for `dim`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DimContainer {
    /// Container family.
    pub family: DimFamily,
    /// Domain dimension.
    pub dim: u32,
}

/// A dynamically sized `rank`-dimensional array of `element`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DynamicMultiArray {
    /// Stored element type.
    pub element: MultiArrayElement,
    /// Number of array dimensions.
    pub rank: u32,
}

/// Element type of a [`CartesianProductArray`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProductArrayElement {
    /// Floating-point value.
    Real,
    /// Pointer to floating-point values.
    RealPtr,
    /// Integer index.
    Index,
    /// Cached basis-function matrices.
    Cache(BasisCache),
}

/// Cartesian product of `dim` one-dimensional arrays of `element`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CartesianProductArray {
    /// Stored element type.
    pub element: ProductArrayElement,
    /// Number of factors.
    pub dim: u32,
}

/// Element type of a [`ValueVector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VectorElement {
    /// Floating-point value.
    Real,
    /// A derivative or value tensor.
    Tensor(TensorValue),
}

/// Values at a set of evaluation points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValueVector(pub VectorElement);

/// Values of a set of basis functions at a set of evaluation points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValueTable(pub TensorValue);

/// Every container parametrization that must be instantiated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainerTable {
    dims: Vec<u32>,
    dynamic_multi_arrays: Vec<DynamicMultiArray>,
    cartesian_product_arrays: Vec<CartesianProductArray>,
    value_vectors: Vec<ValueVector>,
    value_tables: Vec<ValueTable>,
}

impl ContainerTable {
    /// Enumerate containers for the rows of `all` and the tensor types.
    pub fn enumerate(all: &[SpaceDescriptor], tensors: &TensorTypes) -> Self {
        let table = Self {
            dims: unique(all.iter().map(SpaceDescriptor::dim)),
            dynamic_multi_arrays: dynamic_multi_arrays(all, tensors),
            cartesian_product_arrays: cartesian_product_arrays(all),
            value_vectors: value_vectors(tensors),
            value_tables: unique(tensors.tensor_values().map(ValueTable)),
        };
        tracing::debug!(
            dims = table.dims.len(),
            multi_arrays = table.dynamic_multi_arrays.len(),
            product_arrays = table.cartesian_product_arrays.len(),
            value_vectors = table.value_vectors.len(),
            value_tables = table.value_tables.len(),
            "enumerated containers"
        );
        table
    }

    /// Distinct `dim` values of the rows of `all`. Every [`DimFamily`]
    /// is instantiated once for each.
    pub fn dims(&self) -> &[u32] {
        &self.dims
    }

    /// The containers of one per-dimension family.
    pub fn per_dim(&self, family: DimFamily) -> impl Iterator<Item = DimContainer> + '_ {
        self.dims.iter().map(move |&dim| DimContainer { family, dim })
    }

    /// Dynamic multi-array parametrizations.
    pub fn dynamic_multi_arrays(&self) -> &[DynamicMultiArray] {
        &self.dynamic_multi_arrays
    }

    /// Cartesian-product array parametrizations.
    pub fn cartesian_product_arrays(&self) -> &[CartesianProductArray] {
        &self.cartesian_product_arrays
    }

    /// Value vector parametrizations.
    pub fn value_vectors(&self) -> &[ValueVector] {
        &self.value_vectors
    }

    /// Value table parametrizations.
    pub fn value_tables(&self) -> &[ValueTable] {
        &self.value_tables
    }
}

fn dynamic_multi_arrays(all: &[SpaceDescriptor], tensors: &TensorTypes) -> Vec<DynamicMultiArray> {
    let mut out = IndexSet::new();
    for sp in all {
        let dim = sp.dim();
        out.insert(DynamicMultiArray {
            element: MultiArrayElement::TensorIndex(dim),
            rank: dim,
        });
        for scalar in [Scalar::Real, Scalar::Index] {
            out.insert(DynamicMultiArray {
                element: MultiArrayElement::Scalar(scalar),
                rank: dim,
            });
        }
    }
    for tensor in tensors.tensor_values() {
        out.insert(DynamicMultiArray {
            element: MultiArrayElement::Tensor(tensor),
            rank: 2,
        });
    }
    out.into_iter().collect()
}

fn cartesian_product_arrays(all: &[SpaceDescriptor]) -> Vec<CartesianProductArray> {
    let elements = [
        ProductArrayElement::Real,
        ProductArrayElement::RealPtr,
        ProductArrayElement::Index,
    ]
    .into_iter()
    .chain(BasisCache::ALL.into_iter().map(ProductArrayElement::Cache));

    unique(elements.flat_map(|element| {
        all.iter().map(move |sp| CartesianProductArray {
            element,
            dim: sp.dim(),
        })
    }))
}

fn value_vectors(tensors: &TensorTypes) -> Vec<ValueVector> {
    if tensors.derivatives().is_empty() && tensors.values().is_empty() {
        return Vec::new();
    }
    let tensor_vectors = tensors
        .tensor_values()
        .map(|t| ValueVector(VectorElement::Tensor(t)));
    unique(std::iter::once(ValueVector(VectorElement::Real)).chain(tensor_vectors))
}
