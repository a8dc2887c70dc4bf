//! Selectable groups of declarations.

use std::fmt;
use std::str::FromStr;

use instgen_table::DimFamily;
use thiserror::Error;

/// A group of declarations written together, one per table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Derivative then value tensor types.
    Tensors,
    /// One of the per-dimension container families.
    PerDim(DimFamily),
    /// `DynamicMultiArray<E,r>`.
    DynamicMultiArray,
    /// `CartesianProductArray<E,d>`.
    CartesianProductArray,
    /// `ValueVector<E>`.
    ValueVector,
    /// `ValueTable<E>`.
    ValueTable,
    /// `Mapping<d,c>` over the closure.
    Mapping,
    /// B-spline and NURBS reference spaces.
    RefSpace,
    /// `PushForward<Transformation::t, d, c>`.
    PushForward,
    /// `PhysicalSpace <Ref, PF>` over the closure.
    PhysicalSpace,
}

impl Family {
    /// Every family, in the order a full generation run writes them.
    pub const ALL: [Family; 16] = [
        Family::Tensors,
        Family::PerDim(DimFamily::TensorIndex),
        Family::PerDim(DimFamily::TensorSizedContainer),
        Family::PerDim(DimFamily::TensorProductArray),
        Family::PerDim(DimFamily::CartesianProductIndexer),
        Family::PerDim(DimFamily::UnitElement),
        Family::PerDim(DimFamily::Multiplicity),
        Family::PerDim(DimFamily::Quadrature),
        Family::DynamicMultiArray,
        Family::CartesianProductArray,
        Family::ValueVector,
        Family::ValueTable,
        Family::Mapping,
        Family::RefSpace,
        Family::PushForward,
        Family::PhysicalSpace,
    ];

    /// Command-line spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Tensors => "tensors",
            Family::PerDim(DimFamily::TensorIndex) => "tensor-index",
            Family::PerDim(DimFamily::TensorSizedContainer) => "tensor-sized-container",
            Family::PerDim(DimFamily::TensorProductArray) => "tensor-product-array",
            Family::PerDim(DimFamily::CartesianProductIndexer) => "cartesian-product-indexer",
            Family::PerDim(DimFamily::UnitElement) => "unit-element",
            Family::PerDim(DimFamily::Multiplicity) => "multiplicity",
            Family::PerDim(DimFamily::Quadrature) => "quadrature",
            Family::DynamicMultiArray => "dynamic-multi-array",
            Family::CartesianProductArray => "cartesian-product-array",
            Family::ValueVector => "value-vector",
            Family::ValueTable => "value-table",
            Family::Mapping => "mapping",
            Family::RefSpace => "ref-space",
            Family::PushForward => "push-forward",
            Family::PhysicalSpace => "physical-space",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized family name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown declaration family '{0}'")]
pub struct UnknownFamily(pub String);

impl FromStr for Family {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| UnknownFamily(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for family in Family::ALL {
            assert_eq!(family.as_str().parse::<Family>(), Ok(family));
        }
    }

    #[test]
    fn unknown_name_rejected() {
        assert_eq!(
            "grid".parse::<Family>(),
            Err(UnknownFamily("grid".to_string()))
        );
    }

    #[test]
    fn unknown_name_message() {
        let err = "grid".parse::<Family>().unwrap_err();
        assert_eq!(err.to_string(), "unknown declaration family 'grid'");
    }
}
