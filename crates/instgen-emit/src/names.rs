//! Declaration names in the native library's spelling.
//!
//! Tables hold typed descriptors; text only exists from here on. Every
//! descriptor implements [`DeclName`], and [`DeclName::decl`] wraps it in
//! a [`Display`](fmt::Display) adapter so names can be streamed straight
//! into a writer without intermediate strings.

use std::fmt;

use instgen_core::{DerivativeDescriptor, MappingDims, TensorValue, ValueDescriptor};
use instgen_table::{
    BasisCache, CartesianProductArray, DimContainer, DimFamily, DynamicMultiArray,
    MultiArrayElement, PhysicalSpace, ProductArrayElement, PushForward, RefSpace, Scalar,
    SplineKind, ValueTable, ValueVector, VectorElement,
};

const MATRIX: &str = "boost::numeric::ublas::matrix<Real>";

/// A table entry with a declaration name.
pub trait DeclName {
    /// Write the declaration name.
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Borrow as a displayable name.
    fn decl(&self) -> Decl<'_, Self> {
        Decl(self)
    }
}

/// [`Display`](fmt::Display) adapter returned by [`DeclName::decl`].
pub struct Decl<'a, T: ?Sized>(&'a T);

impl<T: DeclName + ?Sized> fmt::Display for Decl<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_decl(f)
    }
}

/// The declaration name of `entry` as an owned string.
///
/// # Examples
///
/// ```
/// use instgen_core::MappingDims;
/// use instgen_emit::decl_name;
///
/// assert_eq!(decl_name(&MappingDims::new(2, 1)), "Mapping<2,1>");
/// ```
pub fn decl_name<T: DeclName + ?Sized>(entry: &T) -> String {
    entry.decl().to_string()
}

/// Class template name of a per-dimension family.
pub fn dim_family_name(family: DimFamily) -> &'static str {
    match family {
        DimFamily::TensorIndex => "TensorIndex",
        DimFamily::TensorSizedContainer => "TensorSizedContainer",
        DimFamily::TensorProductArray => "TensorProductArray",
        DimFamily::CartesianProductIndexer => "CartesianProductIndexer",
        DimFamily::UnitElement => "UnitElement",
        DimFamily::Multiplicity => "Multiplicity",
        DimFamily::Quadrature => "Quadrature",
    }
}

// ── Tensors ─────────────────────────────────────────────────────

impl DeclName for ValueDescriptor {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tensor<{}, {}, tensor::contravariant, Tdouble>",
            self.range, self.rank
        )
    }
}

impl DeclName for DerivativeDescriptor {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = ValueDescriptor {
            range: self.range,
            rank: self.rank,
        };
        write!(
            f,
            "Tensor<{}, {}, tensor::covariant, {}>",
            self.dim,
            self.order,
            value.decl()
        )
    }
}

impl DeclName for TensorValue {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorValue::Derivative(d) => d.fmt_decl(f),
            TensorValue::Value(v) => v.fmt_decl(f),
        }
    }
}

// ── Containers ──────────────────────────────────────────────────

impl DeclName for DimContainer {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>", dim_family_name(self.family), self.dim)
    }
}

impl DeclName for Scalar {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Scalar::Real => "Real",
            Scalar::Index => "Index",
        })
    }
}

impl DeclName for BasisCache {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasisCache::Matrix => f.write_str(MATRIX),
            BasisCache::MatrixPtr => write!(f, "const {MATRIX} *"),
            BasisCache::MatrixVector => write!(f, "vector<{MATRIX}>"),
            BasisCache::MatrixVectorPtr => write!(f, "const vector<{MATRIX}> *"),
        }
    }
}

impl DeclName for MultiArrayElement {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultiArrayElement::TensorIndex(dim) => write!(f, "TensorIndex<{dim}>"),
            MultiArrayElement::Scalar(s) => s.fmt_decl(f),
            MultiArrayElement::Tensor(t) => t.fmt_decl(f),
        }
    }
}

impl DeclName for DynamicMultiArray {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicMultiArray<{},{}>", self.element.decl(), self.rank)
    }
}

impl DeclName for ProductArrayElement {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductArrayElement::Real => f.write_str("Real"),
            ProductArrayElement::RealPtr => f.write_str("Real*"),
            ProductArrayElement::Index => f.write_str("Index"),
            ProductArrayElement::Cache(c) => c.fmt_decl(f),
        }
    }
}

impl DeclName for CartesianProductArray {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CartesianProductArray<{},{}>", self.element.decl(), self.dim)
    }
}

impl DeclName for ValueVector {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            VectorElement::Real => f.write_str("ValueVector<Real>"),
            VectorElement::Tensor(t) => write!(f, "ValueVector<{}>", t.decl()),
        }
    }
}

impl DeclName for ValueTable {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueTable<{}>", self.0.decl())
    }
}

// ── Spaces ──────────────────────────────────────────────────────

impl DeclName for MappingDims {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mapping<{},{}>", self.dim, self.codim)
    }
}

impl DeclName for RefSpace {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = match self.kind {
            SplineKind::BSpline => "BSplineSpace",
            SplineKind::Nurbs => "NURBSSpace",
        };
        let d = self.dims;
        write!(f, "{class}<{},{},{}>", d.dim, d.range, d.rank)
    }
}

impl DeclName for PushForward {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PushForward<Transformation::{}, {}, {}>",
            self.transformation, self.dim, self.codim
        )
    }
}

impl DeclName for PhysicalSpace {
    fn fmt_decl(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PhysicalSpace <{}, {} >",
            self.ref_space.decl(),
            self.push_forward.decl()
        )
    }
}
