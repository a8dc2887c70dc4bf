//! Physical space rows and the dimension tuples projected from them.

use crate::transformation::Transformation;

/// One row of a space table: a physical space the native library must
/// be instantiated for.
///
/// `space_dim`, `physical_range` and `physical_rank` are computed once
/// in [`new`](SpaceDescriptor::new) and cannot drift from the fields
/// they are derived from, since none of the fields are mutable.
///
/// # Examples
///
/// ```
/// use instgen_core::{SpaceDescriptor, Transformation};
///
/// let sp = SpaceDescriptor::new(2, 1, 2, 1, Transformation::HDiv);
/// assert_eq!(sp.space_dim(), 3);
/// assert_eq!(sp.physical_range(), 3);
///
/// let face = sp.face().unwrap();
/// assert_eq!((face.dim(), face.codim()), (1, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpaceDescriptor {
    dim: u32,
    codim: u32,
    range: u32,
    rank: u32,
    transformation: Transformation,
    space_dim: u32,
    physical_range: u32,
    physical_rank: u32,
}

impl SpaceDescriptor {
    /// Build a row and compute its derived quantities.
    ///
    /// `dim + codim` must fit in a `u32`. The seed reader rejects rows
    /// where it does not.
    pub fn new(dim: u32, codim: u32, range: u32, rank: u32, transformation: Transformation) -> Self {
        let space_dim = dim + codim;
        Self {
            dim,
            codim,
            range,
            rank,
            transformation,
            space_dim,
            physical_range: transformation.physical_range(range, space_dim),
            physical_rank: transformation.physical_rank(rank),
        }
    }

    /// Parametric (reference) dimension.
    pub fn dim(&self) -> u32 {
        self.dim
    }

    /// Embedding codimension.
    pub fn codim(&self) -> u32 {
        self.codim
    }

    /// Range of the reference-space value.
    pub fn range(&self) -> u32 {
        self.range
    }

    /// Rank of the reference-space value.
    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// Push-forward kind.
    pub fn transformation(&self) -> Transformation {
        self.transformation
    }

    /// `dim + codim`.
    pub fn space_dim(&self) -> u32 {
        self.space_dim
    }

    /// Range of the physical value after the push-forward.
    pub fn physical_range(&self) -> u32 {
        self.physical_range
    }

    /// Rank of the physical value after the push-forward.
    pub fn physical_rank(&self) -> u32 {
        self.physical_rank
    }

    /// The codimension-one boundary restriction of this space.
    ///
    /// Returns `None` for `dim == 0`: a point has no faces.
    pub fn face(&self) -> Option<Self> {
        let dim = self.dim.checked_sub(1)?;
        Some(Self::new(
            dim,
            self.codim + 1,
            self.range,
            self.rank,
            self.transformation,
        ))
    }

    /// The pure reference-space view: codimension 0, `h_grad`.
    pub fn reference(&self) -> Self {
        Self::new(self.dim, 0, self.range, self.rank, Transformation::HGrad)
    }

    /// The mapping this space is defined on.
    pub fn mapping(&self) -> MappingDims {
        MappingDims::new(self.dim, self.codim)
    }

    /// `(dim, range, rank)` of the underlying reference space.
    pub fn ref_space_dims(&self) -> RefSpaceDims {
        RefSpaceDims {
            dim: self.dim,
            range: self.range,
            rank: self.rank,
        }
    }

    /// Function shape on the parametric domain.
    pub fn reference_function(&self) -> FunctionDims {
        FunctionDims::new(self.dim, self.range, self.rank)
    }

    /// Function shape on the physical domain.
    pub fn physical_function(&self) -> FunctionDims {
        FunctionDims::new(self.space_dim, self.physical_range, self.physical_rank)
    }
}

/// `(dim, codim)` of a geometric mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MappingDims {
    /// Parametric dimension.
    pub dim: u32,
    /// Codimension of the image.
    pub codim: u32,
}

impl MappingDims {
    /// Create a mapping descriptor.
    pub fn new(dim: u32, codim: u32) -> Self {
        Self { dim, codim }
    }

    /// Dimension of the space the mapping's image lives in.
    pub fn space_dim(&self) -> u32 {
        self.dim + self.codim
    }

    /// The mapping viewed as a function from its domain to its image.
    pub fn forward(&self) -> FunctionDims {
        FunctionDims::new(self.dim, self.space_dim(), 1)
    }

    /// The function shape of the inverse map, image back to domain.
    pub fn inverse(&self) -> FunctionDims {
        FunctionDims::new(self.space_dim(), self.dim, 1)
    }
}

/// `(dim, range, rank)` of a function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionDims {
    /// Domain dimension.
    pub dim: u32,
    /// Value range.
    pub range: u32,
    /// Value rank.
    pub rank: u32,
}

impl FunctionDims {
    /// Create a function descriptor.
    pub fn new(dim: u32, range: u32, rank: u32) -> Self {
        Self { dim, range, rank }
    }
}

/// `(dim, range, rank)` of a reference (spline) space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RefSpaceDims {
    /// Parametric dimension.
    pub dim: u32,
    /// Value range.
    pub range: u32,
    /// Value rank.
    pub rank: u32,
}
