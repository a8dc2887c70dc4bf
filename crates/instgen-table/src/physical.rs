//! Reference spaces, push-forwards and the physical spaces built from them.

use instgen_core::{unique, RefSpaceDims, SpaceDescriptor, Transformation};

use crate::dims::DimensionTables;
use crate::space_table::SpaceTable;

/// Kind of spline basis a reference space is built on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SplineKind {
    /// Polynomial B-splines.
    BSpline,
    /// Rational B-splines.
    Nurbs,
}

impl SplineKind {
    /// Every spline kind, in enumeration order.
    pub const ALL: [SplineKind; 2] = [SplineKind::BSpline, SplineKind::Nurbs];
}

/// A reference space: a spline kind on `(dim, range, rank)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RefSpace {
    /// Spline basis kind.
    pub kind: SplineKind,
    /// Dimension, range and rank.
    pub dims: RefSpaceDims,
}

/// A push-forward of a given kind on a `(dim, codim)` mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PushForward {
    /// Transformation kind.
    pub transformation: Transformation,
    /// Parametric dimension.
    pub dim: u32,
    /// Codimension.
    pub codim: u32,
}

impl PushForward {
    /// The push-forward a space row is mapped with.
    pub fn of(sp: &SpaceDescriptor) -> Self {
        Self {
            transformation: sp.transformation(),
            dim: sp.dim(),
            codim: sp.codim(),
        }
    }
}

/// A reference space pushed forward onto the physical domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PhysicalSpace {
    /// The reference space.
    pub ref_space: RefSpace,
    /// How its values are mapped.
    pub push_forward: PushForward,
}

/// Reference, push-forward and physical space families.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpaceFamilies {
    ref_spaces: Vec<RefSpace>,
    user_ref_spaces: Vec<RefSpace>,
    user_filtered_ref_spaces: Vec<RefSpace>,
    push_forwards: Vec<PushForward>,
    physical_spaces: Vec<PhysicalSpace>,
    user_physical_spaces: Vec<PhysicalSpace>,
}

impl SpaceFamilies {
    /// Build every family from the space and dimension tables.
    pub fn build(spaces: &SpaceTable, dims: &DimensionTables) -> Self {
        Self {
            ref_spaces: ref_spaces(dims.ref_space_dims()),
            user_ref_spaces: ref_spaces(dims.user_ref_space_dims()),
            user_filtered_ref_spaces: ref_spaces(dims.user_filtered_ref_space_dims()),
            push_forwards: unique(spaces.all().iter().map(PushForward::of)),
            physical_spaces: physical_spaces(spaces.all()),
            user_physical_spaces: physical_spaces(spaces.user()),
        }
    }

    /// Reference spaces underlying the closure.
    pub fn ref_spaces(&self) -> &[RefSpace] {
        &self.ref_spaces
    }

    /// Reference spaces underlying the user spaces.
    pub fn user_ref_spaces(&self) -> &[RefSpace] {
        &self.user_ref_spaces
    }

    /// User reference spaces that can carry a spline mapping.
    pub fn user_filtered_ref_spaces(&self) -> &[RefSpace] {
        &self.user_filtered_ref_spaces
    }

    /// Push-forwards of the closure.
    pub fn push_forwards(&self) -> &[PushForward] {
        &self.push_forwards
    }

    /// Physical spaces of the closure.
    pub fn physical_spaces(&self) -> &[PhysicalSpace] {
        &self.physical_spaces
    }

    /// Physical spaces of the user rows.
    pub fn user_physical_spaces(&self) -> &[PhysicalSpace] {
        &self.user_physical_spaces
    }
}

/// Every spline kind on every `dims` entry, kinds outermost.
pub fn ref_spaces(dims: &[RefSpaceDims]) -> Vec<RefSpace> {
    unique(
        SplineKind::ALL
            .into_iter()
            .flat_map(|kind| dims.iter().map(move |&d| RefSpace { kind, dims: d })),
    )
}

/// Every spline kind on every row, pushed forward with the row's
/// transformation.
pub fn physical_spaces(rows: &[SpaceDescriptor]) -> Vec<PhysicalSpace> {
    unique(SplineKind::ALL.into_iter().flat_map(|kind| {
        rows.iter().map(move |sp| PhysicalSpace {
            ref_space: RefSpace {
                kind,
                dims: sp.ref_space_dims(),
            },
            push_forward: PushForward::of(sp),
        })
    }))
}
