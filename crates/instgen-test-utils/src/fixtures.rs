//! Reusable seed tables.
//!
//! - [`scalar_2d`]: one scalar `h_grad` space on a planar domain.
//! - [`vector_2d`]: a planar vector field, the smallest non-trivial closure.
//! - [`surface_scalar`]: a scalar on a surface in 3-space.
//! - [`mixed_3d`]: several solid and surface spaces with both transforms.

use instgen_core::SpaceDescriptor;
use instgen_core::Transformation::{HDiv, HGrad};

pub fn scalar_2d() -> Vec<SpaceDescriptor> {
    vec![SpaceDescriptor::new(2, 0, 1, 1, HGrad)]
}

pub fn vector_2d() -> Vec<SpaceDescriptor> {
    vec![SpaceDescriptor::new(2, 0, 2, 1, HGrad)]
}

pub fn surface_scalar() -> Vec<SpaceDescriptor> {
    vec![SpaceDescriptor::new(2, 1, 1, 1, HGrad)]
}

pub fn mixed_3d() -> Vec<SpaceDescriptor> {
    vec![
        SpaceDescriptor::new(3, 0, 1, 1, HGrad),
        SpaceDescriptor::new(3, 0, 3, 1, HGrad),
        SpaceDescriptor::new(3, 0, 3, 1, HDiv),
        SpaceDescriptor::new(2, 1, 1, 1, HGrad),
        SpaceDescriptor::new(1, 2, 1, 1, HGrad),
    ]
}

/// Seed file text for [`vector_2d`], with comments and blank lines.
pub const VECTOR_2D_TEXT: &str = "\
# dim codim range rank transformation
2 0 2 1 h_grad

";

/// Seed file text for [`mixed_3d`].
pub const MIXED_3D_TEXT: &str = "\
# solids
3 0 1 1 h_grad
3 0 3 1 h_grad
3 0 3 1 h_div
   # embedded
2 1 1 1 h_grad
1 2 1 1 h_grad
";
