//! Derived dimension tables: mappings, functions and reference spaces.
//!
//! Each table is a projection over the space tables, de-duplicated with
//! first-occurrence order.

use instgen_core::{unique, FunctionDims, MappingDims, RefSpaceDims, SpaceDescriptor};

use crate::space_table::SpaceTable;

/// Dimension tuples projected from a [`SpaceTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DimensionTables {
    mapping_dims: Vec<MappingDims>,
    user_mapping_dims: Vec<MappingDims>,
    function_dims: Vec<FunctionDims>,
    ref_space_dims: Vec<RefSpaceDims>,
    user_ref_space_dims: Vec<RefSpaceDims>,
    user_filtered_ref_space_dims: Vec<RefSpaceDims>,
}

impl DimensionTables {
    /// Project every dimension table out of `spaces`.
    pub fn build(spaces: &SpaceTable) -> Self {
        let all_mappings = mapping_dims(spaces.all());
        let tables = Self {
            function_dims: function_dims(spaces.all(), &all_mappings),
            user_mapping_dims: mapping_dims(spaces.user()),
            ref_space_dims: ref_space_dims(spaces.all()),
            user_ref_space_dims: ref_space_dims(spaces.user()),
            user_filtered_ref_space_dims: unique(
                spaces
                    .user()
                    .iter()
                    .filter(|sp| sp.dim() >= sp.range())
                    .map(SpaceDescriptor::ref_space_dims),
            ),
            mapping_dims: all_mappings,
        };
        tracing::debug!(
            mappings = tables.mapping_dims.len(),
            functions = tables.function_dims.len(),
            ref_spaces = tables.ref_space_dims.len(),
            "built dimension tables"
        );
        tables
    }

    /// Mappings needed by every space in the closure.
    pub fn mapping_dims(&self) -> &[MappingDims] {
        &self.mapping_dims
    }

    /// Mappings needed by the user spaces only.
    pub fn user_mapping_dims(&self) -> &[MappingDims] {
        &self.user_mapping_dims
    }

    /// Every function shape that must be evaluable.
    pub fn function_dims(&self) -> &[FunctionDims] {
        &self.function_dims
    }

    /// Reference spaces underlying the closure.
    pub fn ref_space_dims(&self) -> &[RefSpaceDims] {
        &self.ref_space_dims
    }

    /// Reference spaces underlying the user spaces.
    pub fn user_ref_space_dims(&self) -> &[RefSpaceDims] {
        &self.user_ref_space_dims
    }

    /// User reference spaces with `dim >= range`: the ones a spline
    /// mapping can be built from.
    pub fn user_filtered_ref_space_dims(&self) -> &[RefSpaceDims] {
        &self.user_filtered_ref_space_dims
    }
}

/// Distinct `(dim, codim)` pairs over `rows`.
pub fn mapping_dims(rows: &[SpaceDescriptor]) -> Vec<MappingDims> {
    unique(rows.iter().map(SpaceDescriptor::mapping))
}

/// Reference and physical function shapes of every row, then the forward
/// and inverse shapes of every mapping.
pub fn function_dims(rows: &[SpaceDescriptor], mappings: &[MappingDims]) -> Vec<FunctionDims> {
    let spaces = rows
        .iter()
        .flat_map(|sp| [sp.reference_function(), sp.physical_function()]);
    let maps = mappings.iter().flat_map(|m| [m.forward(), m.inverse()]);
    unique(spaces.chain(maps))
}

/// Distinct `(dim, range, rank)` over `rows`.
pub fn ref_space_dims(rows: &[SpaceDescriptor]) -> Vec<RefSpaceDims> {
    unique(rows.iter().map(SpaceDescriptor::ref_space_dims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use instgen_core::Transformation::{HDiv, HGrad};

    #[test]
    fn scalar_surface_tables() {
        let spaces = SpaceTable::build(&[SpaceDescriptor::new(2, 0, 1, 1, HGrad)]);
        let dims = DimensionTables::build(&spaces);

        assert_eq!(
            dims.mapping_dims(),
            &[MappingDims::new(2, 0), MappingDims::new(1, 1)]
        );
        assert_eq!(dims.user_mapping_dims(), &[MappingDims::new(2, 0)]);
        assert_eq!(
            dims.function_dims(),
            &[
                // spaces: (2,1,1) ref + phys coincide, face (1,1,1) ref, (2,1,1) phys
                FunctionDims::new(2, 1, 1),
                FunctionDims::new(1, 1, 1),
                // mapping (2,0): forward (2,2,1), inverse (2,2,1)
                FunctionDims::new(2, 2, 1),
                // mapping (1,1): forward (1,2,1), inverse (2,1,1)
                FunctionDims::new(1, 2, 1),
            ]
        );
    }

    #[test]
    fn h_div_physical_function_uses_space_dim() {
        let rows = [SpaceDescriptor::new(2, 1, 2, 1, HDiv)];
        let f = function_dims(&rows, &[]);
        assert_eq!(f, vec![FunctionDims::new(2, 2, 1), FunctionDims::new(3, 3, 1)]);
    }

    #[test]
    fn user_filter_keeps_dim_at_least_range() {
        let spaces = SpaceTable::build(&[
            SpaceDescriptor::new(2, 0, 1, 1, HGrad),
            SpaceDescriptor::new(2, 0, 3, 1, HGrad),
            SpaceDescriptor::new(3, 0, 3, 1, HGrad),
        ]);
        let dims = DimensionTables::build(&spaces);
        let kept: Vec<_> = dims
            .user_filtered_ref_space_dims()
            .iter()
            .map(|d| (d.dim, d.range))
            .collect();
        assert_eq!(kept, vec![(2, 1), (3, 3)]);
        assert_eq!(dims.user_ref_space_dims().len(), 3);
    }

    #[test]
    fn empty_tables() {
        let dims = DimensionTables::build(&SpaceTable::build(&[]));
        assert!(dims.mapping_dims().is_empty());
        assert!(dims.function_dims().is_empty());
        assert!(dims.ref_space_dims().is_empty());
    }
}
