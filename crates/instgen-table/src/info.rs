//! The instantiation table object consumed by the emitters.

use std::path::Path;

use instgen_core::{
    DerivativeDescriptor, DerivativeOrder, FunctionDims, InstantiationError, MappingDims,
    SpaceDescriptor, ValueDescriptor,
};

use crate::config::GeneratorConfig;
use crate::containers::ContainerTable;
use crate::derivatives::TensorTypes;
use crate::dims::DimensionTables;
use crate::physical::SpaceFamilies;
use crate::seed::read_seed_file;
use crate::space_table::SpaceTable;

/// Every table needed to emit explicit instantiations.
///
/// Built once by running the pipeline stages in order; read-only
/// afterwards. Two builds from the same input compare equal and list
/// every table in the same order.
///
/// # Examples
///
/// ```
/// use instgen_core::{DerivativeOrder, SpaceDescriptor, Transformation};
/// use instgen_table::InstantiationInfo;
///
/// let seeds = [SpaceDescriptor::new(2, 0, 2, 1, Transformation::HGrad)];
/// let info = InstantiationInfo::new(&seeds, DerivativeOrder::new(1));
/// assert_eq!(info.domain_dims(), &[2, 1]);
/// assert!(!info.derivatives().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstantiationInfo {
    max_der_order: DerivativeOrder,
    spaces: SpaceTable,
    dims: DimensionTables,
    tensors: TensorTypes,
    containers: ContainerTable,
    families: SpaceFamilies,
}

impl InstantiationInfo {
    /// Run the derivation pipeline over `seeds`.
    pub fn new(seeds: &[SpaceDescriptor], max_der_order: DerivativeOrder) -> Self {
        let _span = tracing::debug_span!(
            "instantiation_info",
            seeds = seeds.len(),
            max_der_order = %max_der_order
        )
        .entered();

        let spaces = SpaceTable::build(seeds);
        let dims = DimensionTables::build(&spaces);
        let tensors =
            TensorTypes::enumerate(dims.function_dims(), dims.mapping_dims(), max_der_order);
        let containers = ContainerTable::enumerate(spaces.all(), &tensors);
        let families = SpaceFamilies::build(&spaces, &dims);
        Self {
            max_der_order,
            spaces,
            dims,
            tensors,
            containers,
            families,
        }
    }

    /// Read `path` and build the tables, validating `max_der_order` first.
    pub fn from_seed_file(
        path: impl AsRef<Path>,
        max_der_order: i64,
    ) -> Result<Self, InstantiationError> {
        let order = DerivativeOrder::try_from(max_der_order)?;
        let seeds = read_seed_file(path)?;
        Ok(Self::new(&seeds, order))
    }

    /// Build the tables described by `config`.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, InstantiationError> {
        let order = config.validate()?;
        let seeds = read_seed_file(&config.config_file)?;
        Ok(Self::new(&seeds, order))
    }

    /// Highest derivative order enumerated.
    pub fn max_der_order(&self) -> DerivativeOrder {
        self.max_der_order
    }

    /// Physical space tables.
    pub fn spaces(&self) -> &SpaceTable {
        &self.spaces
    }

    /// Mapping, function and reference-space dimension tables.
    pub fn dims(&self) -> &DimensionTables {
        &self.dims
    }

    /// Derivative and value tensor types.
    pub fn tensors(&self) -> &TensorTypes {
        &self.tensors
    }

    /// Container parametrizations.
    pub fn containers(&self) -> &ContainerTable {
        &self.containers
    }

    /// Reference, push-forward and physical space families.
    pub fn families(&self) -> &SpaceFamilies {
        &self.families
    }

    /// See [`SpaceTable::user`].
    pub fn user(&self) -> &[SpaceDescriptor] {
        self.spaces.user()
    }

    /// See [`SpaceTable::face`].
    pub fn face(&self) -> &[SpaceDescriptor] {
        self.spaces.face()
    }

    /// See [`SpaceTable::all`].
    pub fn all(&self) -> &[SpaceDescriptor] {
        self.spaces.all()
    }

    /// See [`SpaceTable::extended`].
    pub fn extended(&self) -> &[SpaceDescriptor] {
        self.spaces.extended()
    }

    /// See [`SpaceTable::domain_dims`].
    pub fn domain_dims(&self) -> &[u32] {
        self.spaces.domain_dims()
    }

    /// See [`DimensionTables::mapping_dims`].
    pub fn mapping_dims(&self) -> &[MappingDims] {
        self.dims.mapping_dims()
    }

    /// See [`DimensionTables::user_mapping_dims`].
    pub fn user_mapping_dims(&self) -> &[MappingDims] {
        self.dims.user_mapping_dims()
    }

    /// See [`DimensionTables::function_dims`].
    pub fn function_dims(&self) -> &[FunctionDims] {
        self.dims.function_dims()
    }

    /// See [`TensorTypes::derivatives`].
    pub fn derivatives(&self) -> &[DerivativeDescriptor] {
        self.tensors.derivatives()
    }

    /// See [`TensorTypes::values`].
    pub fn values(&self) -> &[ValueDescriptor] {
        self.tensors.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use instgen_core::Transformation::HGrad;

    #[test]
    fn empty_seed_list_gives_empty_tables() {
        let info = InstantiationInfo::new(&[], DerivativeOrder::new(2));
        assert!(info.all().is_empty());
        assert!(info.extended().is_empty());
        assert!(info.domain_dims().is_empty());
        assert!(info.mapping_dims().is_empty());
        assert!(info.function_dims().is_empty());
        assert!(info.derivatives().is_empty());
        assert!(info.values().is_empty());
        assert!(info.containers().dims().is_empty());
        assert!(info.containers().dynamic_multi_arrays().is_empty());
        assert!(info.containers().cartesian_product_arrays().is_empty());
        assert!(info.containers().value_vectors().is_empty());
        assert!(info.containers().value_tables().is_empty());
        assert!(info.families().push_forwards().is_empty());
        assert!(info.families().physical_spaces().is_empty());
    }

    #[test]
    fn negative_order_rejected_before_reading() {
        let err = InstantiationInfo::from_seed_file("/does/not/exist.txt", -2).unwrap_err();
        assert!(matches!(
            err,
            InstantiationError::InvalidDerivativeOrder { value: -2 }
        ));
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let err = InstantiationInfo::from_seed_file("/does/not/exist.txt", 1).unwrap_err();
        assert!(matches!(err, InstantiationError::ConfigNotFound { .. }));
    }

    #[test]
    fn rebuild_is_identical() {
        let seeds = [
            SpaceDescriptor::new(3, 0, 3, 1, HGrad),
            SpaceDescriptor::new(2, 1, 1, 1, HGrad),
        ];
        let a = InstantiationInfo::new(&seeds, DerivativeOrder::new(2));
        let b = InstantiationInfo::new(&seeds, DerivativeOrder::new(2));
        assert_eq!(a, b);
    }
}
