//! Derivative and value tensor-type enumeration.

use indexmap::IndexSet;
use instgen_core::{
    DerivativeDescriptor, DerivativeOrder, FunctionDims, MappingDims, TensorValue, ValueDescriptor,
};

/// Scalar function on a zero-dimensional domain, always enumerated.
pub const POINT_SCALAR: FunctionDims = FunctionDims {
    dim: 0,
    range: 0,
    rank: 1,
};

/// Value and derivative tensor types required by the function table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TensorTypes {
    derivatives: Vec<DerivativeDescriptor>,
    values: Vec<ValueDescriptor>,
}

impl TensorTypes {
    /// Enumerate tensor types for every order in `0..=max_order`.
    ///
    /// The working set is the function table, then the forward shape of
    /// every mapping, then [`POINT_SCALAR`]. The outer loop runs over
    /// orders and the inner loop over the working set; both output lists
    /// keep first occurrences.
    ///
    /// With no functions and no mappings there is nothing to evaluate and
    /// both lists are empty.
    pub fn enumerate(
        function_dims: &[FunctionDims],
        mapping_dims: &[MappingDims],
        max_order: DerivativeOrder,
    ) -> Self {
        if function_dims.is_empty() && mapping_dims.is_empty() {
            return Self::default();
        }

        let working: Vec<FunctionDims> = function_dims
            .iter()
            .copied()
            .chain(mapping_dims.iter().map(MappingDims::forward))
            .chain(std::iter::once(POINT_SCALAR))
            .collect();

        let mut derivatives = IndexSet::new();
        let mut values = IndexSet::new();
        for order in max_order.orders() {
            for &function in &working {
                derivatives.insert(derivative_of_order(order, function));
                values.insert(ValueDescriptor::of(function));
            }
        }

        let types = Self {
            derivatives: derivatives.into_iter().collect(),
            values: values.into_iter().collect(),
        };
        tracing::debug!(
            max_order = %max_order,
            derivatives = types.derivatives.len(),
            values = types.values.len(),
            "enumerated tensor types"
        );
        types
    }

    /// Derivative tensor types, in enumeration order.
    pub fn derivatives(&self) -> &[DerivativeDescriptor] {
        &self.derivatives
    }

    /// Value tensor types, in enumeration order.
    pub fn values(&self) -> &[ValueDescriptor] {
        &self.values
    }

    /// Every derivative followed by every value.
    pub fn tensor_values(&self) -> impl Iterator<Item = TensorValue> + '_ {
        self.derivatives
            .iter()
            .copied()
            .map(TensorValue::from)
            .chain(self.values.iter().copied().map(TensorValue::from))
    }
}

/// Descriptor of the `order`-th derivative of `function`.
///
/// Order 0 goes through [`zero_order_derivative`].
pub fn derivative_of_order(order: u32, function: FunctionDims) -> DerivativeDescriptor {
    if order == 0 {
        zero_order_derivative(function)
    } else {
        DerivativeDescriptor::of(order, function)
    }
}

/// Degenerate zeroth derivative: a first derivative over a
/// one-dimensional domain, keeping `range` and `rank`.
///
/// The native tensor type has no order-0 form. Whether order 0 should
/// mean anything else is still open; keep every caller routed through
/// here.
pub fn zero_order_derivative(function: FunctionDims) -> DerivativeDescriptor {
    DerivativeDescriptor {
        order: 1,
        dim: 1,
        range: function.range,
        rank: function.rank,
    }
}
