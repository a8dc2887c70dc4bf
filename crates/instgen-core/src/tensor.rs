//! Tensor-type descriptors for instantiated values and derivatives.

use std::fmt;
use std::ops::RangeInclusive;

use crate::descriptor::FunctionDims;
use crate::error::InstantiationError;

/// Inclusive upper bound of the derivative orders to enumerate.
///
/// Constructed from the raw configuration value through
/// [`TryFrom<i64>`], which rejects negative orders.
///
/// # Examples
///
/// ```
/// use instgen_core::DerivativeOrder;
///
/// let max = DerivativeOrder::try_from(2).unwrap();
/// assert_eq!(max.orders().collect::<Vec<_>>(), vec![0, 1, 2]);
/// assert!(DerivativeOrder::try_from(-1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DerivativeOrder(u32);

impl DerivativeOrder {
    /// Create from a known non-negative order.
    pub fn new(max: u32) -> Self {
        Self(max)
    }

    /// The maximum order.
    pub fn max(self) -> u32 {
        self.0
    }

    /// Every order from 0 to the maximum, inclusive.
    pub fn orders(self) -> RangeInclusive<u32> {
        0..=self.0
    }
}

impl TryFrom<i64> for DerivativeOrder {
    type Error = InstantiationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| InstantiationError::InvalidDerivativeOrder { value })
    }
}

impl fmt::Display for DerivativeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A differentiated tensor-valued quantity: the `order`-th derivative,
/// over a `dim`-dimensional domain, of a `(range, rank)` tensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DerivativeDescriptor {
    /// Derivative order.
    pub order: u32,
    /// Domain dimension the derivative is taken over.
    pub dim: u32,
    /// Range of the differentiated value.
    pub range: u32,
    /// Rank of the differentiated value.
    pub rank: u32,
}

impl DerivativeDescriptor {
    /// Descriptor of the `order`-th derivative of a function.
    pub fn of(order: u32, function: FunctionDims) -> Self {
        Self {
            order,
            dim: function.dim,
            range: function.range,
            rank: function.rank,
        }
    }
}

/// An undifferentiated `(range, rank)` tensor value.
///
/// The domain dimension does not appear in the value type, so two
/// functions that differ only in `dim` share one value descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueDescriptor {
    /// Value range.
    pub range: u32,
    /// Value rank.
    pub rank: u32,
}

impl ValueDescriptor {
    /// Value type of a function.
    pub fn of(function: FunctionDims) -> Self {
        Self {
            range: function.range,
            rank: function.rank,
        }
    }
}

/// Either a derivative or a value tensor type.
///
/// Container families that store "values or derivatives" are
/// parametrized over this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TensorValue {
    /// A derivative tensor.
    Derivative(DerivativeDescriptor),
    /// A value tensor.
    Value(ValueDescriptor),
}

impl From<DerivativeDescriptor> for TensorValue {
    fn from(d: DerivativeDescriptor) -> Self {
        Self::Derivative(d)
    }
}

impl From<ValueDescriptor> for TensorValue {
    fn from(v: ValueDescriptor) -> Self {
        Self::Value(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_order_is_valid() {
        let max = DerivativeOrder::try_from(0).unwrap();
        assert_eq!(max.orders().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn negative_order_is_rejected() {
        assert!(matches!(
            DerivativeOrder::try_from(-3),
            Err(InstantiationError::InvalidDerivativeOrder { value: -3 })
        ));
    }

    #[test]
    fn order_beyond_u32_is_rejected() {
        let too_big = i64::from(u32::MAX) + 1;
        assert!(DerivativeOrder::try_from(too_big).is_err());
    }

    #[test]
    fn value_ignores_domain_dim() {
        let a = ValueDescriptor::of(FunctionDims::new(1, 2, 1));
        let b = ValueDescriptor::of(FunctionDims::new(3, 2, 1));
        assert_eq!(a, b);
    }
}
