//! Order-preserving de-duplication.
//!
//! Generated declarations are emitted in table order, so every table is
//! de-duplicated by keeping the first occurrence of each element. A
//! plain hash set would reorder rows between runs.

use std::hash::Hash;

use indexmap::IndexSet;

/// Collect `items`, dropping every element equal to one seen earlier.
///
/// # Examples
///
/// ```
/// use instgen_core::unique;
///
/// assert_eq!(unique([3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn unique<T, I>(items: I) -> Vec<T>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect::<IndexSet<T>>().into_iter().collect()
}
