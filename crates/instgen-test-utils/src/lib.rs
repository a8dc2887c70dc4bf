//! Test utilities for instgen development.
//!
//! Seed fixtures live in [`fixtures`]; this module holds assertions over
//! built tables that several crates' tests rely on.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;
use instgen_core::{unique, SpaceDescriptor, Transformation};
use instgen_table::{InstantiationInfo, SpaceTable};

/// Panic if `items` contains the same entry twice.
pub fn assert_no_duplicates<T: Hash + Eq + Debug>(table: &str, items: &[T]) {
    let mut seen = IndexSet::with_capacity(items.len());
    for item in items {
        assert!(seen.insert(item), "{table}: duplicate entry {item:?}");
    }
}

/// Panic unless `all` is exactly `user` followed by the new face rows.
pub fn assert_closure(spaces: &SpaceTable) {
    let expected = unique(spaces.user().iter().chain(spaces.face()).copied());
    assert_eq!(spaces.all(), expected.as_slice(), "all != user ∪ face");
    for sp in spaces.user() {
        if sp.dim() > 0 {
            let face = SpaceDescriptor::new(
                sp.dim() - 1,
                sp.codim() + 1,
                sp.range(),
                sp.rank(),
                sp.transformation(),
            );
            assert!(spaces.face().contains(&face), "missing face of {sp:?}");
        }
    }
}

/// Panic unless every extended row is a codim-0 `h_grad` view of some
/// row of `all`.
pub fn assert_extended_is_reference(spaces: &SpaceTable) {
    for ext in spaces.extended() {
        assert_eq!(ext.codim(), 0, "extended row {ext:?} has codim");
        assert_eq!(ext.transformation(), Transformation::HGrad);
        assert!(
            spaces.all().iter().any(|sp| sp.reference() == *ext),
            "extended row {ext:?} has no source row"
        );
    }
}

/// Panic if any row breaks `space_dim == dim + codim`.
pub fn assert_space_dims(rows: &[SpaceDescriptor]) {
    for sp in rows {
        assert_eq!(sp.space_dim(), sp.dim() + sp.codim(), "{sp:?}");
    }
}

/// Run every table invariant over a built [`InstantiationInfo`].
pub fn assert_table_invariants(info: &InstantiationInfo) {
    let spaces = info.spaces();
    assert_no_duplicates("user", spaces.user());
    assert_no_duplicates("face", spaces.face());
    assert_no_duplicates("all", spaces.all());
    assert_no_duplicates("extended", spaces.extended());
    assert_no_duplicates("domain_dims", spaces.domain_dims());
    assert_no_duplicates("mapping_dims", info.mapping_dims());
    assert_no_duplicates("function_dims", info.function_dims());
    assert_no_duplicates("derivatives", info.derivatives());
    assert_no_duplicates("values", info.values());

    let containers = info.containers();
    assert_no_duplicates("dynamic_multi_arrays", containers.dynamic_multi_arrays());
    assert_no_duplicates("cartesian_product_arrays", containers.cartesian_product_arrays());
    assert_no_duplicates("value_vectors", containers.value_vectors());
    assert_no_duplicates("value_tables", containers.value_tables());

    let families = info.families();
    assert_no_duplicates("ref_spaces", families.ref_spaces());
    assert_no_duplicates("push_forwards", families.push_forwards());
    assert_no_duplicates("physical_spaces", families.physical_spaces());

    assert_closure(spaces);
    assert_extended_is_reference(spaces);
    assert_space_dims(spaces.all());

    for d in info.derivatives() {
        assert!(d.order >= 1, "derivative {d:?} has order 0");
    }
}
