//! Space table builder: the closure of the user's physical spaces.
//!
//! Each stage is a pure function over the rows produced by the stage
//! before it. [`SpaceTable::build`] runs them in order:
//!
//! ```text
//! seeds ──► user ──► face ──► all = user ∪ face ──► extended
//!                                   │
//!                                   └──► domain dims
//! ```
//!
//! Every table is de-duplicated keeping first occurrences, so a fixed
//! seed list always yields the same rows in the same order.

use instgen_core::{unique, SpaceDescriptor};

/// The physical-space tables derived from a seed list.
///
/// # Examples
///
/// ```
/// use instgen_core::{SpaceDescriptor, Transformation::HGrad};
/// use instgen_table::SpaceTable;
///
/// let table = SpaceTable::build(&[SpaceDescriptor::new(2, 0, 2, 1, HGrad)]);
/// assert_eq!(table.face(), &[SpaceDescriptor::new(1, 1, 2, 1, HGrad)]);
/// assert_eq!(table.all().len(), 2);
/// assert_eq!(table.domain_dims(), &[2, 1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpaceTable {
    user: Vec<SpaceDescriptor>,
    face: Vec<SpaceDescriptor>,
    all: Vec<SpaceDescriptor>,
    extended: Vec<SpaceDescriptor>,
    domain_dims: Vec<u32>,
    user_domain_dims: Vec<u32>,
    face_domain_dims: Vec<u32>,
}

impl SpaceTable {
    /// Derive every space table from the seed rows.
    ///
    /// An empty seed list gives empty tables.
    pub fn build(seeds: &[SpaceDescriptor]) -> Self {
        let user = unique(seeds.iter().copied());
        let face = face_table(&user);
        let all = closure(&user, &face);
        let extended = extended_table(&all);
        let table = Self {
            domain_dims: domain_dims(&all),
            user_domain_dims: domain_dims(&user),
            face_domain_dims: domain_dims(&face),
            user,
            face,
            all,
            extended,
        };
        tracing::debug!(
            user = table.user.len(),
            face = table.face.len(),
            all = table.all.len(),
            extended = table.extended.len(),
            "built space table"
        );
        table
    }

    /// The spaces listed in the seed file.
    pub fn user(&self) -> &[SpaceDescriptor] {
        &self.user
    }

    /// Faces of the user spaces.
    pub fn face(&self) -> &[SpaceDescriptor] {
        &self.face
    }

    /// User spaces followed by their faces; the working closure every
    /// later table is derived from.
    pub fn all(&self) -> &[SpaceDescriptor] {
        &self.all
    }

    /// Reference-space view of every row of [`all`](Self::all).
    pub fn extended(&self) -> &[SpaceDescriptor] {
        &self.extended
    }

    /// Distinct parametric dimensions in [`all`](Self::all).
    pub fn domain_dims(&self) -> &[u32] {
        &self.domain_dims
    }

    /// Distinct parametric dimensions in [`user`](Self::user).
    pub fn user_domain_dims(&self) -> &[u32] {
        &self.user_domain_dims
    }

    /// Distinct parametric dimensions in [`face`](Self::face).
    pub fn face_domain_dims(&self) -> &[u32] {
        &self.face_domain_dims
    }

    /// Rows whose push-forward must be instantiated: [`all`](Self::all)
    /// followed by [`extended`](Self::extended), de-duplicated.
    pub fn push_forward_rows(&self) -> Vec<SpaceDescriptor> {
        unique(self.all.iter().chain(&self.extended).copied())
    }

    /// Returns `true` if no physical space was configured.
    pub fn is_empty(&self) -> bool {
        self.user.is_empty()
    }
}

/// One face row per distinct user row.
///
/// Zero-dimensional rows have no face and are skipped with a warning.
pub fn face_table(user: &[SpaceDescriptor]) -> Vec<SpaceDescriptor> {
    unique(user.iter().filter_map(|sp| {
        let face = sp.face();
        if face.is_none() {
            tracing::warn!(
                dim = sp.dim(),
                codim = sp.codim(),
                "zero-dimensional space has no face; skipping"
            );
        }
        face
    }))
}

/// `user ∪ face`, user rows first.
pub fn closure(user: &[SpaceDescriptor], face: &[SpaceDescriptor]) -> Vec<SpaceDescriptor> {
    unique(user.iter().chain(face).copied())
}

/// The reference-space view (codim 0, `h_grad`) of each row.
pub fn extended_table(all: &[SpaceDescriptor]) -> Vec<SpaceDescriptor> {
    unique(all.iter().map(SpaceDescriptor::reference))
}

/// Distinct `dim` values, in order of first appearance.
pub fn domain_dims(rows: &[SpaceDescriptor]) -> Vec<u32> {
    unique(rows.iter().map(SpaceDescriptor::dim))
}

#[cfg(test)]
mod tests {
    use super::*;
    use instgen_core::Transformation::{HDiv, HGrad};

    #[test]
    fn single_seed_scenario() {
        let seed = SpaceDescriptor::new(2, 0, 2, 1, HGrad);
        let t = SpaceTable::build(&[seed]);
        let face = SpaceDescriptor::new(1, 1, 2, 1, HGrad);
        assert_eq!(t.user(), &[seed]);
        assert_eq!(t.face(), &[face]);
        assert_eq!(t.all(), &[seed, face]);
        assert_eq!(t.extended(), &[seed, SpaceDescriptor::new(1, 0, 2, 1, HGrad)]);
        assert_eq!(t.domain_dims(), &[2, 1]);
        assert_eq!(t.user_domain_dims(), &[2]);
        assert_eq!(t.face_domain_dims(), &[1]);
    }

    #[test]
    fn empty_seeds_give_empty_tables() {
        let t = SpaceTable::build(&[]);
        assert!(t.is_empty());
        assert!(t.face().is_empty());
        assert!(t.all().is_empty());
        assert!(t.extended().is_empty());
        assert!(t.domain_dims().is_empty());
        assert!(t.push_forward_rows().is_empty());
    }

    #[test]
    fn distinct_users_sharing_a_face() {
        // A repeated seed collapses; the (1,1) user row coincides with
        // the face of the (2,0) one.
        let a = SpaceDescriptor::new(2, 0, 1, 1, HGrad);
        let b = SpaceDescriptor::new(1, 1, 1, 1, HGrad);
        let t = SpaceTable::build(&[a, a, b]);
        assert_eq!(t.user(), &[a, b]);
        assert_eq!(t.face(), &[b, SpaceDescriptor::new(0, 2, 1, 1, HGrad)]);
        assert_eq!(t.all(), &[a, b, SpaceDescriptor::new(0, 2, 1, 1, HGrad)]);
    }

    #[test]
    fn point_space_has_no_face() {
        let p = SpaceDescriptor::new(0, 2, 1, 1, HGrad);
        let t = SpaceTable::build(&[p]);
        assert!(t.face().is_empty());
        assert_eq!(t.all(), &[p]);
    }

    #[test]
    fn extended_strips_codim_and_transformation() {
        let sp = SpaceDescriptor::new(2, 1, 2, 1, HDiv);
        let t = SpaceTable::build(&[sp]);
        assert_eq!(
            t.extended(),
            &[
                SpaceDescriptor::new(2, 0, 2, 1, HGrad),
                SpaceDescriptor::new(1, 0, 2, 1, HGrad),
            ]
        );
    }

    #[test]
    fn push_forward_rows_append_reference_views() {
        let sp = SpaceDescriptor::new(2, 1, 3, 1, HDiv);
        let t = SpaceTable::build(&[sp]);
        let rows = t.push_forward_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[..2], t.all());
        assert_eq!(&rows[2..], t.extended());
    }
}
