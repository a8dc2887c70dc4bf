//! Push-forward transformation kinds.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How reference-space values are mapped to physical-space values.
///
/// The spelling used in seed files and in generated declarations is the
/// one returned by [`as_str`](Transformation::as_str).
///
/// # Examples
///
/// ```
/// use instgen_core::Transformation;
///
/// let t: Transformation = "h_div".parse().unwrap();
/// assert_eq!(t, Transformation::HDiv);
/// assert_eq!(t.to_string(), "h_div");
/// assert!("h_curl".parse::<Transformation>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Transformation {
    /// Gradient-preserving map; values keep their reference range.
    HGrad,
    /// Divergence-preserving (Piola) map; values take the range of the
    /// embedding space.
    HDiv,
}

impl Transformation {
    /// Every recognized transformation kind, in declaration order.
    pub const ALL: [Transformation; 2] = [Transformation::HGrad, Transformation::HDiv];

    /// The identifier used in seed files and declarations.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HGrad => "h_grad",
            Self::HDiv => "h_div",
        }
    }

    /// Range of the physical value for a field of `range` components
    /// living in a space of dimension `space_dim`.
    pub fn physical_range(self, range: u32, space_dim: u32) -> u32 {
        match self {
            Self::HGrad => range,
            Self::HDiv => space_dim,
        }
    }

    /// Rank of the physical value. No transformation changes rank.
    pub fn physical_rank(self, rank: u32) -> u32 {
        rank
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`Transformation`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown transformation kind '{0}'")]
pub struct UnknownTransformation(pub String);

impl FromStr for Transformation {
    type Err = UnknownTransformation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTransformation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_kind() {
        for t in Transformation::ALL {
            assert_eq!(t.as_str().parse::<Transformation>(), Ok(t));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            "H_GRAD".parse::<Transformation>(),
            Err(UnknownTransformation("H_GRAD".into()))
        );
    }

    #[test]
    fn unknown_kind_message_names_value() {
        let err = "h_curl".parse::<Transformation>().unwrap_err();
        assert_eq!(err.to_string(), "unknown transformation kind 'h_curl'");
    }

    #[test]
    fn h_grad_keeps_reference_range() {
        assert_eq!(Transformation::HGrad.physical_range(2, 3), 2);
    }

    #[test]
    fn h_div_takes_space_dim() {
        assert_eq!(Transformation::HDiv.physical_range(2, 3), 3);
        assert_eq!(Transformation::HDiv.physical_rank(1), 1);
    }
}
