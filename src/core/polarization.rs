use crate::core::errors::ArgumentError;
use crate::core::{Bit, DetectionFilter};
use std::fmt;

/// Polarization state of a transmitted photon.
///
/// Horizontal and Vertical form the rectilinear family, BackSlash and
/// ForwardSlash the diagonal family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Polarization {
    Horizontal,
    Vertical,
    BackSlash,
    ForwardSlash,
}

impl Polarization {
    /// All polarizations, ordered by index.
    pub const ALL: [Polarization; 4] = [
        Polarization::Horizontal,
        Polarization::Vertical,
        Polarization::BackSlash,
        Polarization::ForwardSlash,
    ];

    /// Maps `0..=3` onto `Horizontal, Vertical, BackSlash, ForwardSlash`.
    pub fn from_index(index: usize) -> Result<Self, ArgumentError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ArgumentError::PolarizationIndex(index))
    }

    pub fn index(self) -> usize {
        match self {
            Polarization::Horizontal => 0,
            Polarization::Vertical => 1,
            Polarization::BackSlash => 2,
            Polarization::ForwardSlash => 3,
        }
    }

    /// The bit this polarization encodes when sent.
    pub fn bit_value(self) -> Bit {
        match self {
            Polarization::Horizontal | Polarization::BackSlash => Bit::Zero,
            Polarization::Vertical | Polarization::ForwardSlash => Bit::One,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Polarization::Horizontal => '-',
            Polarization::Vertical => '|',
            Polarization::BackSlash => '\\',
            Polarization::ForwardSlash => '/',
        }
    }

    /// The basis family this polarization belongs to.
    pub fn basis(self) -> DetectionFilter {
        match self {
            Polarization::Horizontal | Polarization::Vertical => DetectionFilter::Rectilinear,
            Polarization::BackSlash | Polarization::ForwardSlash => DetectionFilter::Diagonal,
        }
    }

    /// Polarization in `filter`'s family that `filter` reads back as `bit`.
    ///
    /// Satisfies `filter.filter(Polarization::prepare(filter, bit)) == bit`.
    pub fn prepare(filter: DetectionFilter, bit: Bit) -> Self {
        match (filter, bit) {
            (DetectionFilter::Rectilinear, Bit::Zero) => Polarization::Horizontal,
            (DetectionFilter::Rectilinear, Bit::One) => Polarization::Vertical,
            (DetectionFilter::Diagonal, Bit::Zero) => Polarization::ForwardSlash,
            (DetectionFilter::Diagonal, Bit::One) => Polarization::BackSlash,
        }
    }
}

impl TryFrom<usize> for Polarization {
    type Error = ArgumentError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl fmt::Display for Polarization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_index_covers_all_four_states() {
        assert_eq!(Polarization::from_index(0), Ok(Polarization::Horizontal));
        assert_eq!(Polarization::from_index(1), Ok(Polarization::Vertical));
        assert_eq!(Polarization::from_index(2), Ok(Polarization::BackSlash));
        assert_eq!(Polarization::from_index(3), Ok(Polarization::ForwardSlash));
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        assert_eq!(
            Polarization::from_index(4),
            Err(ArgumentError::PolarizationIndex(4))
        );
        assert!(Polarization::try_from(usize::MAX).is_err());
    }

    #[test]
    fn bit_values_and_glyphs() {
        let table: Vec<(Bit, char)> = Polarization::ALL
            .iter()
            .map(|p| (p.bit_value(), p.glyph()))
            .collect();
        assert_eq!(
            table,
            vec![
                (Bit::Zero, '-'),
                (Bit::One, '|'),
                (Bit::Zero, '\\'),
                (Bit::One, '/'),
            ]
        );
    }

    #[test]
    fn families() {
        assert_eq!(Polarization::Horizontal.basis(), DetectionFilter::Rectilinear);
        assert_eq!(Polarization::Vertical.basis(), DetectionFilter::Rectilinear);
        assert_eq!(Polarization::BackSlash.basis(), DetectionFilter::Diagonal);
        assert_eq!(Polarization::ForwardSlash.basis(), DetectionFilter::Diagonal);
    }

    proptest! {
        #[test]
        fn prop_index_round_trips(i in 0usize..4) {
            let p = Polarization::from_index(i).unwrap();
            prop_assert_eq!(p.index(), i);
        }

        #[test]
        fn prop_prepare_is_read_back(diagonal in any::<bool>(), one in any::<bool>()) {
            let filter = if diagonal { DetectionFilter::Diagonal } else { DetectionFilter::Rectilinear };
            let bit = Bit::from(one);
            let p = Polarization::prepare(filter, bit);
            prop_assert_eq!(p.basis(), filter);
            prop_assert_eq!(filter.filter(p), bit);
        }
    }
}
