use crate::core::{Bit, Polarization};
use std::fmt;

/// Measurement basis used by a receiving party.
///
/// Measurement is table driven and deterministic. A mismatched basis does not
/// yield a random outcome, it yields the fixed value from the table in
/// [`DetectionFilter::filter`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DetectionFilter {
    Diagonal,
    Rectilinear,
}

impl DetectionFilter {
    pub const ALL: [DetectionFilter; 2] = [DetectionFilter::Diagonal, DetectionFilter::Rectilinear];

    /// Bit observed when `polarization` passes through this filter.
    ///
    /// | filter      | `-` | `\|` | `\` | `/` |
    /// |-------------|-----|------|-----|-----|
    /// | Rectilinear | 0   | 1    | 0   | 1   |
    /// | Diagonal    | 0   | 1    | 1   | 0   |
    pub fn filter(self, polarization: Polarization) -> Bit {
        match (self, polarization) {
            (DetectionFilter::Rectilinear, Polarization::Horizontal) => Bit::Zero,
            (DetectionFilter::Rectilinear, Polarization::Vertical) => Bit::One,
            (DetectionFilter::Rectilinear, Polarization::BackSlash) => Bit::Zero,
            (DetectionFilter::Rectilinear, Polarization::ForwardSlash) => Bit::One,
            (DetectionFilter::Diagonal, Polarization::Horizontal) => Bit::Zero,
            (DetectionFilter::Diagonal, Polarization::Vertical) => Bit::One,
            (DetectionFilter::Diagonal, Polarization::BackSlash) => Bit::One,
            (DetectionFilter::Diagonal, Polarization::ForwardSlash) => Bit::Zero,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            DetectionFilter::Diagonal => 'X',
            DetectionFilter::Rectilinear => '+',
        }
    }
}

impl fmt::Display for DetectionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
