//! Exchange output.
//!
//! A [`Transcript`] holds one [`RoundRecord`] per round, in order. Role
//! sequences (Alice's bits, Bob's detection scheme, ...) are projections over
//! the records and are never stored separately.

use crate::{Bit, DetectionFilter, Polarization};
use std::fmt;

/// One protocol round. Derived bits are computed from the recorded choices.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    alice_polarization: Polarization,
    eve: Option<Interception>,
    bob_filter: DetectionFilter,
}

/// Eve's part of a round: her measuring filter and the polarization she sent on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Interception {
    pub(crate) filter: DetectionFilter,
    pub(crate) resend: Polarization,
}

impl RoundRecord {
    pub(crate) fn new(
        alice_polarization: Polarization,
        eve: Option<Interception>,
        bob_filter: DetectionFilter,
    ) -> Self {
        Self {
            alice_polarization,
            eve,
            bob_filter,
        }
    }

    pub fn alice_polarization(&self) -> Polarization {
        self.alice_polarization
    }

    pub fn alice_bit(&self) -> Bit {
        self.alice_polarization.bit_value()
    }

    pub fn intercepted(&self) -> bool {
        self.eve.is_some()
    }

    pub fn eve_filter(&self) -> Option<DetectionFilter> {
        self.eve.map(|e| e.filter)
    }

    /// What Eve read from Alice's signal.
    pub fn eve_bit(&self) -> Option<Bit> {
        self.eve.map(|e| e.filter.filter(self.alice_polarization))
    }

    pub fn eve_resend(&self) -> Option<Polarization> {
        self.eve.map(|e| e.resend)
    }

    /// The polarization that actually reached Bob.
    pub fn forwarded_polarization(&self) -> Polarization {
        self.eve_resend().unwrap_or(self.alice_polarization)
    }

    pub fn bob_filter(&self) -> DetectionFilter {
        self.bob_filter
    }

    pub fn bob_bit(&self) -> Bit {
        self.bob_filter.filter(self.forwarded_polarization())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Alice,
    Eve,
    Bob,
}

/// Column of a role sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// Bits sent (Alice) or measured (Eve, Bob).
    Bit,
    /// Alice's polarization family, or the filter Eve and Bob measured with.
    Basis,
    /// Polarizations put on the wire: Alice's signal or Eve's resend.
    Signal,
}

/// A single entry of a role sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Symbol {
    Bit(Bit),
    Basis(DetectionFilter),
    Signal(Polarization),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Bit(b) => fmt::Display::fmt(b, f),
            Symbol::Basis(d) => fmt::Display::fmt(d, f),
            Symbol::Signal(p) => fmt::Display::fmt(p, f),
        }
    }
}

/// Immutable record of one exchange run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    rounds: Vec<RoundRecord>,
}

impl Transcript {
    /// Eve either intercepts every round of a run or none of them.
    pub(crate) fn new(rounds: Vec<RoundRecord>) -> Self {
        debug_assert!(
            rounds
                .windows(2)
                .all(|w| w[0].intercepted() == w[1].intercepted()),
            "interception must be uniform across a run"
        );
        Self { rounds }
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Whether Eve was listening during the run.
    pub fn eavesdropped(&self) -> bool {
        self.rounds.first().is_some_and(RoundRecord::intercepted)
    }

    pub fn bits(&self, role: Role) -> Vec<Bit> {
        match role {
            Role::Alice => self.rounds.iter().map(RoundRecord::alice_bit).collect(),
            Role::Eve => self.rounds.iter().filter_map(RoundRecord::eve_bit).collect(),
            Role::Bob => self.rounds.iter().map(RoundRecord::bob_bit).collect(),
        }
    }

    pub fn bases(&self, role: Role) -> Vec<DetectionFilter> {
        match role {
            Role::Alice => self
                .rounds
                .iter()
                .map(|r| r.alice_polarization.basis())
                .collect(),
            Role::Eve => self.rounds.iter().filter_map(RoundRecord::eve_filter).collect(),
            Role::Bob => self.rounds.iter().map(RoundRecord::bob_filter).collect(),
        }
    }

    /// Bob never transmits, so his signal sequence is empty.
    pub fn signals(&self, role: Role) -> Vec<Polarization> {
        match role {
            Role::Alice => self
                .rounds
                .iter()
                .map(RoundRecord::alice_polarization)
                .collect(),
            Role::Eve => self.rounds.iter().filter_map(RoundRecord::eve_resend).collect(),
            Role::Bob => Vec::new(),
        }
    }

    pub fn role_sequence(&self, role: Role, field: Field) -> Vec<Symbol> {
        match field {
            Field::Bit => self.bits(role).into_iter().map(Symbol::Bit).collect(),
            Field::Basis => self.bases(role).into_iter().map(Symbol::Basis).collect(),
            Field::Signal => self.signals(role).into_iter().map(Symbol::Signal).collect(),
        }
    }

    /// Raw key bits for a one-time-pad consumer.
    pub fn key_material(&self, role: Role) -> Vec<Bit> {
        self.bits(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transcript {
        Transcript::new(
            vec![
                RoundRecord::new(
                    Polarization::BackSlash,
                    Some(Interception {
                        filter: DetectionFilter::Diagonal,
                        resend: Polarization::Horizontal,
                    }),
                    DetectionFilter::Diagonal,
                ),
                RoundRecord::new(
                    Polarization::Vertical,
                    Some(Interception {
                        filter: DetectionFilter::Rectilinear,
                        resend: Polarization::ForwardSlash,
                    }),
                    DetectionFilter::Rectilinear,
                ),
            ],
        )
    }

    #[test]
    fn record_derives_bits_from_choices() {
        let t = sample();
        let first = t.rounds()[0];

        assert_eq!(first.alice_bit(), Bit::Zero);
        assert_eq!(first.eve_bit(), Some(Bit::One));
        assert_eq!(first.forwarded_polarization(), Polarization::Horizontal);
        assert_eq!(first.bob_bit(), Bit::Zero);
    }

    #[test]
    fn eavesdropping_follows_the_records() {
        assert!(sample().eavesdropped());
        assert!(!Transcript::new(vec![]).eavesdropped());
    }

    #[test]
    #[should_panic(expected = "interception must be uniform")]
    #[cfg(debug_assertions)]
    fn mixed_interception_is_rejected() {
        let mut rounds = sample().rounds().to_vec();
        rounds.push(RoundRecord::new(
            Polarization::Horizontal,
            None,
            DetectionFilter::Rectilinear,
        ));
        Transcript::new(rounds);
    }

    #[test]
    fn projections() {
        let t = sample();

        assert_eq!(t.bits(Role::Alice), vec![Bit::Zero, Bit::One]);
        assert_eq!(t.bits(Role::Eve), vec![Bit::One, Bit::One]);
        assert_eq!(t.bits(Role::Bob), vec![Bit::Zero, Bit::One]);
        assert_eq!(
            t.bases(Role::Alice),
            vec![DetectionFilter::Diagonal, DetectionFilter::Rectilinear]
        );
        assert_eq!(
            t.signals(Role::Eve),
            vec![Polarization::Horizontal, Polarization::ForwardSlash]
        );
        assert!(t.signals(Role::Bob).is_empty());
    }

    #[test]
    fn role_sequence_renders_glyphs() {
        let t = sample();
        let rendered: Vec<String> = t
            .role_sequence(Role::Alice, Field::Signal)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(rendered, vec!["\\", "|"]);
        assert_eq!(
            t.role_sequence(Role::Bob, Field::Basis),
            vec![
                Symbol::Basis(DetectionFilter::Diagonal),
                Symbol::Basis(DetectionFilter::Rectilinear)
            ]
        );
    }

    #[test]
    fn no_eve_means_empty_eve_sequences() {
        let t = Transcript::new(
            vec![RoundRecord::new(
                Polarization::Horizontal,
                None,
                DetectionFilter::Rectilinear,
            )],
        );

        assert!(!t.eavesdropped());
        assert!(t.bits(Role::Eve).is_empty());
        assert!(t.role_sequence(Role::Eve, Field::Basis).is_empty());
        assert_eq!(t.rounds()[0].forwarded_polarization(), Polarization::Horizontal);
        assert_eq!(t.key_material(Role::Bob), vec![Bit::Zero]);
    }
}
