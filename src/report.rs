//! Console layout for exchange transcripts.
//!
//! The engine only produces data; this module turns a [`Transcript`] into the
//! labelled, space-separated listing used by the demo output.

use crate::{Bit, Field, Role, Transcript};
use std::fmt;

/// Renders key material with the canonical `0`/`1` mapping.
pub fn bit_string(bits: &[Bit]) -> String {
    bits.iter().map(|b| b.as_char()).collect()
}

/// `Display` adapter printing one labelled line per role sequence.
pub struct TranscriptReport<'a> {
    transcript: &'a Transcript,
}

impl<'a> TranscriptReport<'a> {
    pub fn new(transcript: &'a Transcript) -> Self {
        Self { transcript }
    }

    fn line(&self, f: &mut fmt::Formatter<'_>, label: &str, role: Role, field: Field) -> fmt::Result {
        let items: Vec<String> = self
            .transcript
            .role_sequence(role, field)
            .iter()
            .map(ToString::to_string)
            .collect();
        writeln!(f, "{:<24}{}", label, items.join(" "))
    }
}

impl fmt::Display for TranscriptReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.line(f, "Alice's bit sequence:", Role::Alice, Field::Bit)?;
        self.line(f, "Alice's filter scheme:", Role::Alice, Field::Signal)?;

        if self.transcript.eavesdropped() {
            writeln!(f)?;
            self.line(f, "Eve's detection scheme:", Role::Eve, Field::Basis)?;
            self.line(f, "Eve's bit measurements:", Role::Eve, Field::Bit)?;
            self.line(f, "Eve's filter scheme:", Role::Eve, Field::Signal)?;
        }

        writeln!(f)?;
        self.line(f, "Bob's detection scheme:", Role::Bob, Field::Basis)?;
        self.line(f, "Bob's bit measurements:", Role::Bob, Field::Bit)
    }
}
