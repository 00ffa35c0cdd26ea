//! Quantum Key Distribution (QKD) Protocols.
//!
//! - **BB84**: polarization-based exchange between Alice and Bob, with an
//!   optional intercept-resend eavesdropper.

pub mod bb84;
pub mod transcript;

pub use bb84::{Bb84Exchange, ExchangeConfig, ResendStrategy};
pub use transcript::{Field, Role, RoundRecord, Symbol, Transcript};
