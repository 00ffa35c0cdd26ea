mod core;
pub mod protocols;
pub mod report;
mod sampler;

pub use crate::core::{Bit, DetectionFilter, Polarization, errors};
pub use crate::protocols::qkd::{
    Bb84Exchange, ExchangeConfig, Field, ResendStrategy, Role, RoundRecord, Symbol, Transcript,
};
pub use crate::sampler::{RngSampler, Sampler, ScriptedSampler};
