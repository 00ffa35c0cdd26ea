//! BB84-style key exchange.
//!
//! Alice sends randomly polarized photons, Eve may intercept and resend them,
//! and Bob measures each arriving photon with a randomly chosen filter.
//! Measurement follows the deterministic table of [`DetectionFilter::filter`],
//! so this is a protocol walkthrough rather than a physics simulation. No
//! sifting or error estimation is performed: the raw per-round records are
//! the whole output.

use crate::errors::{ArgumentError, ExchangeError};
use crate::protocols::qkd::transcript::{Interception, RoundRecord, Transcript};
use crate::sampler::{RngSampler, Sampler};
use crate::{DetectionFilter, Polarization};
use rand::rngs::StdRng;
use std::num::NonZeroUsize;

/// How Eve picks the polarization she forwards to Bob.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ResendStrategy {
    /// A fresh random polarization, unrelated to what Eve measured.
    #[default]
    Independent,
    /// The polarization in Eve's basis that encodes the bit she measured.
    FaithfulToMeasurement,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ExchangeConfig {
    rounds: NonZeroUsize,
    resend: ResendStrategy,
}

impl ExchangeConfig {
    pub const DEFAULT_ROUNDS: NonZeroUsize = match NonZeroUsize::new(20) {
        Some(rounds) => rounds,
        None => unreachable!(),
    };

    pub fn new(rounds: usize) -> Result<Self, ArgumentError> {
        let rounds = NonZeroUsize::new(rounds).ok_or(ArgumentError::ZeroRounds)?;
        Ok(Self {
            rounds,
            resend: ResendStrategy::default(),
        })
    }

    pub fn with_resend(mut self, resend: ResendStrategy) -> Self {
        self.resend = resend;
        self
    }

    pub fn rounds(&self) -> usize {
        self.rounds.get()
    }

    pub fn resend(&self) -> ResendStrategy {
        self.resend
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            rounds: Self::DEFAULT_ROUNDS,
            resend: ResendStrategy::default(),
        }
    }
}

/// Runs exchanges, drawing every random choice from one owned sampler.
///
/// Repeated runs keep advancing the same sampler, so two runs on one engine
/// differ. Build two engines from equal seeds to reproduce a run.
#[derive(Debug)]
pub struct Bb84Exchange<S = RngSampler<StdRng>> {
    config: ExchangeConfig,
    sampler: S,
}

impl Bb84Exchange {
    /// Engine backed by an OS-seeded CSPRNG.
    pub fn new(config: ExchangeConfig) -> Result<Self, ExchangeError> {
        Ok(Self::with_sampler(config, RngSampler::from_os()?))
    }
}

impl<S: Sampler> Bb84Exchange<S> {
    pub fn with_sampler(config: ExchangeConfig, sampler: S) -> Self {
        Self { config, sampler }
    }

    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Executes every configured round and returns the full transcript.
    ///
    /// # Arguments
    ///
    /// * `eavesdropper` - Whether Eve intercepts and resends every photon.
    pub fn run(&mut self, eavesdropper: bool) -> Transcript {
        let num_rounds = self.config.rounds();
        let mut rounds = Vec::with_capacity(num_rounds);

        for round in 0..num_rounds {
            // Alice picks the photon to send
            let signal = self.sampler.polarization();

            // Eavesdropper intercepts
            let eve = if eavesdropper {
                let filter = self.sampler.detection_filter();
                let resend = self.resend(filter, signal);
                Some(Interception { filter, resend })
            } else {
                None
            };

            // Bob measures
            let bob_filter = self.sampler.detection_filter();
            let record = RoundRecord::new(signal, eve, bob_filter);

            tracing::debug!(
                round,
                alice = %signal,
                eve_filter = ?record.eve_filter(),
                eve_bit = ?record.eve_bit(),
                bob_filter = %bob_filter,
                bob_bit = %record.bob_bit(),
                "round complete"
            );

            rounds.push(record);
        }

        tracing::info!(
            rounds = num_rounds,
            eavesdropper,
            resend = ?self.config.resend(),
            "exchange finished"
        );

        Transcript::new(rounds)
    }

    fn resend(&mut self, eve_filter: DetectionFilter, signal: Polarization) -> Polarization {
        match self.config.resend() {
            ResendStrategy::Independent => self.sampler.polarization(),
            ResendStrategy::FaithfulToMeasurement => {
                Polarization::prepare(eve_filter, eve_filter.filter(signal))
            }
        }
    }
}
