use crate::errors::{ArgumentError, ExchangeError};
use crate::{DetectionFilter, Polarization};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng, TryRngCore};

/// Source of the random choices made by every party in an exchange.
///
/// The engine owns its sampler exclusively and draws from it in a fixed order
/// each round: Alice's polarization, Eve's filter, Eve's resent polarization,
/// then Bob's filter. Eve's draws only happen when she is listening.
pub trait Sampler {
    fn polarization(&mut self) -> Polarization;
    fn detection_filter(&mut self) -> DetectionFilter;
}

/// A `Sampler` backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSampler<StdRng> {
    /// Seeds a CSPRNG from the operating system.
    ///
    /// Fails with `EnvironmentUnavailable` when the platform cannot provide
    /// entropy.
    pub fn from_os() -> Result<Self, ExchangeError> {
        Self::from_entropy(OsRng)
    }

    /// Seeds a CSPRNG from `source`, failing fast if it cannot deliver a seed.
    pub(crate) fn from_entropy<E: TryRngCore>(mut source: E) -> Result<Self, ExchangeError> {
        match StdRng::try_from_rng(&mut source) {
            Ok(rng) => Ok(Self::new(rng)),
            Err(e) => {
                tracing::warn!(error = %e, "entropy source unavailable");
                Err(ExchangeError::EnvironmentUnavailable(e.to_string()))
            }
        }
    }

    /// Deterministic sampler for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn polarization(&mut self) -> Polarization {
        Polarization::ALL[self.rng.random_range(0..Polarization::ALL.len())]
    }

    fn detection_filter(&mut self) -> DetectionFilter {
        if self.rng.random::<bool>() {
            DetectionFilter::Diagonal
        } else {
            DetectionFilter::Rectilinear
        }
    }
}

/// Replays fixed scripts of choices, wrapping around when one runs out.
#[derive(Debug, Clone)]
pub struct ScriptedSampler {
    polarizations: Vec<Polarization>,
    filters: Vec<DetectionFilter>,
    next_polarization: usize,
    next_filter: usize,
}

impl ScriptedSampler {
    pub fn new(
        polarizations: Vec<Polarization>,
        filters: Vec<DetectionFilter>,
    ) -> Result<Self, ArgumentError> {
        if polarizations.is_empty() {
            return Err(ArgumentError::EmptyScript("polarization"));
        }
        if filters.is_empty() {
            return Err(ArgumentError::EmptyScript("detection filter"));
        }

        Ok(Self {
            polarizations,
            filters,
            next_polarization: 0,
            next_filter: 0,
        })
    }
}

impl Sampler for ScriptedSampler {
    fn polarization(&mut self) -> Polarization {
        let p = self.polarizations[self.next_polarization];
        self.next_polarization = (self.next_polarization + 1) % self.polarizations.len();
        p
    }

    fn detection_filter(&mut self) -> DetectionFilter {
        let f = self.filters[self.next_filter];
        self.next_filter = (self.next_filter + 1) % self.filters.len();
        f
    }
}
