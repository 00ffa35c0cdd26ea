use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Polarization index {0} out of range. Only values supported are 0, 1, 2, 3")]
    PolarizationIndex(usize),

    #[error("Unable to parse '{0}' as Bit. Must be '0' or '1'")]
    BitSymbol(char),

    #[error("Round count must be positive")]
    ZeroRounds,

    #[error("Scripted sampler needs at least one {0}")]
    EmptyScript(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// The platform could not seed the CSPRNG. Not retried.
    #[error("Randomness source unavailable: {0}")]
    EnvironmentUnavailable(String),
}
