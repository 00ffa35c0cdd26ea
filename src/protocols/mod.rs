//! Key exchange protocols.

pub mod qkd;
pub use qkd::bb84;
