mod bit;
pub mod errors;
mod filter;
mod polarization;

pub use bit::Bit;
pub use filter::DetectionFilter;
pub use polarization::Polarization;
