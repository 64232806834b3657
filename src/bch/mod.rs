pub mod params;
pub mod generator;
pub mod encoder;
pub mod syndrome;
pub mod euclid;
pub mod chien;
pub mod codec;
pub mod sampling;

pub use params::*;
pub use generator::Generator;
pub use codec::*;

/// Codeword length in bits.
pub const CODE_LENGTH: usize = 15;
