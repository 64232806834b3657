use crate::error::ConfigError;
use crate::gf::gf2;

/// Field and code parameters. The code length is always 15; the message
/// width follows from the generator degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BchParams {
    /// Degree-4 modulus defining GF(16), bit `k` = coefficient of `x^k`.
    pub modulus: u8,
    /// Generator of GF(16)*, the element alpha.
    pub primitive: u8,
    /// Correction capability t; the decoder uses 2t syndromes.
    pub max_errors: usize,
}

/// x^4 + x + 1
pub const DEFAULT_MODULUS: u8 = 0x13;
pub const DEFAULT_PRIMITIVE: u8 = 0x2;

/// Largest supported t; beyond it the generator eats the whole codeword.
pub const MAX_CORRECTABLE: usize = 3;

impl BchParams {
    pub const fn new(modulus: u8, primitive: u8, max_errors: usize) -> Self {
        Self { modulus, primitive, max_errors }
    }

    /// (15, 5) code correcting 3 errors.
    pub const fn bch_15_5() -> Self {
        Self::new(DEFAULT_MODULUS, DEFAULT_PRIMITIVE, 3)
    }

    /// (15, 7) code correcting 2 errors.
    pub const fn bch_15_7() -> Self {
        Self::new(DEFAULT_MODULUS, DEFAULT_PRIMITIVE, 2)
    }

    /// (15, 11) Hamming code, one error.
    pub const fn hamming_15_11() -> Self {
        Self::new(DEFAULT_MODULUS, DEFAULT_PRIMITIVE, 1)
    }

    #[inline]
    pub fn syndrome_count(&self) -> usize {
        2 * self.max_errors
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_errors == 0 || self.max_errors > MAX_CORRECTABLE {
            return Err(ConfigError::MaxErrors(self.max_errors));
        }
        if gf2::degree(self.modulus as u64) != Some(4) {
            return Err(ConfigError::ModulusDegree { modulus: self.modulus });
        }
        if self.primitive == 0 || self.primitive >= 16 {
            return Err(ConfigError::PrimitiveOutOfRange(self.primitive));
        }
        Ok(())
    }
}

impl Default for BchParams {
    fn default() -> Self {
        Self::bch_15_5()
    }
}
