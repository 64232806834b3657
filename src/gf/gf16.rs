use super::gf2;
use crate::error::ConfigError;

/// Number of nonzero elements, i.e. the order of GF(16)*.
pub const ORDER: usize = 15;

/// GF(2^4) built from a degree-4 modulus and a generator of its
/// multiplicative group. Elements are `u8` values in `0..16`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gf16 {
    primitive: u8,
    modulus: u8,
    /// `exp[i] = primitive^i`; `exp[15]` wraps back to 1.
    exp: [u8; 16],
    /// Inverse of `exp` on 1..16. `log[0]` is unused.
    log: [u8; 16],
}

impl Gf16 {
    pub fn build(primitive: u8, modulus: u8) -> Result<Self, ConfigError> {
        if gf2::degree(modulus as u64) != Some(4) {
            return Err(ConfigError::ModulusDegree { modulus });
        }
        if primitive == 0 || primitive >= 16 {
            return Err(ConfigError::PrimitiveOutOfRange(primitive));
        }

        let mut exp = [0u8; 16];
        let mut x: u64 = 1;
        for slot in exp.iter_mut() {
            *slot = x as u8;
            // degree <= 3 times degree <= 3, so only bits 6..4 need folding
            x = gf2::clmul_lo(x, primitive as u64);
            for bit in (4..=6).rev() {
                if x & (1 << bit) != 0 {
                    x ^= (modulus as u64) << (bit - 4);
                }
            }
        }

        let mut log = [0u8; 16];
        let mut seen = [false; 16];
        for (i, &v) in exp[..ORDER].iter().enumerate() {
            if v == 0 || seen[v as usize] {
                return Err(ConfigError::NotPrimitive { primitive, modulus });
            }
            seen[v as usize] = true;
            log[v as usize] = i as u8;
        }

        Ok(Self { primitive, modulus, exp, log })
    }

    #[inline] pub fn primitive(&self) -> u8 { self.primitive }
    #[inline] pub fn modulus(&self) -> u8 { self.modulus }
    #[inline] pub fn exp_table(&self) -> &[u8; 16] { &self.exp }
    #[inline] pub fn log_table(&self) -> &[u8; 16] { &self.log }

    #[inline] pub fn add(a: u8, b: u8) -> u8 { a ^ b }
    #[inline] pub fn sub(a: u8, b: u8) -> u8 { a ^ b }

    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let e = self.log[a as usize] as usize + self.log[b as usize] as usize;
        self.exp[e % ORDER]
    }

    #[inline]
    pub fn div(&self, a: u8, b: u8) -> u8 {
        debug_assert!(b != 0, "division by zero in GF(16)");
        if a == 0 {
            return 0;
        }
        let e = ORDER + self.log[a as usize] as usize - self.log[b as usize] as usize;
        self.exp[e % ORDER]
    }

    #[inline]
    pub fn inv(&self, a: u8) -> u8 {
        self.div(1, a)
    }

    #[inline]
    pub fn pow(&self, base: u8, exponent: usize) -> u8 {
        if base == 0 {
            return if exponent == 0 { 1 } else { 0 };
        }
        self.exp[(self.log[base as usize] as usize * (exponent % ORDER)) % ORDER]
    }

    #[inline]
    pub fn alpha_pow(&self, i: usize) -> u8 {
        self.exp[i % ORDER]
    }

    #[inline]
    pub fn log(&self, a: u8) -> u8 {
        debug_assert!(a != 0, "log of zero in GF(16)");
        self.log[a as usize]
    }

    /// Evaluate a GF(2) bit-polynomial at a field element.
    pub fn eval_bits(&self, poly: u64, x: u8) -> u8 {
        let mut p = poly;
        let mut acc = 0u8;
        while p != 0 {
            acc ^= self.pow(x, p.trailing_zeros() as usize);
            p &= p - 1;
        }
        acc
    }

    /// Evaluate a polynomial with GF(16) coefficients, highest degree first (Horner).
    #[inline]
    pub fn eval_msb_first(&self, coeffs: &[u8], x: u8) -> u8 {
        coeffs.iter().fold(0, |acc, &c| self.mul(acc, x) ^ c)
    }
}
