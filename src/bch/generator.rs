use log::{debug, trace};

use super::CODE_LENGTH;
use crate::error::ConfigError;
use crate::gf::{gf16::Gf16, gf2};

/// Candidate minimal polynomials: every GF(2) polynomial of degree 1..=4.
const CANDIDATES: std::ops::RangeInclusive<u8> = 0x02..=0x1f;

/// Generator polynomial of the code together with its Barrett reciprocal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    minimal_polys: Vec<u8>,
    poly: u64,
    reciprocal: u64,
}

impl Generator {
    /// Multiply together the distinct minimal polynomials of alpha^1..alpha^(2t).
    pub fn build(field: &Gf16, max_errors: usize) -> Result<Self, ConfigError> {
        let mut used = [false; 32];
        let mut minimal_polys = Vec::with_capacity(2 * max_errors);

        for i in 1..=2 * max_errors {
            let a = field.alpha_pow(i);
            let mut vanishes = false;
            let mut found = None;
            for candidate in CANDIDATES {
                if field.eval_bits(candidate as u64, a) != 0 {
                    continue;
                }
                vanishes = true;
                if used[candidate as usize] {
                    continue;
                }
                found = Some(candidate);
                break;
            }

            match found {
                Some(m) => {
                    used[m as usize] = true;
                    minimal_polys.push(m);
                    debug!("minimal polynomial of alpha^{i}: {m:#04x}");
                }
                // conjugate of an earlier power
                None if vanishes => trace!("alpha^{i} shares an earlier minimal polynomial"),
                None => return Err(ConfigError::NoMinimalPolynomial { exponent: i }),
            }
        }

        let poly = minimal_polys
            .iter()
            .fold(1u64, |g, &m| gf2::clmul_lo(g, m as u64));
        let degree = gf2::degree(poly).unwrap_or(0);
        debug_assert!(degree as usize <= 2 * max_errors * 4);
        if degree as usize >= CODE_LENGTH {
            return Err(ConfigError::DegenerateGenerator { degree });
        }
        let reciprocal = gf2::reciprocal(poly).ok_or(ConfigError::DegenerateGenerator { degree })?;
        debug!("generator {poly:#x} (degree {degree}), reciprocal {reciprocal:#x}");

        Ok(Self { minimal_polys, poly, reciprocal })
    }

    #[inline]
    pub fn poly(&self) -> u64 {
        self.poly
    }

    #[inline]
    pub fn reciprocal(&self) -> u64 {
        self.reciprocal
    }

    #[inline]
    pub fn minimal_polys(&self) -> &[u8] {
        &self.minimal_polys
    }

    #[inline]
    pub fn degree(&self) -> usize {
        gf2::degree(self.poly).unwrap_or(0) as usize
    }
}
