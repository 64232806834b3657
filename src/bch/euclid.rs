//! Key equation solver: extended Euclidean algorithm over GF(16).
//!
//! Starting from `x^(2t)` and the syndrome polynomial, the remainders are
//! reduced until one has at most `t` coefficients. The auxiliary polynomial
//! accumulated next to the last divisor is the error locator.
//!
//! Remainders are kept highest degree first. Auxiliaries are kept lowest
//! degree first, so reading one front to back walks the locator in reverse.
//! Each term owns `2t + 2` slots in total: when its remainder loses its
//! leading coefficient, the auxiliary grows by one trailing slot.

use log::{debug, trace};

use crate::error::Uncorrectable;
use crate::gf::gf16::Gf16;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Term {
    remainder: Vec<u8>,
    auxiliary: Vec<u8>,
}

impl Term {
    #[inline]
    fn leading(&self) -> u8 {
        self.remainder.first().copied().unwrap_or(0)
    }

    /// Drop the leading remainder coefficient, widening the auxiliary.
    #[inline]
    fn shift_left(&mut self) {
        self.remainder.remove(0);
        self.auxiliary.push(0);
    }

    fn strip_leading_zeros(&mut self) {
        while !self.remainder.is_empty() && self.remainder[0] == 0 {
            self.shift_left();
        }
    }
}

/// Divide `dividend` by `divisor` one leading coefficient at a time until
/// both remainders have the same length, folding each partial quotient into
/// the divisor's auxiliary.
///
/// `divisor` must be stripped and no longer than `dividend`.
fn reduce(field: &Gf16, dividend: &mut Term, divisor: &mut Term) {
    debug_assert!(divisor.leading() != 0);
    debug_assert!(divisor.remainder.len() <= dividend.remainder.len());

    loop {
        let lead = dividend.leading();
        if lead != 0 {
            let q = field.div(lead, divisor.leading());
            for (d, &r) in dividend.remainder.iter_mut().zip(&divisor.remainder) {
                *d = Gf16::sub(*d, field.mul(q, r));
            }
            // auxiliaries line up at their high ends
            let offset = divisor.auxiliary.len() - dividend.auxiliary.len();
            for (a, &b) in divisor.auxiliary[offset..].iter_mut().zip(&dividend.auxiliary) {
                *a = Gf16::sub(*a, field.mul(q, b));
            }
        }
        if dividend.remainder.len() == divisor.remainder.len() {
            break;
        }
        dividend.shift_left();
    }
}

/// Solve the key equation for `syndromes` (2t values, `S_1` first).
///
/// Returns the error locator normalised to a leading 1, in the order the
/// root search evaluates it. At most `t + 1` coefficients.
pub fn error_locator(
    field: &Gf16,
    syndromes: &[u8],
    max_errors: usize,
) -> Result<Vec<u8>, Uncorrectable> {
    let n = syndromes.len();

    // x^(2t) | 1
    let mut dividend = Term {
        remainder: std::iter::once(1).chain(std::iter::repeat(0).take(n)).collect(),
        auxiliary: vec![1],
    };
    // S(x) | 0
    let mut divisor = Term {
        remainder: std::iter::once(0).chain(syndromes.iter().rev().copied()).collect(),
        auxiliary: vec![0],
    };

    loop {
        divisor.strip_leading_zeros();
        if divisor.remainder.len() <= max_errors {
            break;
        }
        trace!(
            "euclid: dividend {:?}|{:?} divisor {:?}|{:?}",
            dividend.remainder, dividend.auxiliary, divisor.remainder, divisor.auxiliary
        );
        reduce(field, &mut dividend, &mut divisor);
        (dividend, divisor) = (divisor, dividend);
    }

    let mut locator = dividend.auxiliary;
    debug_assert!(locator.len() <= max_errors + 1);

    if divisor.remainder.len() >= locator.len() {
        debug!(
            "remainder length {} >= locator size {}",
            divisor.remainder.len(),
            locator.len()
        );
        return Err(Uncorrectable::RemainderTooLarge {
            remainder: divisor.remainder.len(),
            locator: locator.len(),
        });
    }

    let lead = locator[0];
    if lead == 0 {
        debug!("error locator {locator:?} has a zero leading coefficient");
        return Err(Uncorrectable::LocatorLeadingZero);
    }
    for c in locator.iter_mut() {
        *c = field.div(*c, lead);
    }
    trace!("euclid: locator {locator:?}");
    Ok(locator)
}
