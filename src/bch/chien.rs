use log::{debug, trace};

use crate::error::Uncorrectable;
use crate::gf::gf16::{Gf16, ORDER};

/// Exhaustive root search over alpha^0..alpha^14.
///
/// A locator with `len` coefficients must have exactly `len - 1` distinct
/// nonzero roots; anything else means more errors than the code corrects.
pub fn find_roots(field: &Gf16, locator: &[u8]) -> Result<Vec<u8>, Uncorrectable> {
    let expected = locator.len().saturating_sub(1);
    let mut roots = Vec::with_capacity(expected);
    if expected == 0 {
        return Ok(roots);
    }

    for j in 0..ORDER {
        let x = field.alpha_pow(j);
        if field.eval_msb_first(locator, x) == 0 {
            trace!("locator root alpha^{j}");
            roots.push(x);
            if roots.len() == expected {
                return Ok(roots);
            }
        }
    }

    debug!("error locator expects {expected} roots, found {}", roots.len());
    Err(Uncorrectable::RootCountMismatch { expected, found: roots.len() })
}

/// Bit positions named by the roots.
pub fn offsets(field: &Gf16, roots: &[u8]) -> Vec<u8> {
    roots.iter().map(|&r| field.log(r)).collect()
}

/// Flip the bits at `offsets`.
pub fn correct(received: u16, offsets: &[u8]) -> u16 {
    offsets.iter().fold(received, |w, &o| w ^ (1 << o))
}
