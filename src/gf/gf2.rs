//! Bit-polynomials over GF(2).
//!
//! A `u64` holds one polynomial: bit `k` is the coefficient of `x^k`.
//! Addition is XOR, multiplication is carry-less.

/// Degree of `p` (index of its highest set bit), `None` for the zero polynomial.
#[inline]
pub fn degree(p: u64) -> Option<u32> {
    if p == 0 {
        None
    } else {
        Some(63 - p.leading_zeros())
    }
}

/// Carry-less product, full 128-bit result.
pub fn clmul(a: u64, b: u64) -> u128 {
    let a = a as u128;
    let mut b = b;
    let mut out = 0u128;
    while b != 0 {
        out ^= a << b.trailing_zeros();
        b &= b - 1;
    }
    out
}

/// Low 64 bits of `clmul(a, b)`.
#[inline]
pub fn clmul_lo(a: u64, b: u64) -> u64 {
    clmul(a, b) as u64
}

/// High 64 bits of `clmul(a, b)`.
#[inline]
pub fn clmul_hi(a: u64, b: u64) -> u64 {
    (clmul(a, b) >> 64) as u64
}

/// `floor(x^64 / divisor)`, computed by shift-and-subtract long division.
///
/// Multiplying a dividend by this value and keeping the high half gives the
/// quotient by `divisor` without a division loop (Barrett reduction).
/// Returns `None` for divisors of degree 0, whose quotient would not fit.
pub fn reciprocal(divisor: u64) -> Option<u64> {
    let d = degree(divisor)?;
    if d == 0 {
        return None;
    }
    let top = 1u64 << d;
    let mut rem = top >> 1;
    let mut q = 0u64;
    for _ in 0..(65 - d) {
        rem <<= 1;
        q <<= 1;
        if rem & top != 0 {
            q |= 1;
            rem ^= divisor;
        }
    }
    Some(q)
}

/// Quotient and remainder of `dividend / divisor` by plain long division.
pub fn poly_div_rem(dividend: u64, divisor: u64) -> (u64, u64) {
    assert!(divisor != 0, "division by the zero polynomial");
    let d = 63 - divisor.leading_zeros();
    let mut q = 0u64;
    let mut r = dividend;
    while let Some(dr) = degree(r) {
        if dr < d {
            break;
        }
        let shift = dr - d;
        q |= 1 << shift;
        r ^= divisor << shift;
    }
    (q, r)
}

/// Remainder of `dividend` modulo `divisor`.
#[inline]
pub fn poly_rem(dividend: u64, divisor: u64) -> u64 {
    poly_div_rem(dividend, divisor).1
}
