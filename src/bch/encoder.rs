//! Systematic encoding: codeword = message * x^(n-k) + (message * x^(n-k) mod g).
//!
//! The remainder is computed without a division loop: the quotient is the
//! high half of `word * reciprocal`, and `quotient * g` differs from `word`
//! exactly by the remainder.

use super::Generator;
use crate::gf::gf2;

/// Parity bits of a message already shifted into the high bits of `word`.
#[inline]
pub fn parity(generator: &Generator, word: u64) -> u64 {
    let quotient = gf2::clmul_hi(word, generator.reciprocal());
    let product = gf2::clmul_lo(quotient, generator.poly());
    product ^ word
}

/// Append parity to a shifted message. The result is a multiple of the generator.
#[inline]
pub fn encode_shifted(generator: &Generator, word: u64) -> u64 {
    word | parity(generator, word)
}
