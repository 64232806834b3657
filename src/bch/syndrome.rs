use crate::gf::gf16::Gf16;

/// `S_i = r(alpha^i)` for i in 1..=count, stored 0-based.
pub fn syndromes(field: &Gf16, received: u16, count: usize) -> Vec<u8> {
    (1..=count)
        .map(|i| field.eval_bits(received as u64, field.alpha_pow(i)))
        .collect()
}

#[inline]
pub fn is_zero(syndromes: &[u8]) -> bool {
    syndromes.iter().all(|&s| s == 0)
}
