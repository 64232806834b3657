//! Error patterns over the 15 codeword positions.

use rand::Rng;

use super::CODE_LENGTH;

/// `weight` distinct positions in `0..15`, sorted.
pub fn random_support<R: Rng + ?Sized>(rng: &mut R, weight: usize) -> Vec<usize> {
    assert!(weight <= CODE_LENGTH, "weight cannot exceed the code length");
    let mut pos = vec![0usize; weight];
    let mut used = [false; CODE_LENGTH];

    for i in (0..weight).rev() {
        let l = rng.gen_range(i..CODE_LENGTH);
        let chosen = if used[l] { i } else { l };
        pos[i] = chosen;
        used[chosen] = true;
    }
    pos.sort_unstable();
    pos
}

/// Random error mask with exactly `weight` bits set.
pub fn error_mask<R: Rng + ?Sized>(rng: &mut R, weight: usize) -> u16 {
    random_support(rng, weight)
        .into_iter()
        .fold(0u16, |m, p| m | (1 << p))
}

/// Every 15-bit mask with exactly `weight` bits set, ascending.
pub fn masks_of_weight(weight: u32) -> impl Iterator<Item = u16> {
    (0u16..1 << CODE_LENGTH).filter(move |m| m.count_ones() == weight)
}
