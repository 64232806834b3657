use log::debug;
use once_cell::sync::Lazy;

use super::{chien, encoder, euclid, syndrome, BchParams, Generator, CODE_LENGTH};
use crate::error::{BchError, ConfigError, Uncorrectable};
use crate::gf::gf16::Gf16;

const WORD_MASK: u16 = (1 << CODE_LENGTH) - 1;

static STANDARD: Lazy<Bch15> = Lazy::new(|| {
    Bch15::new(BchParams::bch_15_5()).expect("x^4 + x + 1 with alpha = 2 is a valid BCH(15,5) setup")
});

/// Outcome of decoding one received word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Corrected codeword, or the received word untouched if `failure` is set.
    pub corrected: u16,
    pub errors_found: usize,
    /// Flipped bit positions, in root search order.
    pub offsets: Vec<u8>,
    pub failure: Option<Uncorrectable>,
}

impl Decoded {
    #[inline]
    pub fn is_uncorrectable(&self) -> bool {
        self.failure.is_some()
    }

    fn clean(received: u16) -> Self {
        Self { corrected: received, errors_found: 0, offsets: Vec::new(), failure: None }
    }
}

/// Binary BCH code of length 15 over GF(16).
///
/// Codewords are `u16` bit-polynomials: the message sits in the top `k`
/// bits (positions `n-k..n`), parity in the low `n-k` bits.
/// Construction builds every table; afterwards the codec is read-only and
/// can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bch15 {
    params: BchParams,
    field: Gf16,
    generator: Generator,
}

impl Bch15 {
    pub fn new(params: BchParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let field = Gf16::build(params.primitive, params.modulus)?;
        let generator = Generator::build(&field, params.max_errors)?;
        Ok(Self { params, field, generator })
    }

    /// Shared (15, 5) codec, built on first use.
    pub fn standard() -> &'static Bch15 {
        &STANDARD
    }

    #[inline] pub fn params(&self) -> &BchParams { &self.params }
    #[inline] pub fn field(&self) -> &Gf16 { &self.field }
    #[inline] pub fn generator(&self) -> &Generator { &self.generator }

    #[inline]
    pub fn parity_bits(&self) -> usize {
        self.generator.degree()
    }

    #[inline]
    pub fn message_bits(&self) -> usize {
        CODE_LENGTH - self.parity_bits()
    }

    /// Encode a `k`-bit message given in the low bits.
    pub fn encode(&self, message: u16) -> Result<u16, BchError> {
        if (message as u32) >> self.message_bits() != 0 {
            return Err(BchError::MessageTooWide { message, bits: self.message_bits() });
        }
        let word = (message as u64) << self.parity_bits();
        Ok(encoder::encode_shifted(&self.generator, word) as u16)
    }

    /// Encode a message already placed in the top `k` bits.
    pub fn encode_shifted(&self, word: u16) -> Result<u16, BchError> {
        let parity_mask = (1u16 << self.parity_bits()) - 1;
        if word & !WORD_MASK != 0 || word & parity_mask != 0 {
            return Err(BchError::MessageTooWide {
                message: word >> self.parity_bits(),
                bits: self.message_bits(),
            });
        }
        Ok(encoder::encode_shifted(&self.generator, word as u64) as u16)
    }

    #[inline]
    pub fn message_of(&self, codeword: u16) -> u16 {
        (codeword & WORD_MASK) >> self.parity_bits()
    }

    pub fn is_codeword(&self, word: u16) -> bool {
        word & !WORD_MASK == 0
            && syndrome::is_zero(&syndrome::syndromes(
                &self.field,
                word,
                self.params.syndrome_count(),
            ))
    }

    /// Correct up to `t` bit errors in `received`.
    ///
    /// Patterns the code cannot correct are reported in `Decoded::failure`
    /// and leave the word unchanged.
    pub fn decode(&self, received: u16) -> Result<Decoded, BchError> {
        if received & !WORD_MASK != 0 {
            return Err(BchError::WordTooWide(received));
        }

        let syndromes = syndrome::syndromes(&self.field, received, self.params.syndrome_count());
        if syndrome::is_zero(&syndromes) {
            return Ok(Decoded::clean(received));
        }

        let located = euclid::error_locator(&self.field, &syndromes, self.params.max_errors)
            .and_then(|locator| chien::find_roots(&self.field, &locator));

        match located {
            Ok(roots) => {
                let offsets = chien::offsets(&self.field, &roots);
                let corrected = chien::correct(received, &offsets);
                Ok(Decoded { corrected, errors_found: offsets.len(), offsets, failure: None })
            }
            Err(reason) => {
                debug!("word {received:#06x} is uncorrectable: {reason}");
                Ok(Decoded { failure: Some(reason), ..Decoded::clean(received) })
            }
        }
    }

    /// Decode and return only the message bits.
    pub fn decode_message(&self, received: u16) -> Result<u16, BchError> {
        let decoded = self.decode(received)?;
        match decoded.failure {
            Some(reason) => Err(reason.into()),
            None => Ok(self.message_of(decoded.corrected)),
        }
    }
}
