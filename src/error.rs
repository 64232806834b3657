/// Raised while building the field or the generator polynomial.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("modulus {modulus:#04x} is not a degree-4 polynomial")]
    ModulusDegree { modulus: u8 },
    #[error("primitive element {0:#x} is not a nonzero element of GF(16)")]
    PrimitiveOutOfRange(u8),
    #[error("{primitive:#x} does not generate GF(16)* modulo {modulus:#04x}")]
    NotPrimitive { primitive: u8, modulus: u8 },
    #[error("max_errors must be in 1..=3, got {0}")]
    MaxErrors(usize),
    #[error("no minimal polynomial of degree <= 4 vanishes at alpha^{exponent}")]
    NoMinimalPolynomial { exponent: usize },
    #[error("generator polynomial of degree {degree} is unusable for a 15-bit code")]
    DegenerateGenerator { degree: u32 },
}

/// Why a received word could not be corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Uncorrectable {
    #[error("key equation remainder of length {remainder} is not shorter than the locator ({locator})")]
    RemainderTooLarge { remainder: usize, locator: usize },
    #[error("error locator has a zero leading coefficient")]
    LocatorLeadingZero,
    #[error("error locator expects {expected} roots, found {found}")]
    RootCountMismatch { expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BchError {
    #[error("invalid code parameters: {0}")]
    Config(#[from] ConfigError),
    #[error("message {message:#x} does not fit in {bits} message bits")]
    MessageTooWide { message: u16, bits: usize },
    #[error("received word {0:#x} is wider than 15 bits")]
    WordTooWide(u16),
    #[error("uncorrectable word: {0}")]
    Uncorrectable(#[from] Uncorrectable),
}
