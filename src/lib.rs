pub mod error;
pub mod gf;
pub mod bch;

pub use error::*;
pub use gf::{gf16::Gf16, gf2};
pub use bch::{Bch15, BchParams, Decoded};
