pub mod gf2;
pub mod gf16;
