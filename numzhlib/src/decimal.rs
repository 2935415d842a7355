//! Fraction part, read digit by digit.

use crate::{
    error::{NumZhError, Result},
    glyphs::{self, ZeroStyle},
};

pub fn transcribe_fraction(digits: &str, zero: ZeroStyle) -> Result<String> {
    digits
        .bytes()
        .map(|b| {
            if b.is_ascii_digit() {
                Ok(glyphs::digit(b - b'0', zero))
            } else {
                Err(NumZhError::invalid(digits))
            }
        })
        .collect()
}
