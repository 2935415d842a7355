//! Full transcription of one numeral: sign, integer part, fraction.

use crate::{
    decimal::transcribe_fraction,
    error::{NumZhError, Result},
    glyphs::DECIMAL_POINT,
    integer::transcribe_integer,
    model::{TranscribeOptions, UnsignedNumeral},
    sign::resolve_sign,
    zeros::split_leading_zeros,
};
use tracing::debug;

/// Transcribes `input` with the default zero style.
///
/// ```
/// let zh = numzhlib::transcribe("-1,024.5", Some(","), false).unwrap();
/// assert_eq!(zh, "负一千零二十四点五");
/// ```
pub fn transcribe(input: &str, separator: Option<&str>, significant_only: bool) -> Result<String> {
    Transcriber::new(TranscribeOptions {
        separator: separator.map(str::to_owned),
        significant_only,
        ..TranscribeOptions::default()
    })
    .transcribe(input)
}

#[derive(Debug, Clone, Default)]
pub struct Transcriber {
    options: TranscribeOptions,
}

impl Transcriber {
    pub fn new(options: TranscribeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TranscribeOptions {
        &self.options
    }

    pub fn transcribe(&self, input: &str) -> Result<String> {
        let cleaned = match self.options.separator.as_deref() {
            Some(sep) if !sep.is_empty() => input.replace(sep, ""),
            _ => input.to_owned(),
        };
        let cleaned: String = cleaned.chars().filter(|c| !c.is_whitespace()).collect();

        let (sign, unsigned) = resolve_sign(&cleaned)?;
        let numeral = split_point(unsigned)?;
        debug!(
            input,
            ?sign,
            integer = numeral.integer_part,
            fraction = ?numeral.fraction_part,
            "transcribing"
        );

        let mut out = String::from(sign.glyph());
        out.push_str(&self.integer(numeral.integer_part)?);
        if let Some(fraction) = numeral.fraction_part {
            out.push_str(DECIMAL_POINT);
            out.push_str(&transcribe_fraction(fraction, self.options.zero)?);
        }
        Ok(out)
    }

    fn integer(&self, digits: &str) -> Result<String> {
        let zero = self.options.zero;
        if !self.options.significant_only {
            return transcribe_integer(digits, zero);
        }
        let (leading, rest) = split_leading_zeros(digits);
        let mut out = zero.glyph().repeat(leading.len());
        out.push_str(&transcribe_integer(rest, zero)?);
        Ok(out)
    }
}

/// Splits unsigned text at its decimal point and checks both halves are digits.
/// An empty integer part is only accepted in front of a point (`.5`).
fn split_point(unsigned: &str) -> Result<UnsignedNumeral<'_>> {
    let (integer_part, fraction_part) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let integer_ok = all_digits(integer_part) && (fraction_part.is_some() || !integer_part.is_empty());
    if !integer_ok || !fraction_part.map_or(true, all_digits) {
        return Err(NumZhError::invalid(unsigned));
    }

    Ok(UnsignedNumeral {
        integer_part,
        fraction_part,
    })
}
