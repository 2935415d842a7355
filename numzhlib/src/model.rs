//! Domain types passed between the transcription stages and the driver.

use crate::glyphs::{self, ZeroStyle};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsedSign {
    None,
    Positive,
    Negative,
    /// `±`, read as "positive or negative".
    Dual,
}

impl ParsedSign {
    pub fn glyph(self) -> &'static str {
        match self {
            ParsedSign::None => "",
            ParsedSign::Positive => glyphs::SIGN_POSITIVE,
            ParsedSign::Negative => glyphs::SIGN_NEGATIVE,
            ParsedSign::Dual => glyphs::SIGN_DUAL,
        }
    }
}

/// Numeral text with the sign already stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsignedNumeral<'a> {
    pub integer_part: &'a str,
    /// `Some` iff the text carried a decimal point, even with nothing after it.
    pub fraction_part: Option<&'a str>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscribeOptions {
    /// Digit separator removed before parsing, e.g. `,` in `1,000`.
    pub separator: Option<String>,
    /// Render leading integer zeros as bare zero glyphs.
    pub significant_only: bool,
    pub zero: ZeroStyle,
}

/// One input line after the driver has run it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcription {
    pub input: String,
    pub output: Option<String>,
    pub error: Option<String>,
}
