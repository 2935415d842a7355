//! Leading sign detection.

use crate::{
    error::{NumZhError, Result},
    model::ParsedSign,
};

/// Classifies the sign of `raw` and returns it with the unsigned remainder.
///
/// `±` is taken literally and skips numeric validation; everything else has to
/// parse as a signed decimal number. A zero keeps the sign it was written with.
pub fn resolve_sign(raw: &str) -> Result<(ParsedSign, &str)> {
    if raw.starts_with('±') {
        return Ok((ParsedSign::Dual, raw.trim_start_matches(&['±', '+', '-'][..])));
    }

    let value: f64 = raw.parse().map_err(|_| NumZhError::invalid(raw))?;
    let sign = if value < 0.0 {
        ParsedSign::Negative
    } else if value > 0.0 {
        if raw.contains('+') {
            ParsedSign::Positive
        } else {
            ParsedSign::None
        }
    } else if raw.starts_with('-') {
        ParsedSign::Negative
    } else if raw.starts_with('+') {
        ParsedSign::Positive
    } else {
        ParsedSign::None
    };

    Ok((sign, raw.trim_start_matches(&['+', '-'][..])))
}
