//! Integer part: unit placement and zero elision.
//!
//! Digits are addressed by position, 0 being the ones digit. Positions 4, 8 and
//! 12 carry 万, 亿 and 兆 themselves; the positions between them are 十/百/千
//! nested inside that group, and the group's unit follows the lowest non-zero
//! digit of the group exactly once. The output is built in reading order.

use crate::{
    error::{NumZhError, Result},
    glyphs::{self, ZeroStyle, GROUP_SPAN, MINOR_UNITS, SUPER_GROUPS, UNITS},
};

/// Unit that follows a non-zero digit at some position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Place {
    /// 个/十/百/千, or the group's own 万/亿/兆.
    Direct(&'static str),
    /// A minor unit inside super group `group`.
    Nested { minor: &'static str, group: usize },
}

fn place(position: usize) -> Result<Place> {
    if position < GROUP_SPAN {
        return Ok(Place::Direct(UNITS[position]));
    }

    let top = SUPER_GROUPS - 1;
    let group = (position / GROUP_SPAN - 1).min(top);
    match position - glyphs::group_base(group) {
        0 => Ok(Place::Direct(glyphs::super_unit(group))),
        // the top group also owns the 万 above its 千
        offset if offset < GROUP_SPAN || position <= glyphs::max_position() => {
            Ok(Place::Nested {
                minor: MINOR_UNITS[offset - 1],
                group,
            })
        }
        _ => Err(NumZhError::Overflow { position }),
    }
}

fn is_group_base(position: usize) -> bool {
    position >= GROUP_SPAN
        && position % GROUP_SPAN == 0
        && position / GROUP_SPAN <= SUPER_GROUPS
}

/// A zero is spoken unless it sits on a group base, and only when the next
/// digit below it (looking through one silent group base) is non-zero, so a
/// run of zeros yields a single glyph and trailing zeros yield none.
fn speaks_zero(values: &[u8], position: usize) -> bool {
    if is_group_base(position) {
        return false;
    }
    let below = match position.checked_sub(1) {
        Some(p) if is_group_base(p) && values[p] == 0 => p.checked_sub(1),
        other => other,
    };
    below.map_or(false, |p| values[p] != 0)
}

/// Transcribes an unsigned digit string, leading zeros allowed.
///
/// # Errors
/// - `InvalidNumberFormat` if `digits` holds anything but ASCII digits;
/// - `Overflow` if a non-zero digit lies above position 16.
pub fn transcribe_integer(digits: &str, zero: ZeroStyle) -> Result<String> {
    if digits.is_empty() {
        return Ok(String::new());
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumZhError::invalid(digits));
    }

    // least significant first, so that `values[position]` is the digit at `position`
    let values: Vec<u8> = digits.bytes().rev().map(|b| b - b'0').collect();
    if values.iter().all(|&d| d == 0) {
        return Ok(zero.glyph().to_string());
    }

    let mut out = String::with_capacity(values.len() * 6);
    for position in (0..values.len()).rev() {
        let d = values[position];
        if d == 0 {
            if speaks_zero(&values, position) {
                out.push_str(zero.glyph());
            }
            continue;
        }

        let (unit, anchor) = match place(position)? {
            Place::Direct(unit) => (unit, None),
            Place::Nested { minor, group } => {
                let first_in_group = values[glyphs::group_base(group)..position]
                    .iter()
                    .all(|&v| v == 0);
                (minor, first_in_group.then(|| glyphs::super_unit(group)))
            }
        };

        // 一十 opening the number is read 十
        if !(out.is_empty() && d == 1 && unit == UNITS[1]) {
            out.push_str(glyphs::digit(d, zero));
        }
        out.push_str(unit);
        if let Some(anchor) = anchor {
            out.push_str(anchor);
        }
    }

    Ok(out)
}
