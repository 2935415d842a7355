//! Glyph tables shared by the transcribers.

use serde::{Deserialize, Serialize};

pub const DIGITS: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Place values up to the super units. Appending a glyph here extends the range by one group.
pub const UNITS: [&str; 7] = ["", "十", "百", "千", "万", "亿", "兆"];

/// Place values nested inside a super group. `万` is only reachable under the top group.
pub const MINOR_UNITS: [&str; 4] = ["十", "百", "千", "万"];

pub const DECIMAL_POINT: &str = "点";
pub const SIGN_POSITIVE: &str = "正";
pub const SIGN_NEGATIVE: &str = "负";
pub const SIGN_DUAL: &str = "正负";

/// Width of a digit group; super units sit at multiples of it.
pub const GROUP_SPAN: usize = 4;

/// Index in `UNITS` of the first super unit (万).
const FIRST_SUPER: usize = GROUP_SPAN;

/// Number of super groups (万, 亿, 兆).
pub const SUPER_GROUPS: usize = UNITS.len() - FIRST_SUPER;

/// Glyph rendering the digit zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroStyle {
    /// 零
    #[default]
    Ling,
    /// 〇
    Circle,
}

impl ZeroStyle {
    pub fn glyph(self) -> &'static str {
        match self {
            ZeroStyle::Ling => DIGITS[0],
            ZeroStyle::Circle => "〇",
        }
    }
}

/// Glyph for a single decimal digit `d` (0..=9).
pub fn digit(d: u8, zero: ZeroStyle) -> &'static str {
    match d {
        0 => zero.glyph(),
        d => DIGITS[usize::from(d)],
    }
}

/// Super unit of group `group` (0 = 万, 1 = 亿, 2 = 兆).
pub fn super_unit(group: usize) -> &'static str {
    UNITS[FIRST_SUPER + group]
}

/// Position of the digit that carries `super_unit(group)` directly.
pub fn group_base(group: usize) -> usize {
    (group + 1) * GROUP_SPAN
}

/// Highest digit position a non-zero digit may occupy.
pub fn max_position() -> usize {
    group_base(SUPER_GROUPS - 1) + MINOR_UNITS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_styles() {
        assert_eq!(digit(0, ZeroStyle::Ling), "零");
        assert_eq!(digit(0, ZeroStyle::Circle), "〇");
        assert_eq!(digit(7, ZeroStyle::Circle), "七");
    }

    #[test]
    fn test_super_groups() {
        assert_eq!(SUPER_GROUPS, 3);
        assert_eq!(super_unit(0), "万");
        assert_eq!(super_unit(2), "兆");
        assert_eq!(group_base(1), 8);
        assert_eq!(max_position(), 16);
    }
}
