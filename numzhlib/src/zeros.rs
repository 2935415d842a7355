//! Leading-zero split used by significant-figure elision.

/// Splits `digits` into `(leading_zeros, other_digits)`.
pub fn split_leading_zeros(digits: &str) -> (&str, &str) {
    let first_significant = digits
        .find(|c: char| c != '0')
        .unwrap_or(digits.len());
    digits.split_at(first_significant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(split_leading_zeros("000120"), ("000", "120"));
        assert_eq!(split_leading_zeros("120"), ("", "120"));
        assert_eq!(split_leading_zeros("0000"), ("0000", ""));
        assert_eq!(split_leading_zeros(""), ("", ""));
    }
}
