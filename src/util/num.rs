/// Converts the text of an integer literal into its value.
///
/// The digits are read as an unsigned 64-bit number and reinterpreted as a
/// two's complement signed value, so every `i64` can be written in source:
/// `9223372036854775808` is `i64::MIN`, and `-9223372036854775808` negates to
/// itself.
///
/// ## Returns
/// - `Some(i64)`: The literal value.
/// - `None`: If the text is not a decimal number or exceeds `u64::MAX`.
///
/// ## Example
/// ```
/// use castellano::util::num::parse_integer_literal;
///
/// assert_eq!(parse_integer_literal("52"), Some(52));
/// assert_eq!(parse_integer_literal("9223372036854775808"), Some(i64::MIN));
/// assert_eq!(parse_integer_literal("18446744073709551616"), None);
/// ```
#[must_use]
pub fn parse_integer_literal(literal: &str) -> Option<i64> {
    literal.parse::<u64>().ok().map(u64_to_i64_wrapping)
}

/// Reinterprets the bits of a `u64` as an `i64`.
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub const fn u64_to_i64_wrapping(value: u64) -> i64 {
    value as i64
}

/// Divides two integers, truncating toward zero.
///
/// Overflow wraps (`i64::MIN / -1` is `i64::MIN`).
///
/// ## Returns
/// - `Some(i64)`: The quotient.
/// - `None`: If `divisor` is zero.
///
/// ## Example
/// ```
/// use castellano::util::num::wrapping_division;
///
/// assert_eq!(wrapping_division(-7, 2), Some(-3));
/// assert_eq!(wrapping_division(i64::MIN, -1), Some(i64::MIN));
/// assert_eq!(wrapping_division(1, 0), None);
/// ```
#[must_use]
pub const fn wrapping_division(dividend: i64, divisor: i64) -> Option<i64> {
    if divisor == 0 {
        return None;
    }
    Some(dividend.wrapping_div(divisor))
}
