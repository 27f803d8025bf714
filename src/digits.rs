//! Decimal digit helpers
//!
//! Exact integer arithmetic throughout: squares of `u64` seeds are held in
//! `u128`, and powers of ten are computed with `checked_pow` so large
//! exponents report overflow instead of rounding.

/// Square of a seed, widened so it cannot overflow
#[inline]
pub fn square(n: u64) -> u128 {
    let n = n as u128;
    n * n
}

/// Number of decimal digits in `n`
///
/// Zero is written with one digit, so `digit_count(0) == 1`.
#[inline]
pub fn digit_count(n: u128) -> u32 {
    if n == 0 { 1 } else { n.ilog10() + 1 }
}

/// `base` raised to `exponent`, or `None` if the result overflows
#[inline]
pub fn power(base: u128, exponent: u32) -> Option<u128> {
    base.checked_pow(exponent)
}

/// Extract the middle `width` decimal digits of `n`
///
/// Drops `(digit_count - width) / 2` digits from the right, then keeps the
/// low `width` digits. When the digits left over are odd, the extra one is
/// dropped from the left. Returns `None` when `width` exceeds the digit
/// count of `n`.
pub fn middle_digits(n: u128, width: u32) -> Option<u128> {
    let digits = digit_count(n);
    if width > digits {
        return None;
    }

    // trim right end
    let right = (digits - width) / 2;
    let trimmed = n / power(10, right)?;

    // trim left end; 10^39 overflows u128 but no u128 has that many digits
    match power(10, width) {
        Some(modulus) => Some(trimmed % modulus),
        None => Some(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_widens() {
        assert_eq!(square(3), 9);
        assert_eq!(square(u64::MAX), (u64::MAX as u128) * (u64::MAX as u128));
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(1), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(100), 3);
        assert_eq!(digit_count(99_999_999), 8);
        assert_eq!(digit_count(u128::MAX), 39);
    }

    #[test]
    fn test_power() {
        assert_eq!(power(10, 0), Some(1));
        assert_eq!(power(10, 8), Some(100_000_000));
        assert_eq!(power(10, 38), Some(10u128.pow(38)));
        assert_eq!(power(10, 39), None);
    }

    #[test]
    fn test_middle_digits_odd_and_even() {
        assert_eq!(middle_digits(123_456_789, 3), Some(456));
        // 5 digits, window 2: drop one on the right, one on the left
        assert_eq!(middle_digits(12_345, 2), Some(34));
        assert_eq!(middle_digits(1234, 4), Some(1234));
    }

    #[test]
    fn test_middle_digits_window_too_wide() {
        assert_eq!(middle_digits(5, 10), None);
        assert_eq!(middle_digits(9_998_244, 8), None);
        assert_eq!(middle_digits(0, 2), None);
    }

    #[test]
    fn test_middle_digits_full_width_u128() {
        assert_eq!(middle_digits(u128::MAX, 39), Some(u128::MAX));
    }
}
