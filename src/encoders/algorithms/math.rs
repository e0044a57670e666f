//! Arbitrary-precision positional conversion.
//!
//! All digit sequences are most significant first. Zero is always represented
//! by a single `0` digit, never by an empty sequence.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{Pow, Zero};

/// Largest radix `num-bigint` converts natively.
const NATIVE_RADIX_MAX: usize = 256;

/// Returns `base^exponent`.
pub fn power(base: usize, exponent: usize) -> BigUint {
    Pow::pow(BigUint::from(base), exponent)
}

/// Converts `value` to digits in an arbitrary `base` (at least 2).
pub fn to_digits(value: &BigUint, base: &BigUint) -> Vec<BigUint> {
    debug_assert!(*base >= BigUint::from(2u8));

    if let Some(radix) = native_radix(base) {
        return value
            .to_radix_be(radix)
            .into_iter()
            .map(BigUint::from)
            .collect();
    }

    if value.is_zero() {
        return vec![BigUint::zero()];
    }

    let mut num = value.clone();
    let mut digits = Vec::new();
    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(base);
        digits.push(remainder);
        num = quotient;
    }

    digits.reverse();
    digits
}

/// Converts `value` to digits in a table-sized `base` (at least 2).
pub fn to_small_digits(value: &BigUint, base: usize) -> Vec<usize> {
    if base <= NATIVE_RADIX_MAX {
        return value
            .to_radix_be(base as u32)
            .into_iter()
            .map(usize::from)
            .collect();
    }

    to_digits(value, &BigUint::from(base))
        .iter()
        .map(low_digit)
        .collect()
}

/// Writes `value` as exactly `width` digits in `base`, zero padded on the left.
///
/// Returns `None` if `value` needs more than `width` digits.
pub fn to_fixed_width(value: &BigUint, base: usize, width: usize) -> Option<Vec<usize>> {
    let digits = to_small_digits(value, base);
    if digits.len() > width {
        return None;
    }

    let mut padded = vec![0; width - digits.len()];
    padded.extend(digits);
    Some(padded)
}

/// Recombines digits of an arbitrary `base`: `value = value * base + digit`.
pub fn from_digits<I>(digits: I, base: &BigUint) -> BigUint
where
    I: IntoIterator<Item = BigUint>,
{
    let mut value = BigUint::zero();
    for digit in digits {
        value *= base;
        value += digit;
    }
    value
}

/// Recombines digits of a table-sized `base`. Every digit must be below `base`.
pub fn from_small_digits(digits: &[usize], base: usize) -> BigUint {
    if base <= NATIVE_RADIX_MAX && !digits.is_empty() {
        let bytes: Vec<u8> = digits.iter().map(|&d| d as u8).collect();
        if let Some(value) = BigUint::from_radix_be(&bytes, base as u32) {
            return value;
        }
    }

    from_digits(digits.iter().map(|&d| BigUint::from(d)), &BigUint::from(base))
}

/// Number of digits `value` needs in `base` (at least 2). Zero needs one.
pub fn count_digits(value: &BigUint, base: usize) -> usize {
    if value.is_zero() {
        return 1;
    }

    // Estimate from the bit length, then settle on the exact n with
    // base^(n-1) <= value < base^n.
    let bits = value.bits() as f64;
    let mut n = (bits / (base as f64).log2()).ceil().max(1.0) as usize;
    while n > 1 && power(base, n - 1) > *value {
        n -= 1;
    }
    while power(base, n) <= *value {
        n += 1;
    }
    n
}

fn native_radix(base: &BigUint) -> Option<u32> {
    let mut words = base.iter_u32_digits();
    match (words.next(), words.next()) {
        (Some(radix), None) if radix as usize <= NATIVE_RADIX_MAX => Some(radix),
        _ => None,
    }
}

fn low_digit(digit: &BigUint) -> usize {
    digit.iter_u64_digits().next().unwrap_or(0) as usize
}
