use num_bigint::BigUint;

use super::errors::CodecError;
use super::header::HEADER_WIDTH;
use super::math;
use crate::core::table::Table;

/// Largest codeword length the header can carry: `S^4 - 1`.
///
/// Saturates instead of overflowing; a table of every Unicode scalar value
/// still fits in `u128`.
pub fn max_codeword_length(table_size: usize) -> u128 {
    (table_size as u128)
        .saturating_pow(HEADER_WIDTH as u32)
        .saturating_sub(1)
}

/// Picks the codeword length `L` that makes the body shortest.
///
/// Candidates run from 1 up to [`max_codeword_length`]. The cost of `L` is
/// the number of base-`S^L` digits of `value` times `L`. Only a strictly
/// smaller cost replaces the current best, so ties keep the smaller `L`.
///
/// # Errors
///
/// Returns [`CodecError::InvalidTable`] if the table cannot represent any
/// codeword length.
pub fn choose_codeword_length(table_size: usize, value: &BigUint) -> Result<usize, CodecError> {
    let max_length = max_codeword_length(table_size);
    if max_length < 1 {
        return Err(CodecError::InvalidTable {
            supplied: table_size,
            distinct: table_size,
        });
    }

    // With n base-S digits, value has exactly ceil(n / L) digits in base S^L.
    // Any L > n costs L > n, which never beats L = 1, so the scan ends at n.
    let symbols = math::count_digits(value, table_size);
    let last = max_length.min(symbols as u128) as usize;

    let mut best_length = 1;
    let mut best_cost = usize::MAX;
    for length in 1..=last {
        let cost = symbols.div_ceil(length) * length;
        if cost < best_cost {
            best_cost = cost;
            best_length = length;
        }
    }

    tracing::debug!(
        table_size,
        symbols,
        codeword_length = best_length,
        body_symbols = best_cost,
        "chose codeword length"
    );
    Ok(best_length)
}

/// Appends `digit` to `out` as exactly `length` table symbols.
///
/// `position` is the symbol index the codeword starts at, used for errors.
pub fn push_codeword(
    out: &mut String,
    digit: &BigUint,
    length: usize,
    table: &Table,
    position: usize,
) -> Result<(), CodecError> {
    let digits = math::to_fixed_width(digit, table.base(), length)
        .ok_or(CodecError::CodewordOverflow { position, length })?;
    let symbols = table.symbols();
    out.extend(digits.into_iter().map(|d| symbols[d]));
    Ok(())
}

/// Reads one codeword back into its base-`S^L` digit.
///
/// `position` is the symbol index of `codeword[0]` in the encoded string.
pub fn read_codeword(
    codeword: &[char],
    base: &BigUint,
    table: &Table,
    position: usize,
) -> Result<BigUint, CodecError> {
    let digits = codeword
        .iter()
        .enumerate()
        .map(|(offset, &c)| table.lookup(c, position + offset))
        .collect::<Result<Vec<_>, _>>()?;

    let digit = math::from_small_digits(&digits, table.base());
    if digit >= *base {
        return Err(CodecError::CodewordOverflow {
            position,
            length: codeword.len(),
        });
    }
    Ok(digit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::algorithms::frame;

    #[test]
    fn test_max_codeword_length() {
        assert_eq!(max_codeword_length(2), 15);
        assert_eq!(max_codeword_length(16), 65_535);
        assert_eq!(max_codeword_length(1), 0);
        assert_eq!(max_codeword_length(0x110000), 0x110000u128.pow(4) - 1);
    }

    #[test]
    fn test_unusable_table_size_rejected() {
        assert!(matches!(
            choose_codeword_length(1, &BigUint::from(10u8)),
            Err(CodecError::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_tie_prefers_smallest_length() {
        // 6 binary digits: L = 1, 2, 3 and 6 all cost 6
        let value = BigUint::from(0b100000u8);
        assert_eq!(choose_codeword_length(2, &value).unwrap(), 1);
    }

    #[test]
    fn test_zero_value_uses_length_one() {
        assert_eq!(choose_codeword_length(3, &BigUint::from(0u8)).unwrap(), 1);
    }

    #[test]
    fn test_choice_matches_exhaustive_scan() {
        let value = frame::frame("Hello, 世界".as_bytes());
        for size in [2usize, 3, 10, 16] {
            let mut best = (usize::MAX, 0);
            let max = max_codeword_length(size).min(400) as usize;
            for length in 1..=max {
                let base = math::power(size, length);
                let cost = math::to_digits(&value, &base).len() * length;
                if cost < best.0 {
                    best = (cost, length);
                }
            }
            assert_eq!(choose_codeword_length(size, &value).unwrap(), best.1);
        }
    }

    #[test]
    fn test_huge_table_scan_is_bounded() {
        let value = frame::frame(b"payload");
        assert_eq!(choose_codeword_length(0x10000, &value).unwrap(), 1);
    }

    #[test]
    fn test_codeword_round_trip() {
        let table: Table = "abc".parse().unwrap();
        let base = math::power(3, 3);
        let mut out = String::new();
        push_codeword(&mut out, &BigUint::from(5u8), 3, &table, 4).unwrap();
        assert_eq!(out, "abc");

        let chars: Vec<char> = out.chars().collect();
        assert_eq!(
            read_codeword(&chars, &base, &table, 4).unwrap(),
            BigUint::from(5u8)
        );
    }

    #[test]
    fn test_push_codeword_overflow() {
        let table: Table = "ab".parse().unwrap();
        let mut out = String::new();
        assert_eq!(
            push_codeword(&mut out, &BigUint::from(4u8), 2, &table, 4),
            Err(CodecError::CodewordOverflow {
                position: 4,
                length: 2
            })
        );
    }

    #[test]
    fn test_read_codeword_overflow() {
        let table: Table = "ab".parse().unwrap();
        // a base smaller than S^L can only come from inconsistent arguments
        let base = BigUint::from(2u8);
        assert_eq!(
            read_codeword(&['b', 'b'], &base, &table, 6),
            Err(CodecError::CodewordOverflow {
                position: 6,
                length: 2
            })
        );
    }

    #[test]
    fn test_read_codeword_foreign_symbol() {
        let table: Table = "ab".parse().unwrap();
        let base = math::power(2, 2);
        assert_eq!(
            read_codeword(&['a', 'x'], &base, &table, 10),
            Err(CodecError::InvalidSymbol {
                symbol: 'x',
                position: 11
            })
        );
    }
}
