use num_bigint::BigUint;
use num_traits::Zero;

use super::codeword::{push_codeword, read_codeword};
use super::errors::CodecError;
use super::header::HEADER_WIDTH;
use super::math;
use crate::core::table::Table;

/// Writes `value` in base `S^length`, one `length`-symbol codeword per digit.
///
/// Always emits at least one codeword, also for zero.
pub fn encode_body(value: &BigUint, length: usize, table: &Table) -> Result<String, CodecError> {
    let base = math::power(table.base(), length);
    let digits = math::to_digits(value, &base);

    let mut out = String::with_capacity(digits.len() * length);
    for (index, digit) in digits.iter().enumerate() {
        push_codeword(
            &mut out,
            digit,
            length,
            table,
            HEADER_WIDTH + index * length,
        )?;
    }
    Ok(out)
}

/// Reads the body (the symbols after the header) back into the integer it encodes.
///
/// # Errors
///
/// - [`CodecError::MisalignedBody`] if the body is not whole codewords
/// - [`CodecError::InvalidSymbol`] for a symbol outside the table
/// - [`CodecError::CodewordOverflow`] if a codeword exceeds the base
pub fn decode_body(body: &[char], length: u128, table: &Table) -> Result<BigUint, CodecError> {
    if body.len() as u128 % length != 0 {
        return Err(CodecError::MisalignedBody {
            body: body.len(),
            length,
        });
    }
    if body.is_empty() {
        return Ok(BigUint::zero());
    }

    // length divides a non-empty body, so it fits in usize
    let length = length as usize;

    if length == 1 {
        let digits = body
            .iter()
            .enumerate()
            .map(|(index, &c)| table.lookup(c, HEADER_WIDTH + index))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(math::from_small_digits(&digits, table.base()));
    }

    let base = math::power(table.base(), length);
    let mut value = BigUint::zero();
    for (index, codeword) in body.chunks(length).enumerate() {
        let digit = read_codeword(codeword, &base, table, HEADER_WIDTH + index * length)?;
        value *= &base;
        value += digit;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_zero_is_one_codeword() {
        let table: Table = "ab".parse().unwrap();
        assert_eq!(encode_body(&BigUint::zero(), 3, &table).unwrap(), "aaa");
    }

    #[test]
    fn test_body_is_multiple_of_length() {
        let table: Table = "0123456789".parse().unwrap();
        let value = BigUint::from(12345u32);
        assert_eq!(encode_body(&value, 1, &table).unwrap(), "12345");
        assert_eq!(encode_body(&value, 2, &table).unwrap(), "012345");
        assert_eq!(encode_body(&value, 3, &table).unwrap(), "012345");
        assert_eq!(encode_body(&value, 4, &table).unwrap(), "00012345");
    }

    #[test]
    fn test_wide_codewords_decode() {
        let table: Table = "0123456789".parse().unwrap();
        let value = BigUint::from(12345u32);
        for length in 1..=6 {
            let body = encode_body(&value, length, &table).unwrap();
            assert_eq!(
                decode_body(&chars(&body), length as u128, &table).unwrap(),
                value,
                "length {length}"
            );
        }
    }

    #[test]
    fn test_misaligned_body() {
        let table: Table = "ab".parse().unwrap();
        assert_eq!(
            decode_body(&chars("abbab"), 2, &table),
            Err(CodecError::MisalignedBody { body: 5, length: 2 })
        );
    }

    #[test]
    fn test_empty_body_with_huge_length() {
        let table: Table = "ab".parse().unwrap();
        assert_eq!(decode_body(&[], u128::MAX, &table).unwrap(), BigUint::zero());
        assert!(matches!(
            decode_body(&chars("ab"), u128::MAX, &table),
            Err(CodecError::MisalignedBody { body: 2, .. })
        ));
    }

    #[test]
    fn test_foreign_symbol_position_counts_header() {
        let table: Table = "ab".parse().unwrap();
        assert_eq!(
            decode_body(&chars("abXb"), 1, &table),
            Err(CodecError::InvalidSymbol {
                symbol: 'X',
                position: 6
            })
        );
        assert_eq!(
            decode_body(&chars("abXb"), 2, &table),
            Err(CodecError::InvalidSymbol {
                symbol: 'X',
                position: 6
            })
        );
    }
}
