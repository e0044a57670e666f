use num_bigint::BigUint;

use super::codeword::max_codeword_length;
use super::errors::CodecError;
use super::math;
use crate::core::table::Table;

/// Number of table symbols that carry the codeword length.
pub const HEADER_WIDTH: usize = 4;

/// Writes `length` as exactly [`HEADER_WIDTH`] base-`S` symbols.
pub fn encode_header(length: usize, table: &Table) -> Result<String, CodecError> {
    let max = max_codeword_length(table.base());
    let overflow = CodecError::HeaderOverflow {
        length: length as u128,
        max,
    };
    if length == 0 || length as u128 > max {
        return Err(overflow);
    }

    let digits = math::to_fixed_width(&BigUint::from(length), table.base(), HEADER_WIDTH)
        .ok_or(overflow)?;
    let symbols = table.symbols();
    Ok(digits.into_iter().map(|d| symbols[d]).collect())
}

/// Reads the codeword length from the first [`HEADER_WIDTH`] symbols.
///
/// # Errors
///
/// - [`CodecError::TruncatedInput`] if fewer than four symbols are given
/// - [`CodecError::InvalidSymbol`] if a header symbol is not in the table
/// - [`CodecError::HeaderOverflow`] if the length is zero or above `S^4 - 1`
pub fn decode_header(symbols: &[char], table: &Table) -> Result<u128, CodecError> {
    if symbols.len() < HEADER_WIDTH {
        return Err(CodecError::TruncatedInput {
            actual: symbols.len(),
        });
    }

    let base = table.base() as u128;
    let mut length = 0u128;
    for (position, &c) in symbols[..HEADER_WIDTH].iter().enumerate() {
        let digit = table.lookup(c, position)? as u128;
        length = length * base + digit;
    }

    let max = max_codeword_length(table.base());
    if length == 0 || length > max {
        return Err(CodecError::HeaderOverflow { length, max });
    }
    Ok(length)
}
